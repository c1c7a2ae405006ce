//! Unit tests for fg-food.

use fg_core::{Cell, SimRng};
use fg_spatial::{Grid, Neighborhood};

use crate::{FoodGrid, FoodLayout, SpotCount, generate};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Share of all food units within Chebyshev distance `within` of `centre`.
fn share_near(food: &FoodGrid, centre: Cell, within: i32) -> f64 {
    let grid = *food.grid();
    let near: u64 = food
        .tokens()
        .filter(|&(c, _)| grid.distance(centre, c, Neighborhood::Moore) <= within)
        .map(|(_, q)| u64::from(q))
        .sum();
    near as f64 / food.total() as f64
}

/// Pearson chi-square of food units bucketed into `blocks × blocks` equal
/// blocks, against a uniform spread.
fn block_chi_square(food: &FoodGrid, blocks: i32) -> f64 {
    let grid = *food.grid();
    let (bw, bh) = (grid.width() / blocks, grid.height() / blocks);
    let mut counts = vec![0_u64; (blocks * blocks) as usize];
    for (c, q) in food.tokens() {
        counts[((c.y / bh) * blocks + c.x / bw) as usize] += u64::from(q);
    }
    let expected = food.total() as f64 / counts.len() as f64;
    counts.iter().map(|&n| (n as f64 - expected).powi(2) / expected).sum()
}

/// Chi-square critical value at 99.9 % for 99 degrees of freedom.
const CHI2_99DF_999: f64 = 148.2;

// ── FoodGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod food_grid {
    use super::*;

    #[test]
    fn deposit_merges_into_existing_token() {
        let mut food = FoodGrid::new(Grid::square(5).unwrap());
        food.place(Cell::new(1, 1), 1);
        food.place(Cell::new(1, 1), 2);
        food.place(Cell::new(6, 1), 1); // wraps onto (1, 1)
        assert_eq!(food.quantity(Cell::new(1, 1)), 4);
        assert_eq!(food.token_count(), 1);
        assert_eq!(food.total(), 4);
    }

    #[test]
    fn full_cell_keeps_total_in_step() {
        let mut food = FoodGrid::new(Grid::square(5).unwrap());
        assert_eq!(food.place(Cell::new(0, 0), u32::MAX - 1), u32::MAX - 1);
        assert_eq!(food.place(Cell::new(0, 0), 5), 1);
        assert_eq!(food.place(Cell::new(0, 0), 5), 0);
        food.place(Cell::new(1, 0), 3);
        assert_eq!(food.quantity(Cell::new(0, 0)), u32::MAX);
        assert_eq!(food.total(), u64::from(u32::MAX) + 3);
        assert_eq!(food.token_count(), 2);
    }

    #[test]
    fn consuming_to_zero_removes_token() {
        let mut food = FoodGrid::new(Grid::square(5).unwrap());
        food.place(Cell::new(2, 2), 3);
        assert_eq!(food.consume(Cell::new(2, 2), 2), 2);
        assert!(food.has_food(Cell::new(2, 2)));
        assert_eq!(food.consume(Cell::new(2, 2), 5), 1);
        assert!(!food.has_food(Cell::new(2, 2)));
        assert_eq!(food.token_count(), 0);
        assert_eq!(food.total(), 0);
        assert_eq!(food.consume(Cell::new(2, 2), 1), 0);
    }

    #[test]
    fn sensing_and_border() {
        let mut food = FoodGrid::new(Grid::square(10).unwrap());
        for x in 2..=6 {
            for y in 2..=6 {
                food.place(Cell::new(x, y), 1);
            }
        }
        assert!(!food.at_border(Cell::new(4, 4)).unwrap());
        assert!(food.at_border(Cell::new(2, 4)).unwrap());
        assert!(food.senses_food(Cell::new(1, 1), Neighborhood::Moore, 1).unwrap());
        assert!(!food.senses_food(Cell::new(0, 0), Neighborhood::Moore, 1).unwrap());
        assert_eq!(food.tokens().count(), 25);
    }
}

// ── Generators ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generators {
    use super::*;

    #[test]
    fn spot_count_accepts_only_one_two_four() {
        assert_eq!(SpotCount::try_from(4).unwrap(), SpotCount::Four);
        let err = SpotCount::try_from(3).unwrap_err();
        assert_eq!(err.param(), Some("food.spots"));
    }

    #[test]
    fn negative_inputs_are_config_errors() {
        let grid = Grid::square(10).unwrap();
        let mut rng = SimRng::new(1);
        let err = generate(&FoodLayout::Clustered { gamma: -1.0, total_food: 10, anchor: None }, grid, &mut rng)
            .unwrap_err();
        assert_eq!(err.param(), Some("food.gamma"));
        let err = generate(&FoodLayout::MultiSpot { spots: SpotCount::One, total_food: -5 }, grid, &mut rng)
            .unwrap_err();
        assert_eq!(err.param(), Some("food.total_food"));
    }

    #[test]
    fn clustered_places_every_unit() {
        let grid = Grid::square(35).unwrap();
        let mut rng = SimRng::new(5);
        let food = generate(&FoodLayout::Clustered { gamma: 1.0, total_food: 1000, anchor: None }, grid, &mut rng)
            .unwrap();
        assert_eq!(food.total(), 1000);
    }

    #[test]
    fn large_gamma_clusters_around_the_seed() {
        let grid = Grid::square(100).unwrap();
        let seed = Cell::new(50, 50);
        let mut rng = SimRng::new(7);
        let layout = FoodLayout::Clustered { gamma: 50.0, total_food: 500, anchor: Some(seed) };
        let food = generate(&layout, grid, &mut rng).unwrap();
        assert!(food.has_food(seed));
        let share = share_near(&food, seed, 15);
        assert!(share >= 0.9, "share near seed = {share}");
    }

    #[test]
    fn zero_gamma_is_uniform() {
        let grid = Grid::square(100).unwrap();
        let mut rng = SimRng::new(7);
        let layout = FoodLayout::Clustered { gamma: 0.0, total_food: 5000, anchor: Some(Cell::new(50, 50)) };
        let food = generate(&layout, grid, &mut rng).unwrap();
        assert_eq!(food.total(), 5000);
        let chi2 = block_chi_square(&food, 10);
        assert!(chi2 < CHI2_99DF_999, "chi-square = {chi2}");
    }

    #[test]
    fn large_gamma_is_far_from_uniform() {
        let grid = Grid::square(100).unwrap();
        let mut rng = SimRng::new(7);
        let layout = FoodLayout::Clustered { gamma: 50.0, total_food: 5000, anchor: Some(Cell::new(50, 50)) };
        let food = generate(&layout, grid, &mut rng).unwrap();
        let chi2 = block_chi_square(&food, 10);
        assert!(chi2 > 10.0 * CHI2_99DF_999, "chi-square = {chi2}");
    }

    #[test]
    fn spot_share_beyond_a_cell_is_rejected() {
        let grid = Grid::square(6).unwrap();
        let mut rng = SimRng::new(0);
        let layout = FoodLayout::MultiSpot { spots: SpotCount::One, total_food: 50_000_000_000 };
        let err = generate(&layout, grid, &mut rng).unwrap_err();
        assert_eq!(err.param(), Some("food.total_food"));
    }

    #[test]
    fn four_spots_on_24_grid() {
        let grid = Grid::square(24).unwrap();
        let mut rng = SimRng::new(0);
        let food = generate(&FoodLayout::MultiSpot { spots: SpotCount::Four, total_food: 400 }, grid, &mut rng)
            .unwrap();
        // Radius 24/12 = 2 → 13 cells per spot, 100/13 = 7 units each.
        assert_eq!(food.token_count(), 4 * 13);
        assert_eq!(food.total(), 4 * 13 * 7);
        for centre in SpotCount::Four.centres(&grid) {
            assert_eq!(food.quantity(centre), 7);
        }
        assert!(!food.has_food(Cell::new(12, 12)));
    }

    #[test]
    fn two_spots_lie_on_the_diagonal() {
        let grid = Grid::square(32).unwrap();
        let centres = SpotCount::Two.centres(&grid);
        assert_eq!(centres, vec![Cell::new(8, 8), Cell::new(24, 24)]);
        assert_eq!(SpotCount::Two.radius(&grid), 4);
        assert_eq!(SpotCount::One.centres(&grid), vec![Cell::new(16, 16)]);
    }
}

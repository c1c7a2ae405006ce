//! Grid foraging strategies, one per [`Variant`], dispatched through a table.
//!
//! # Shared cycle
//!
//! 1. **Sense**: is there food within `sensing_range` (Moore, centre
//!    included)?
//! 2. **Decide**: the variant's strategy builds a candidate set.
//! 3. **Move**: occupied cells are dropped and one of the rest is chosen
//!    uniformly.  Food never blocks a move.  No candidate means no move.
//!
//! # Candidate sets
//!
//! | Variant                  | Candidates                                                  |
//! |--------------------------|-------------------------------------------------------------|
//! | Solitary                 | radius 1 if food sensed, else radius 2                      |
//! | Social                   | as Solitary; with food sensed and a forager within the same radius, only cells shared with some neighbor's neighborhood |
//! | StrainSpecificSolitary   | border/leave logic (below)                                  |
//! | StrainSpecificSocial     | border/leave logic, then the targeted step narrows it       |
//!
//! Border/leave logic, for a forager standing on food: at a food border (a
//! Moore neighbor without food) a `leaving_probability` draw picks between
//! leaving (radius 2, cells without food) and staying (radius 1, cells with
//! food); away from a border it keeps to radius-1 food cells.  Off food the
//! search is the unconstrained radius 2.
//!
//! The strain-specific social targeted step runs only when food is sensed.
//! It looks for other foragers at radius 1, then radius 2, and keeps the
//! base cells shared with their neighborhoods at that radius.  It never
//! overrides a leave decision: if narrowing leaves nothing, the base set
//! stands.

use fg_agent::Variant;
use fg_core::{Cell, ForagerId, SimRng};
use fg_spatial::{Neighborhood, SpatialResult};

use crate::{BehaviorResult, GridBehavior, GridContext, Intent};

/// Radius of the search when food is close.
const NEAR_RADIUS: i32 = 1;
/// Radius of the search otherwise.
const FAR_RADIUS: i32 = 2;

/// What a strategy needs to know about the forager it is deciding for.
struct Step<'c, 'a> {
    ctx:     &'c GridContext<'a>,
    forager: ForagerId,
    here:    Cell,
    sensed:  bool,
}

type Strategy = fn(&Step<'_, '_>, &mut SimRng) -> SpatialResult<Vec<Cell>>;

/// Indexed by [`Variant::index`].
const STRATEGIES: [Strategy; 4] = [solitary, social, strain_solitary, strain_social];

/// The standard grid behavior: every forager follows its variant's strategy.
#[derive(Default)]
pub struct ForagingBehavior;

impl ForagingBehavior {
    /// Candidate cells for `forager` before occupancy filtering.
    pub fn candidates(
        &self,
        forager: ForagerId,
        ctx:     &GridContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Cell>> {
        let step = Self::sense(forager, ctx)?;
        let variant = ctx.foragers.profile_of(forager).variant;
        Ok(strategy_for(variant)(&step, rng)?)
    }

    fn sense<'c, 'a>(forager: ForagerId, ctx: &'c GridContext<'a>) -> BehaviorResult<Step<'c, 'a>> {
        ctx.foragers.check(forager)?;
        let here = ctx.foragers.position_of(forager);
        let profile = ctx.foragers.profile_of(forager);
        let sensed = profile.capabilities().senses_discrete_food
            && ctx.food.senses_food(here, Neighborhood::Moore, sensing_cells(profile.sensing.sensing_range))?;
        Ok(Step { ctx, forager, here, sensed })
    }
}

impl GridBehavior for ForagingBehavior {
    fn replan(
        &self,
        forager: ForagerId,
        ctx:     &GridContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        let step = Self::sense(forager, ctx)?;
        let variant = ctx.foragers.profile_of(forager).variant;
        let candidates: Vec<Cell> = strategy_for(variant)(&step, rng)?
            .into_iter()
            .filter(|&c| ctx.occupancy.is_free(c))
            .collect();

        let mut intents = vec![Intent::Sensed { food: step.sensed }];
        if let Some(&target) = rng.choose(&candidates) {
            intents.push(Intent::MoveTo(target));
        }
        Ok(intents)
    }
}

#[inline]
fn strategy_for(variant: Variant) -> Strategy {
    STRATEGIES[variant.index()]
}

/// `sensing_range` in whole cells.
#[inline]
fn sensing_cells(range: f64) -> i32 {
    range.floor().clamp(0.0, i32::MAX as f64) as i32
}

// ── Strategies ────────────────────────────────────────────────────────────────

fn solitary(step: &Step<'_, '_>, _rng: &mut SimRng) -> SpatialResult<Vec<Cell>> {
    step.ctx.grid.neighborhood(step.here, Neighborhood::Moore, false, move_radius(step.sensed))
}

fn social(step: &Step<'_, '_>, _rng: &mut SimRng) -> SpatialResult<Vec<Cell>> {
    let radius = move_radius(step.sensed);
    let base = step.ctx.grid.neighborhood(step.here, Neighborhood::Moore, false, radius)?;
    if !step.sensed {
        return Ok(base);
    }
    match shared_cells(step, &base, radius)? {
        Some(shared) => Ok(shared),
        None => Ok(base),
    }
}

fn strain_solitary(step: &Step<'_, '_>, rng: &mut SimRng) -> SpatialResult<Vec<Cell>> {
    border_leave_base(step, rng)
}

fn strain_social(step: &Step<'_, '_>, rng: &mut SimRng) -> SpatialResult<Vec<Cell>> {
    let base = border_leave_base(step, rng)?;
    if !step.sensed {
        return Ok(base);
    }
    for radius in [NEAR_RADIUS, FAR_RADIUS] {
        if let Some(shared) = shared_cells(step, &base, radius)? {
            if !shared.is_empty() {
                return Ok(shared);
            }
        }
    }
    Ok(base)
}

// ── Building blocks ───────────────────────────────────────────────────────────

#[inline]
fn move_radius(sensed: bool) -> i32 {
    if sensed { NEAR_RADIUS } else { FAR_RADIUS }
}

/// The cells of `base` that also lie in the radius-`radius` neighborhood of
/// some other forager within `radius`, in `base` order.
///
/// `None` when no other forager is that close.
fn shared_cells(step: &Step<'_, '_>, base: &[Cell], radius: i32) -> SpatialResult<Option<Vec<Cell>>> {
    let ctx = step.ctx;
    let neighbors = ctx.occupancy.within(ctx.grid, step.here, Neighborhood::Moore, radius, step.forager)?;
    if neighbors.is_empty() {
        return Ok(None);
    }
    let mut reachable = Vec::new();
    for (_, cell) in &neighbors {
        reachable.extend(ctx.grid.neighborhood(*cell, Neighborhood::Moore, false, radius)?);
    }
    Ok(Some(base.iter().copied().filter(|c| reachable.contains(c)).collect()))
}

fn border_leave_base(step: &Step<'_, '_>, rng: &mut SimRng) -> SpatialResult<Vec<Cell>> {
    let ctx = step.ctx;
    let food = ctx.food;
    if !food.has_food(step.here) {
        return ctx.grid.neighborhood(step.here, Neighborhood::Moore, false, FAR_RADIUS);
    }
    let leave = food.at_border(step.here)?
        && rng.gen_bool(ctx.foragers.profile_of(step.forager).sensing.leaving_probability);
    let (radius, want_food) = if leave { (FAR_RADIUS, false) } else { (NEAR_RADIUS, true) };
    Ok(ctx
        .grid
        .neighborhood(step.here, Neighborhood::Moore, false, radius)?
        .into_iter()
        .filter(|&c| food.has_food(c) == want_food)
        .collect())
}

//! Unit tests for fg-analysis.

use fg_core::Point;

use crate::{
    AnalysisError, ProximityMatrix, cluster_sizes, find_clusters, frame_step, largest_cluster,
    largest_cluster_series, mean_squared_displacement, unwrap_trajectories,
};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// ── Proximity ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use super::*;

    #[test]
    fn threshold_is_inclusive_and_symmetric() {
        let m = ProximityMatrix::from_positions(&pts(&[(0.0, 0.0), (20.0, 0.0), (41.0, 0.0)]), 20.0);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(1, 2), 0.0);
        assert_eq!(m.get(0, 2), 0.0);
        assert_eq!(m.get(2, 2), 1.0);
    }

    #[test]
    fn distance_ignores_the_seam() {
        let m = ProximityMatrix::from_positions(&pts(&[(1.0, 250.0), (499.0, 250.0)]), 20.0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn ragged_rows_error() {
        let err = ProximityMatrix::from_rows(&[vec![1.0, 0.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, AnalysisError::NotSquare { row: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn edges_round_trip_through_edge_list() {
        let m = ProximityMatrix::from_positions(&pts(&[(0.0, 0.0), (5.0, 0.0), (100.0, 0.0)]), 20.0);
        let edges: Vec<_> = m.edges().collect();
        assert_eq!(edges, vec![(0, 0, 1.0), (0, 1, 1.0), (1, 1, 1.0), (2, 2, 1.0)]);
        assert_eq!(ProximityMatrix::from_edges(3, edges).unwrap(), m);
    }

    #[test]
    fn edge_out_of_range_errors() {
        let err = ProximityMatrix::from_edges(2, [(0, 2, 1.0)]).unwrap_err();
        assert!(matches!(err, AnalysisError::EdgeOutOfRange { to: 2, n: 2, .. }));
    }
}

// ── Clusters ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clusters {
    use super::*;

    #[test]
    fn identity_is_all_singletons() {
        let sizes = cluster_sizes(&ProximityMatrix::identity(5), 1.0);
        assert_eq!(sizes, vec![1; 5]);
    }

    #[test]
    fn full_is_one_cluster() {
        let clusters = find_clusters(&ProximityMatrix::full(5), 1.0);
        assert_eq!(clusters, vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn clusters_partition_the_nodes() {
        // 0-1-2 chain, 3-4 pair, 5 alone.
        let m = ProximityMatrix::from_edges(6, [(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]).unwrap();
        let clusters = find_clusters(&m, 1.0);
        assert_eq!(clusters, vec![vec![0, 1, 2], vec![3, 4], vec![5]]);
        assert_eq!(clusters.iter().map(Vec::len).sum::<usize>(), 6);
        assert_eq!(largest_cluster(&m, 1.0), 3);
    }

    #[test]
    fn weights_below_interval_are_not_edges() {
        let m = ProximityMatrix::from_edges(3, [(0, 1, 0.5), (1, 2, 2.0)]).unwrap();
        assert_eq!(cluster_sizes(&m, 1.0), vec![1, 2]);
        assert_eq!(cluster_sizes(&m, 0.5), vec![3]);
    }

    #[test]
    fn empty_matrix_has_no_clusters() {
        assert!(find_clusters(&ProximityMatrix::empty(0), 1.0).is_empty());
        assert_eq!(largest_cluster(&ProximityMatrix::empty(0), 1.0), 0);
    }

    #[test]
    fn series_follows_step_order() {
        let steps = vec![ProximityMatrix::identity(4), ProximityMatrix::full(4), ProximityMatrix::identity(4)];
        assert_eq!(largest_cluster_series(&steps, 1.0), vec![1, 4, 1]);
    }
}

// ── Displacement ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod displacement {
    use super::*;

    #[test]
    fn straight_walk_across_the_seam() {
        // Moving +5 in x each step on a 100-wide torus, crossing at x = 100.
        let frames: Vec<Vec<Point>> = [90.0, 95.0, 0.0, 5.0, 10.0]
            .iter()
            .map(|&x| pts(&[(x, 50.0)]))
            .collect();
        let unwrapped = unwrap_trajectories(&frames, 5.0, 100.0).unwrap();
        let xs: Vec<f64> = unwrapped.iter().map(|f| f[0].x).collect();
        assert_eq!(xs, vec![90.0, 95.0, 100.0, 105.0, 110.0]);

        let msd = mean_squared_displacement(&frames, 5.0, 100.0).unwrap();
        assert_eq!(msd, vec![0.0, 25.0, 100.0, 225.0, 400.0]);
    }

    #[test]
    fn repeated_crossings_accumulate() {
        // Leftward, crossing x = 0 twice on a 10-wide torus.
        let frames: Vec<Vec<Point>> = [1.0, 7.0, 3.0, 9.0].iter().map(|&x| pts(&[(x, 0.0)])).collect();
        let unwrapped = unwrap_trajectories(&frames, 4.0, 10.0).unwrap();
        let xs: Vec<f64> = unwrapped.iter().map(|f| f[0].x).collect();
        assert_eq!(xs, vec![1.0, -3.0, -7.0, -11.0]);
    }

    #[test]
    fn averages_over_foragers() {
        let frames = vec![pts(&[(0.0, 0.0), (10.0, 10.0)]), pts(&[(3.0, 4.0), (10.0, 10.0)])];
        let msd = mean_squared_displacement(&frames, 5.0, 100.0).unwrap();
        assert_eq!(msd, vec![0.0, 12.5]);
    }

    #[test]
    fn ragged_frames_error() {
        let frames = vec![pts(&[(0.0, 0.0), (1.0, 1.0)]), pts(&[(0.0, 0.0)])];
        let err = unwrap_trajectories(&frames, 5.0, 100.0).unwrap_err();
        assert!(matches!(err, AnalysisError::RaggedFrames { step: 1, expected: 2, got: 1 }));
    }

    #[test]
    fn sparse_frames_match_every_tick_frames() {
        // Speed 3 per tick on a 40-wide torus, diagonal walk, 60 ticks.
        let every: Vec<Vec<Point>> = (0..=60)
            .map(|t| {
                let d = 3.0 * t as f64;
                pts(&[((5.0 + d).rem_euclid(40.0), (30.0 - d).rem_euclid(40.0)), (20.0, 20.0)])
            })
            .collect();
        let full = mean_squared_displacement(&every, frame_step(3.0, 1), 40.0).unwrap();

        let stride = 5;
        let sparse: Vec<Vec<Point>> = every.iter().step_by(stride).cloned().collect();
        let msd = mean_squared_displacement(&sparse, frame_step(3.0, stride as u64), 40.0).unwrap();
        let expected: Vec<f64> = full.iter().step_by(stride).copied().collect();
        assert_eq!(msd.len(), expected.len());
        for (a, b) in msd.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-9, "{a} vs {b}");
        }
        // Treating 5-tick gaps as single steps reads real moves as crossings.
        let wrong = mean_squared_displacement(&sparse, 3.0, 40.0).unwrap();
        assert!((wrong.last().unwrap() - expected.last().unwrap()).abs() > 1.0);
    }

    #[test]
    fn step_of_half_the_domain_is_ambiguous() {
        assert_eq!(frame_step(2.5, 0), 2.5);
        assert_eq!(frame_step(2.5, 4), 10.0);
        let err = unwrap_trajectories(&[], frame_step(5.0, 10), 100.0).unwrap_err();
        assert!(matches!(err, AnalysisError::AmbiguousSeam { .. }));
    }

    #[test]
    fn bad_scale_errors() {
        assert!(unwrap_trajectories(&[], 0.0, 100.0).is_err());
        assert!(mean_squared_displacement(&[], 5.0, f64::NAN).is_err());
        assert!(mean_squared_displacement(&[], 5.0, 100.0).unwrap().is_empty());
    }
}

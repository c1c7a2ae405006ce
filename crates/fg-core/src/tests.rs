//! Unit tests for fg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ForagerId, SignalId};

    #[test]
    fn index_roundtrip() {
        let id = ForagerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(ForagerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_is_monotonic() {
        assert_eq!(SignalId(0).next(), SignalId(1));
        assert!(SignalId(7) < SignalId(7).next());
    }

    #[test]
    fn display() {
        assert_eq!(ForagerId(7).to_string(), "ForagerId(7)");
        assert_eq!(SignalId(3).to_string(), "SignalId(3)");
    }
}

#[cfg(test)]
mod geo {
    use std::f64::consts::FRAC_PI_2;

    use crate::{Cell, Point};

    #[test]
    fn advanced_moves_along_heading() {
        let p = Point::new(1.0, 1.0).advanced(FRAC_PI_2, 5.0);
        assert!((p.x - 1.0).abs() < 1e-12);
        assert!((p.y - 6.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_ignores_wraparound() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.euclidean(b), 5.0);
    }

    #[test]
    fn cell_offset_and_point() {
        let c = Cell::new(2, 3).offset(-1, 4);
        assert_eq!(c, Cell::new(1, 7));
        assert_eq!(c.to_point(), Point::new(1.0, 7.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(10)), 0);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(10);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 20);
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn hours_for_ticks() {
        let clock = SimClock::new(10);
        assert_eq!(clock.hours_for_ticks(360), 1.0);
    }

    #[test]
    fn snapshot_interval() {
        let cfg = SimConfig { output_interval_ticks: 4, ..SimConfig::default() };
        assert!(cfg.is_snapshot_tick(Tick(0)));
        assert!(!cfg.is_snapshot_tick(Tick(3)));
        assert!(cfg.is_snapshot_tick(Tick(8)));

        let never = SimConfig { output_interval_ticks: 0, ..SimConfig::default() };
        assert!(!never.is_snapshot_tick(Tick(0)));
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let cfg = SimConfig { tick_duration_secs: 0, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.param(), Some("tick_duration_secs"));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge_from_each_other() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }

    #[test]
    fn unit_open_zero_never_zero() {
        let mut rng = SimRng::new(0);
        for _ in 0..10_000 {
            let u = rng.unit_open_zero();
            assert!(u > 0.0 && u <= 1.0, "got {u}");
        }
    }

    #[test]
    fn heading_in_range() {
        let mut rng = SimRng::new(9);
        for _ in 0..1_000 {
            let h = rng.heading();
            assert!((-std::f64::consts::PI..std::f64::consts::PI).contains(&h));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sample_is_distinct_and_bounded() {
        let mut rng = SimRng::new(5);
        let items: Vec<u32> = (0..20).collect();
        let mut picked = rng.sample(&items, 8);
        assert_eq!(picked.len(), 8);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 8);
        assert_eq!(rng.sample(&items, 50).len(), 20);
    }
}

#[cfg(test)]
mod error {
    use crate::error::{ensure_non_negative, ensure_probability};
    use crate::FgError;

    #[test]
    fn config_error_names_param() {
        let err = FgError::config("align_w", "too large");
        assert_eq!(err.param(), Some("align_w"));
        assert!(err.to_string().contains("align_w"));
    }

    #[test]
    fn non_negative_guard() {
        assert!(ensure_non_negative("sensing_range", 0.0).is_ok());
        assert!(ensure_non_negative("sensing_range", -1.0).is_err());
        assert!(ensure_non_negative("sensing_range", f64::NAN).is_err());
    }

    #[test]
    fn probability_guard() {
        assert!(ensure_probability("leaving_probability", 1.0).is_ok());
        assert!(ensure_probability("leaving_probability", 1.5).is_err());
    }
}

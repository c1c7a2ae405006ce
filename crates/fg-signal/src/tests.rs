//! Unit tests for fg-signal.

use fg_core::Point;
use fg_spatial::Torus;

use crate::{Polarity, SignalField, SignalParams};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn field(size: f64) -> SignalField {
    SignalField::new(Torus::new(size).unwrap())
}

// ── Diffusion math ────────────────────────────────────────────────────────────

#[cfg(test)]
mod math {
    use crate::{active_radius_sq, concentration};

    use super::*;

    #[test]
    fn radius_is_where_concentration_hits_threshold() {
        let p = SignalParams::default();
        for t in [1, 10, 50, 120] {
            let r2 = active_radius_sq(&p, t).expect("alive");
            let c = concentration(&p, r2, t);
            assert!((c - p.threshold).abs() < 1e-9, "t={t} c={c}");
            assert!(concentration(&p, r2 * 0.9, t) > p.threshold);
        }
    }

    #[test]
    fn degenerate_inputs_are_below_threshold() {
        let zero_d = SignalParams { diffusion: 0.0, ..SignalParams::default() };
        assert!(active_radius_sq(&zero_d, 5).is_none());
        assert_eq!(concentration(&zero_d, 0.0, 5), f64::NEG_INFINITY);
        assert!(active_radius_sq(&SignalParams::default(), 0).is_none());

        // Q so small the log argument exceeds one at birth.
        let faint = SignalParams { emission: 1e-6, ..SignalParams::default() };
        assert!(active_radius_sq(&faint, 1).is_none());
    }

    #[test]
    fn validation_names_the_parameter() {
        let bad = SignalParams { decay: -1.0, ..SignalParams::default() };
        assert_eq!(bad.validate().unwrap_err().param(), Some("signal.decay"));
        let bad = SignalParams { emission: 0.0, ..SignalParams::default() };
        assert_eq!(bad.validate().unwrap_err().param(), Some("signal.emission"));
        assert!(SignalParams::default().validate().is_ok());
    }
}

// ── Source lifecycle ──────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn fresh_source_is_visible_at_its_position() {
        let mut f = field(100.0);
        let id = f.emit(Point::new(10.0, 10.0), Polarity::Attractive, SignalParams::default()).unwrap();
        let s = f.get(id).unwrap();
        assert_eq!(s.age, 1);
        assert!(s.active_radius() > 0.0);
        let seen = f.sample(Point::new(10.0, 10.0));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].id, id);
        assert_eq!(seen[0].r2, 0.0);
    }

    #[test]
    fn peak_never_increases_and_source_eventually_dies() {
        let mut f = field(100.0);
        let id = f.emit(Point::new(50.0, 50.0), Polarity::Repulsive, SignalParams::default()).unwrap();
        let mut last_peak = f.get(id).unwrap().peak();
        let mut ticks = 0;
        while f.step_source(id) {
            let peak = f.get(id).unwrap().peak();
            assert!(peak <= last_peak);
            last_peak = peak;
            ticks += 1;
            assert!(ticks < 10_000, "source never removed");
        }
        assert!(f.get(id).is_none());
        assert!(f.is_empty());
        assert!(!f.step_source(id));
    }

    #[test]
    fn emit_below_threshold_stores_nothing() {
        let mut f = field(100.0);
        let faint = SignalParams { emission: 1e-6, ..SignalParams::default() };
        assert!(f.emit(Point::new(1.0, 1.0), Polarity::Attractive, faint).is_none());
        assert!(f.is_empty());
    }

    #[test]
    fn step_all_counts_removals() {
        let mut f = field(100.0);
        let short = SignalParams { decay: 5.0, ..SignalParams::default() };
        f.emit(Point::new(1.0, 1.0), Polarity::Attractive, short).unwrap();
        f.emit(Point::new(2.0, 2.0), Polarity::Attractive, SignalParams::default()).unwrap();
        let mut removed = 0;
        for _ in 0..10 {
            removed += f.step_all();
        }
        assert_eq!(removed, 1);
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn emit_wraps_position() {
        let mut f = field(10.0);
        let id = f.emit(Point::new(12.0, -1.0), Polarity::Attractive, SignalParams::default()).unwrap();
        assert_eq!(f.get(id).unwrap().position, Point::new(2.0, 9.0));
    }
}

// ── Sampling and centroid ─────────────────────────────────────────────────────

#[cfg(test)]
mod sampling {
    use super::*;

    #[test]
    fn sample_respects_active_radius_and_range() {
        let mut f = field(500.0);
        let id = f.emit(Point::new(100.0, 100.0), Polarity::Attractive, SignalParams::default()).unwrap();
        let r = f.get(id).unwrap().active_radius();
        assert_eq!(f.sample(Point::new(100.0 + r * 0.5, 100.0)).len(), 1);
        assert!(f.sample(Point::new(100.0 + r * 1.5, 100.0)).is_empty());
        assert!(f.sample_within(Point::new(100.0 + r * 0.5, 100.0), r * 0.25).is_empty());
    }

    #[test]
    fn centroid_unwinds_across_the_seam() {
        let mut f = field(100.0);
        f.emit(Point::new(99.0, 50.0), Polarity::Attractive, SignalParams::default()).unwrap();
        f.emit(Point::new(1.0, 50.0), Polarity::Attractive, SignalParams::default()).unwrap();
        let c = f.centroid_at(Point::new(0.0, 50.0), Polarity::Attractive).unwrap();
        // Equal weights either side of x = 0; a naive average would give 50.
        assert!(c.x.abs() < 1e-9, "centroid x = {}", c.x);
        assert!((c.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_filters_polarity() {
        let mut f = field(100.0);
        f.emit(Point::new(10.0, 10.0), Polarity::Repulsive, SignalParams::default()).unwrap();
        assert!(f.centroid_at(Point::new(10.0, 10.0), Polarity::Attractive).is_none());
        let c = f.centroid_at(Point::new(11.0, 10.0), Polarity::Repulsive).unwrap();
        assert!((c.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn centroid_is_weighted_toward_stronger_source() {
        let mut f = field(200.0);
        f.emit(Point::new(50.0, 50.0), Polarity::Attractive, SignalParams::default()).unwrap();
        let strong = SignalParams { emission: 400.0, ..SignalParams::default() };
        f.emit(Point::new(54.0, 50.0), Polarity::Attractive, strong).unwrap();
        let c = f.centroid_at(Point::new(52.0, 50.0), Polarity::Attractive).unwrap();
        assert!(c.x > 52.0);
    }
}

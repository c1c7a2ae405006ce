//! Unit tests for fg-agent.

#[cfg(test)]
mod profile {
    use crate::{ForagerProfile, Sensing, Variant, Weights};

    #[test]
    fn variant_from_flags() {
        assert_eq!(Variant::from_flags(false, false), Variant::Solitary);
        assert_eq!(Variant::from_flags(true, false), Variant::Social);
        assert_eq!(Variant::from_flags(false, true), Variant::StrainSpecificSolitary);
        assert_eq!(Variant::from_flags(true, true), Variant::StrainSpecificSocial);
    }

    #[test]
    fn variant_indices_match_table_order() {
        for (i, v) in Variant::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn capabilities_per_variant() {
        let c = Variant::Solitary.capabilities();
        assert!(c.senses_discrete_food && !c.uses_targeted_step && !c.uses_border_leave_logic);
        let c = Variant::StrainSpecificSocial.capabilities();
        assert!(c.uses_targeted_step && c.uses_border_leave_logic);
        let c = Variant::StrainSpecificSolitary.capabilities();
        assert!(!c.uses_targeted_step && c.uses_border_leave_logic);
    }

    #[test]
    fn weights_summing_to_one_are_accepted() {
        let w = Weights { align: 0.1, attract: 0.2, repel: 0.7 };
        assert!(w.validate().is_ok());
        assert!(Weights::default().validate().is_ok());
    }

    #[test]
    fn weight_sum_above_one_is_rejected() {
        let w = Weights { align: 0.5, attract: 0.4, repel: 0.4 };
        let err = w.validate().unwrap_err();
        assert_eq!(err.param(), Some("weights"));
        assert!(err.to_string().contains("weights"));
    }

    #[test]
    fn negative_weight_and_radius_rejected() {
        let w = Weights { align: -0.1, attract: 0.0, repel: 0.0 };
        assert_eq!(w.validate().unwrap_err().param(), Some("weights.align"));
        let s = Sensing { sensing_range: -1.0, ..Sensing::default() };
        assert_eq!(s.validate().unwrap_err().param(), Some("sensing_range"));
        let s = Sensing { leaving_probability: 1.5, ..Sensing::default() };
        assert_eq!(s.validate().unwrap_err().param(), Some("leaving_probability"));
    }

    #[test]
    fn profile_new_validates() {
        let bad = Weights { align: 1.0, attract: 1.0, repel: 0.0 };
        assert!(ForagerProfile::new(Variant::Social, bad, Sensing::default()).is_err());
        let ok = ForagerProfile::new(Variant::Social, Weights::default(), Sensing::default()).unwrap();
        assert!(ok.capabilities().uses_targeted_step);
    }
}

#[cfg(test)]
mod stats {
    use crate::ForagingStats;

    #[test]
    fn sense_frequency() {
        let mut s = ForagingStats::default();
        assert_eq!(s.sense_frequency(), 0.0);
        s.record_step(true, 1);
        s.record_step(false, 0);
        s.record_step(true, 2);
        s.record_step(false, 0);
        assert_eq!(s.steps, 4);
        assert_eq!(s.consumed, 3);
        assert!((s.sense_frequency() - 0.5).abs() < 1e-12);
    }
}

#[cfg(test)]
mod store {
    use fg_core::{FgError, ForagerId, Point};

    use crate::{ForagerProfile, ForagerStoreBuilder, Variant, Weights};

    #[test]
    fn builder_allocates_all_arrays() {
        let store = ForagerStoreBuilder::new(ForagerProfile::default())
            .with_capacity(3)
            .forager(Point::new(1.0, 1.0), 0.0)
            .forager(Point::new(2.0, 2.0), 0.5)
            .forager(Point::new(3.0, 3.0), -0.5)
            .build()
            .unwrap();
        assert_eq!(store.count, 3);
        assert_eq!(store.heading.len(), 3);
        assert_eq!(store.velocity, vec![(0.0, 0.0); 3]);
        assert_eq!(store.stats.len(), 3);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![ForagerId(0), ForagerId(1), ForagerId(2)]);
        assert_eq!(store.position_of(ForagerId(2)), Point::new(3.0, 3.0));
    }

    #[test]
    fn builder_rejects_invalid_override() {
        let bad = ForagerProfile {
            weights: Weights { align: 0.9, attract: 0.9, repel: 0.0 },
            ..ForagerProfile::default()
        };
        let result = ForagerStoreBuilder::new(ForagerProfile::default())
            .forager(Point::new(0.0, 0.0), 0.0)
            .forager_with(Point::new(1.0, 0.0), 0.0, bad)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn per_forager_profiles() {
        let social = ForagerProfile { variant: Variant::Social, ..ForagerProfile::default() };
        let store = ForagerStoreBuilder::new(ForagerProfile::default())
            .forager(Point::new(0.0, 0.0), 0.0)
            .forager_with(Point::new(1.0, 0.0), 0.0, social)
            .build()
            .unwrap();
        assert_eq!(store.profile_of(ForagerId(0)).variant, Variant::Solitary);
        assert_eq!(store.profile_of(ForagerId(1)).variant, Variant::Social);
    }

    #[test]
    fn check_reports_missing_forager() {
        let store = ForagerStoreBuilder::<Point>::new(ForagerProfile::default()).build().unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.check(ForagerId(0)), Err(FgError::ForagerNotFound(ForagerId(0)))));
    }

    #[test]
    fn total_stats_sums_population() {
        let mut store = ForagerStoreBuilder::new(ForagerProfile::default())
            .forager(Point::new(0.0, 0.0), 0.0)
            .forager(Point::new(1.0, 0.0), 0.0)
            .build()
            .unwrap();
        store.stats[0].record_step(true, 2);
        store.stats[1].record_step(false, 1);
        let total = store.total_stats();
        assert_eq!((total.steps, total.sensed, total.consumed), (2, 1, 3));
    }
}

//! Fluent builder for `ForagerStore<P>`.
//!
//! # Usage
//!
//! ```rust
//! use fg_agent::{ForagerProfile, ForagerStoreBuilder};
//! use fg_core::Cell;
//!
//! let store = ForagerStoreBuilder::new(ForagerProfile::default())
//!     .forager(Cell::new(0, 0), 0.0)
//!     .forager(Cell::new(3, 4), 1.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(store.position[1], Cell::new(3, 4));
//! ```

use fg_core::FgResult;

use crate::{ForagerProfile, ForagerStore, ForagingStats};

/// Collects initial positions and profiles, validates every distinct profile
/// once, and allocates the SoA arrays.
pub struct ForagerStoreBuilder<P> {
    default_profile: ForagerProfile,
    position:        Vec<P>,
    heading:         Vec<f64>,
    profile:         Vec<ForagerProfile>,
}

impl<P: Copy> ForagerStoreBuilder<P> {
    /// Start a builder whose foragers use `profile` unless told otherwise.
    pub fn new(profile: ForagerProfile) -> Self {
        Self {
            default_profile: profile,
            position:        Vec::new(),
            heading:         Vec::new(),
            profile:         Vec::new(),
        }
    }

    /// Pre-allocate for `n` foragers.
    pub fn with_capacity(mut self, n: usize) -> Self {
        self.position.reserve(n);
        self.heading.reserve(n);
        self.profile.reserve(n);
        self
    }

    /// Add a forager with the default profile.
    pub fn forager(self, position: P, heading: f64) -> Self {
        let profile = self.default_profile;
        self.forager_with(position, heading, profile)
    }

    /// Add a forager with its own profile.
    pub fn forager_with(mut self, position: P, heading: f64, profile: ForagerProfile) -> Self {
        self.position.push(position);
        self.heading.push(heading);
        self.profile.push(profile);
        self
    }

    /// Validate profiles and construct the store.
    ///
    /// Velocity starts at zero and statistics at their defaults.
    pub fn build(self) -> FgResult<ForagerStore<P>> {
        self.default_profile.validate()?;
        let mut checked: Vec<ForagerProfile> = vec![self.default_profile];
        for p in &self.profile {
            if !checked.contains(p) {
                p.validate()?;
                checked.push(*p);
            }
        }

        let count = self.position.len();
        Ok(ForagerStore {
            count,
            position: self.position,
            heading:  self.heading,
            velocity: vec![(0.0, 0.0); count],
            profile:  self.profile,
            stats:    vec![ForagingStats::default(); count],
        })
    }
}

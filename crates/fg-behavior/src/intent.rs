//! Forager intents: the actions a forager requests during one activation.

use fg_core::{Cell, Point};
use fg_signal::Polarity;

/// An action a forager wants applied this activation.
///
/// Produced by [`GridBehavior::replan`][crate::GridBehavior::replan] or
/// [`SwarmBehavior::replan`][crate::SwarmBehavior::replan] and applied in
/// order by the owning simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// What the forager perceived; feeds its `ForagingStats`.
    Sensed { food: bool },

    /// Step to an (unoccupied) grid cell.
    MoveTo(Cell),

    /// Take a continuous position and heading.
    ///
    /// The simulation wraps `position` into the domain.
    Relocate {
        position: Point,
        heading:  f64,
    },

    /// Deposit a signal source at `position`.
    ///
    /// The new source is stepped from the next tick on.
    Emit {
        position: Point,
        polarity: Polarity,
    },
}

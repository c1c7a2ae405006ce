use std::fmt;

use fg_core::{ForagerId, SignalId};

/// Anything that takes a turn in the activation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Forager(ForagerId),
    Signal(SignalId),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Forager(id) => write!(f, "{id}"),
            Entity::Signal(id)  => write!(f, "{id}"),
        }
    }
}

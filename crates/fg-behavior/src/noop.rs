//! A no-op behavior: foragers never act.

use fg_core::{ForagerId, SimRng};

use crate::{BehaviorResult, GridBehavior, GridContext, Intent, SwarmBehavior, SwarmContext};

/// Always returns an empty intent list, in either space.
///
/// Useful as a placeholder in tests and for frozen populations that only
/// occupy space.
pub struct NoopBehavior;

impl GridBehavior for NoopBehavior {
    fn replan(
        &self,
        _forager: ForagerId,
        _ctx:     &GridContext<'_>,
        _rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        Ok(vec![])
    }
}

impl SwarmBehavior for NoopBehavior {
    fn replan(
        &self,
        _forager: ForagerId,
        _ctx:     &SwarmContext<'_>,
        _rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        Ok(vec![])
    }
}

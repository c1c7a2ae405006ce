//! The behavior traits: the extension points for forager decision making.

use fg_core::{ForagerId, SimRng};

use crate::{BehaviorResult, GridContext, Intent, SwarmContext};

/// Pluggable decision making for foragers on the discrete grid.
///
/// The simulation calls [`replan`](Self::replan) once per forager per tick,
/// after the forager has fed on its own cell.  An empty `Vec` means the
/// forager stays put.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEast;
///
/// impl GridBehavior for AlwaysEast {
///     fn replan(&self, f: ForagerId, ctx: &GridContext<'_>, _: &mut SimRng) -> BehaviorResult<Vec<Intent>> {
///         let here = ctx.foragers.position_of(f);
///         Ok(vec![Intent::MoveTo(ctx.grid.wrap(here.offset(1, 0)))])
///     }
/// }
/// ```
pub trait GridBehavior: Send + Sync + 'static {
    fn replan(
        &self,
        forager: ForagerId,
        ctx:     &GridContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>>;
}

/// Pluggable decision making for foragers in the continuous domain.
pub trait SwarmBehavior: Send + Sync + 'static {
    fn replan(
        &self,
        forager: ForagerId,
        ctx:     &SwarmContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>>;
}

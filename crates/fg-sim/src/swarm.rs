//! `SwarmSim`: foragers and their signal trail in a continuous torus.

use fg_agent::{ForagerStore, ForagingStats};
use fg_behavior::{Intent, SwarmBehavior, SwarmContext, SwarmParams};
use fg_core::{ForagerId, Point, SignalId, SimClock, SimConfig, SimRng, Tick};
use fg_schedule::{ActivationSchedule, Entity};
use fg_signal::{Polarity, SignalField};
use fg_spatial::Torus;
use tracing::{debug, warn};

use crate::{AgentSnapshot, SimResult, Simulation, TickSummary};

/// Outcome of one forager activation.
#[derive(Default)]
struct Turn {
    moved:   bool,
    emitted: bool,
}

/// The continuous-domain simulation.
///
/// Foragers and signal sources share one activation schedule: a forager's
/// turn is sense, emit, decide, move; a signal's turn is to age by one tick
/// and drop out once below threshold.
///
/// Create via [`SwarmSimBuilder`][crate::SwarmSimBuilder].
pub struct SwarmSim<B: SwarmBehavior> {
    pub config:   SimConfig,
    pub clock:    SimClock,
    pub torus:    Torus,
    pub signals:  SignalField,
    pub foragers: ForagerStore<Point>,
    pub params:   SwarmParams,
    pub behavior: B,

    pub(crate) rng:      SimRng,
    pub(crate) schedule: ActivationSchedule<Entity>,
}

impl<B: SwarmBehavior> SwarmSim<B> {
    /// Place `forager` at `position` (wrapped) facing `heading`.
    ///
    /// Velocity becomes the shortest displacement from the old position.
    pub fn relocate_forager(&mut self, forager: ForagerId, position: Point, heading: f64) -> SimResult<()> {
        self.foragers.check(forager)?;
        let i = forager.index();
        let from = self.foragers.position[i];
        let to = self.torus.wrap(position);
        self.foragers.velocity[i] = self.torus.delta(from, to);
        self.foragers.position[i] = to;
        self.foragers.heading[i] = heading;
        Ok(())
    }

    /// Deposit a signal and register it for activation from the next tick.
    pub fn emit_signal(&mut self, position: Point, polarity: Polarity) -> Option<SignalId> {
        let id = self.signals.emit(position, polarity, self.params.signal)?;
        self.schedule.add(Entity::Signal(id));
        Some(id)
    }

    fn activate_forager(&mut self, forager: ForagerId, now: Tick) -> SimResult<Turn> {
        let intents = {
            let ctx = SwarmContext::new(now, &self.torus, &self.signals, &self.foragers, &self.params);
            self.behavior.replan(forager, &ctx, &mut self.rng)?
        };

        let mut turn = Turn::default();
        let mut sensed = false;
        for intent in intents {
            match intent {
                Intent::Sensed { food } => sensed = food,
                Intent::Emit { position, polarity } => {
                    turn.emitted |= self.emit_signal(position, polarity).is_some();
                }
                Intent::Relocate { position, heading } => {
                    self.relocate_forager(forager, position, heading)?;
                    turn.moved = true;
                }
                other @ Intent::MoveTo(_) => {
                    warn!(%forager, ?other, "grid intent in the continuous domain; ignored");
                }
            }
        }
        self.foragers.stats[forager.index()].record_step(sensed, 0);
        Ok(turn)
    }

    /// Age a signal; returns `true` if it was removed.
    fn activate_signal(&mut self, id: SignalId) -> bool {
        if self.signals.step_source(id) {
            return false;
        }
        self.schedule.remove(Entity::Signal(id));
        true
    }
}

impl<B: SwarmBehavior> Simulation for SwarmSim<B> {
    fn step(&mut self) -> SimResult<TickSummary> {
        let now = self.clock.current_tick;
        let order = self.schedule.snapshot(&mut self.rng);

        let mut summary = TickSummary { tick: now, ..TickSummary::default() };
        for entity in order {
            if !self.schedule.contains(entity) {
                continue;
            }
            summary.activated += 1;
            match entity {
                Entity::Forager(f) => {
                    let turn = self.activate_forager(f, now)?;
                    summary.moved += usize::from(turn.moved);
                    summary.emitted += usize::from(turn.emitted);
                }
                Entity::Signal(s) => {
                    summary.removed += usize::from(self.activate_signal(s));
                }
            }
        }
        summary.signals_live = self.signals.len();

        debug!(
            tick = %now,
            signals = summary.signals_live,
            emitted = summary.emitted,
            removed = summary.removed,
            "swarm tick",
        );
        self.clock.advance();
        Ok(summary)
    }

    fn snapshot(&self) -> Vec<AgentSnapshot> {
        let n = self.foragers.count as u32;
        let foragers = self.foragers.ids().map(|f| {
            let i = f.index();
            let p = self.foragers.position[i];
            let (vx, vy) = self.foragers.velocity[i];
            let profile = &self.foragers.profile[i];
            AgentSnapshot {
                id:              f.0,
                x:               p.x,
                y:               p.y,
                vx,
                vy,
                is_worm:         true,
                social:          profile.variant.is_social(),
                strain_specific: profile.variant.is_strain_specific(),
                attractive:      false,
                range:           profile.sensing.sensing_range,
            }
        });
        let signals = self.signals.iter().map(|s| AgentSnapshot {
            id:              n + s.id.0,
            x:               s.position.x,
            y:               s.position.y,
            vx:              0.0,
            vy:              0.0,
            is_worm:         false,
            social:          false,
            strain_specific: false,
            attractive:      s.polarity.is_attractive(),
            range:           s.active_radius(),
        });
        foragers.chain(signals).collect()
    }

    fn total_food(&self) -> u64 {
        0
    }

    fn initial_food(&self) -> u64 {
        0
    }

    fn forager_count(&self) -> usize {
        self.foragers.count
    }

    fn foraging_stats(&self) -> ForagingStats {
        self.foragers.total_stats()
    }

    fn clock(&self) -> &SimClock {
        &self.clock
    }

    fn config(&self) -> &SimConfig {
        &self.config
    }
}

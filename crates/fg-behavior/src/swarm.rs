//! The blended-heading law for continuous-domain foragers.
//!
//! Each activation a forager may deposit a signal, then picks a heading as a
//! weighted sum of up to four angles:
//!
//! | Influence  | Active when                                   | Angle                                  |
//! |------------|-----------------------------------------------|----------------------------------------|
//! | alignment  | another forager within `align_dist`           | circular mean of their headings        |
//! | attraction | attractive signals perceived                  | toward their weighted centroid         |
//! | repulsion  | repulsive signals perceived                   | away from their weighted centroid      |
//! | random     | always                                        | uniform in `[-π, π)`                   |
//!
//! Active influences contribute their weight; the random heading receives
//! `1 − Σ active weights`.  The forager then advances `speed` along the
//! resulting heading.

use std::f64::consts::{PI, TAU};

use fg_core::{ForagerId, Point, SimRng};
use fg_signal::{Polarity, SignalField};

use crate::{BehaviorResult, Intent, SwarmBehavior, SwarmContext};

/// The standard continuous behavior.
#[derive(Default)]
pub struct BlendedHeading;

impl BlendedHeading {
    /// Heading chosen for `forager` given a pre-drawn random heading.
    pub fn heading(&self, forager: ForagerId, ctx: &SwarmContext<'_>, random: f64) -> BehaviorResult<Headings> {
        ctx.foragers.check(forager)?;
        let here = ctx.foragers.position_of(forager);
        let profile = ctx.foragers.profile_of(forager);
        let w = profile.weights;

        let neighbors = ctx.torus.neighbors_within(
            here,
            profile.sensing.align_dist,
            ctx.foragers.positions(),
            |&id| id != forager,
        )?;
        let align = circular_mean(neighbors.iter().map(|id| ctx.foragers.heading[id.index()]));

        let samples = ctx.signals.sample_within(here, profile.sensing.sensing_range);
        let attract = SignalField::weighted_centroid(&samples, Polarity::Attractive)
            .and_then(|c| direction(here, c));
        let repel = SignalField::weighted_centroid(&samples, Polarity::Repulsive)
            .and_then(|c| direction(c, here));

        let mut blended = 0.0;
        let mut used = 0.0;
        for (weight, angle) in [(w.align, align), (w.attract, attract), (w.repel, repel)] {
            if let Some(angle) = angle {
                blended += weight * angle;
                used += weight;
            }
        }
        blended += (1.0 - used).max(0.0) * random;

        Ok(Headings {
            heading:   wrap_angle(blended),
            perceived: !samples.is_empty(),
        })
    }
}

/// Outcome of the heading law.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Headings {
    pub heading:   f64,
    /// At least one signal was within range.
    pub perceived: bool,
}

impl SwarmBehavior for BlendedHeading {
    fn replan(
        &self,
        forager: ForagerId,
        ctx:     &SwarmContext<'_>,
        rng:     &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        ctx.foragers.check(forager)?;
        let here = ctx.foragers.position_of(forager);
        let params = ctx.params;
        let mut intents = Vec::with_capacity(3);

        if rng.gen_bool(params.emit_probability) {
            let polarity = if rng.gen_bool(params.attractive_bias) {
                Polarity::Attractive
            } else {
                Polarity::Repulsive
            };
            intents.push(Intent::Emit { position: here, polarity });
        }

        let random = rng.heading();
        let Headings { heading, perceived } = self.heading(forager, ctx, random)?;
        intents.push(Intent::Sensed { food: perceived });
        intents.push(Intent::Relocate {
            position: here.advanced(heading, params.speed),
            heading,
        });
        Ok(intents)
    }
}

/// Circular mean of a set of angles; `None` if empty or they cancel out.
pub fn circular_mean(angles: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (mut s, mut c) = (0.0_f64, 0.0_f64);
    for a in angles {
        s += a.sin();
        c += a.cos();
    }
    if s.hypot(c) < 1e-12 { None } else { Some(s.atan2(c)) }
}

/// Angle of the vector `from → to`; `None` if the points coincide.
fn direction(from: Point, to: Point) -> Option<f64> {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    if dx == 0.0 && dy == 0.0 { None } else { Some(dy.atan2(dx)) }
}

/// Map any angle into `[-π, π)`.
fn wrap_angle(a: f64) -> f64 {
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w >= PI { -PI } else { w }
}

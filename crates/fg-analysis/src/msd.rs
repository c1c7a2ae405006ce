//! Mean squared displacement on a torus.
//!
//! Stored positions wrap at the domain edge, so a forager crossing the seam
//! appears to jump almost a full domain width in one step.  Any per-axis
//! jump larger than the step length is taken as a crossing and undone by
//! shifting that forager's later positions a domain width the other way.
//! Offsets accumulate, so repeated crossings unwrap correctly.
//!
//! Frames recorded every `k` ticks can be `k` steps apart, so the threshold
//! is [`frame_step`] of the speed, and it must stay below half the domain.

use fg_core::Point;

use crate::{AnalysisError, AnalysisResult};

fn check_scale(param: &'static str, value: f64) -> AnalysisResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidScale { param, value })
    }
}

/// Longest per-axis move between frames recorded every `stride` ticks by
/// foragers moving `speed` per tick.
#[inline]
pub fn frame_step(speed: f64, stride: u64) -> f64 {
    speed * stride.max(1) as f64
}

/// Undo seam crossings in `frames` (one `Vec` of positions per step, same
/// forager order in every step).
///
/// `max_step` is the longest legitimate per-axis move between two frames;
/// `domain` is the torus side.  `max_step` must be under `domain / 2`.
pub fn unwrap_trajectories(frames: &[Vec<Point>], max_step: f64, domain: f64) -> AnalysisResult<Vec<Vec<Point>>> {
    check_scale("max_step", max_step)?;
    check_scale("domain", domain)?;
    if 2.0 * max_step >= domain {
        return Err(AnalysisError::AmbiguousSeam { max_step, domain });
    }
    let Some(first) = frames.first() else {
        return Ok(Vec::new());
    };
    let n = first.len();

    let mut offset = vec![(0.0_f64, 0.0_f64); n];
    let mut out: Vec<Vec<Point>> = Vec::with_capacity(frames.len());
    out.push(first.clone());

    for (step, pair) in frames.windows(2).enumerate() {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.len() != n {
            return Err(AnalysisError::RaggedFrames { step: step + 1, expected: n, got: curr.len() });
        }
        let mut row = Vec::with_capacity(n);
        for i in 0..n {
            let (dx, dy) = (curr[i].x - prev[i].x, curr[i].y - prev[i].y);
            offset[i].0 += seam_shift(dx, max_step, domain);
            offset[i].1 += seam_shift(dy, max_step, domain);
            row.push(Point::new(curr[i].x + offset[i].0, curr[i].y + offset[i].1));
        }
        out.push(row);
    }
    Ok(out)
}

#[inline]
fn seam_shift(delta: f64, max_step: f64, domain: f64) -> f64 {
    if delta > max_step {
        -domain
    } else if delta < -max_step {
        domain
    } else {
        0.0
    }
}

/// Mean over foragers of the squared distance from their step-0 position,
/// for every step.  Entry 0 is always 0.
pub fn mean_squared_displacement(frames: &[Vec<Point>], max_step: f64, domain: f64) -> AnalysisResult<Vec<f64>> {
    let unwrapped = unwrap_trajectories(frames, max_step, domain)?;
    let Some(origin) = unwrapped.first() else {
        return Ok(Vec::new());
    };
    if origin.is_empty() {
        return Ok(vec![0.0; unwrapped.len()]);
    }
    let n = origin.len() as f64;
    Ok(unwrapped
        .iter()
        .map(|frame| {
            frame
                .iter()
                .zip(origin)
                .map(|(p, o)| (p.x - o.x).powi(2) + (p.y - o.y).powi(2))
                .sum::<f64>()
                / n
        })
        .collect())
}

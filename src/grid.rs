//! Sample grids over x and t.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};

pub const DEFAULT_T_END: f64 = 1.5;
pub const DEFAULT_FRAMES: usize = 151;

/// `n` evenly spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(WaveError::InvalidGrid("need at least one sample".into()));
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(WaveError::InvalidGrid(format!(
            "range [{start}, {end}] is not finite"
        )));
    }
    if end < start {
        return Err(WaveError::InvalidGrid(format!(
            "range [{start}, {end}] is reversed"
        )));
    }
    if n == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    samples[n - 1] = end;
    Ok(samples)
}

/// Which instants to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeSchedule {
    /// `frames` evenly spaced instants over `[start, end]`.
    Sweep { start: f64, end: f64, frames: usize },
    /// An explicit list, drawn in the given order.
    Fixed { times: Vec<f64> },
}

impl Default for TimeSchedule {
    fn default() -> Self {
        Self::Sweep {
            start: 0.0,
            end: DEFAULT_T_END,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl TimeSchedule {
    pub fn times(&self) -> Result<Vec<f64>> {
        let times = match self {
            Self::Sweep { start, end, frames } => linspace(*start, *end, *frames)?,
            Self::Fixed { times } => times.clone(),
        };

        if times.is_empty() {
            return Err(WaveError::InvalidGrid("no time values".into()));
        }
        if let Some(t) = times.iter().find(|t| !(**t >= 0.0 && t.is_finite())) {
            return Err(WaveError::InvalidGrid(format!(
                "time {t} is negative or not finite"
            )));
        }
        Ok(times)
    }
}

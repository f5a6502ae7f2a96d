//! Elementwise evaluation of the solution over an x grid, one frame per t.

use serde::Serialize;

use crate::error::{Result, WaveError};
use crate::solution::SemiInfiniteString;

/// The sampled curves at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub t: f64,
    pub displacement: Vec<f64>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Every frame of a run on a shared x grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub speed: f64,
    pub x: Vec<f64>,
    pub frames: Vec<Frame>,
}

pub fn sample_frame(string: &SemiInfiniteString, xs: &[f64], t: f64) -> Result<Frame> {
    if xs.is_empty() {
        return Err(WaveError::InvalidGrid("no x samples".into()));
    }

    let mut displacement = Vec::with_capacity(xs.len());
    let mut left = Vec::with_capacity(xs.len());
    let mut right = Vec::with_capacity(xs.len());
    for &x in xs {
        let parts = string.components(x, t)?;
        displacement.push(parts.displacement);
        left.push(parts.left);
        right.push(parts.right);
    }

    Ok(Frame {
        t,
        displacement,
        left,
        right,
    })
}

pub fn sample_animation(
    string: &SemiInfiniteString,
    xs: &[f64],
    times: &[f64],
) -> Result<Animation> {
    if times.is_empty() {
        return Err(WaveError::InvalidGrid("no time values".into()));
    }

    let frames = times
        .iter()
        .map(|&t| sample_frame(string, xs, t))
        .collect::<Result<Vec<_>>>()?;

    Ok(Animation {
        speed: string.speed(),
        x: xs.to_vec(),
        frames,
    })
}

//! d'Alembert solution on the half line x >= 0 with a fixed end at x = 0.
//!
//! With zero initial displacement the solution is
//!
//! ```text
//! u(x, t) = ½ ∫_{x-ct}^{x+ct} g_odd(s) ds = G(x + ct) - G(|x - ct|)
//! ```
//!
//! where the fold |x - ct| is where the odd extension reflects the wave off
//! the boundary. It splits into a right-moving part G(x + ct) and a
//! reflected part -G(|x - ct|), drawn as dashed overlays in the plots.

use serde::Serialize;

use crate::error::{Result, WaveError};
use crate::profile::{check_position, check_speed, VelocityProfile};

/// A semi-infinite string with wave speed `c`, struck with a given profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SemiInfiniteString {
    speed: f64,
    profile: VelocityProfile,
}

/// The field and its two travelling constituents at one (x, t).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Components {
    pub displacement: f64,
    pub left: f64,
    pub right: f64,
}

impl SemiInfiniteString {
    pub fn new(speed: f64, profile: VelocityProfile) -> Result<Self> {
        check_speed(speed)?;
        Ok(Self { speed, profile })
    }

    /// The default bump struck on a string with speed `c`.
    pub fn standard(speed: f64) -> Result<Self> {
        Self::new(speed, VelocityProfile::default())
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn profile(&self) -> &VelocityProfile {
        &self.profile
    }

    /// u(x, t).
    pub fn displacement(&self, x: f64, t: f64) -> Result<f64> {
        evaluate_displacement(&self.profile, x, self.speed, t)
    }

    /// Right-moving component G(x + ct).
    pub fn right_wave(&self, x: f64, t: f64) -> Result<f64> {
        evaluate_right(&self.profile, x, self.speed, t)
    }

    /// Component reflected off the fixed end, -G(|x - ct|).
    pub fn left_wave(&self, x: f64, t: f64) -> Result<f64> {
        evaluate_left(&self.profile, x, self.speed, t)
    }

    pub fn components(&self, x: f64, t: f64) -> Result<Components> {
        Ok(Components {
            displacement: self.displacement(x, t)?,
            left: self.left_wave(x, t)?,
            right: self.right_wave(x, t)?,
        })
    }
}

/// G(x, c) for the default profile.
pub fn antiderivative(x: f64, c: f64) -> Result<f64> {
    VelocityProfile::standard().antiderivative(x, c)
}

/// u(x, t) for the default profile and wave speed `c`.
pub fn displacement(x: f64, c: f64, t: f64) -> Result<f64> {
    evaluate_displacement(VelocityProfile::standard(), x, c, t)
}

pub fn right_wave(x: f64, c: f64, t: f64) -> Result<f64> {
    evaluate_right(VelocityProfile::standard(), x, c, t)
}

pub fn left_wave(x: f64, c: f64, t: f64) -> Result<f64> {
    evaluate_left(VelocityProfile::standard(), x, c, t)
}

fn check_point(x: f64, c: f64, t: f64) -> Result<()> {
    check_position(x)?;
    check_speed(c)?;
    if t >= 0.0 && t.is_finite() {
        Ok(())
    } else {
        Err(WaveError::InvalidTime(t))
    }
}

fn evaluate_displacement(profile: &VelocityProfile, x: f64, c: f64, t: f64) -> Result<f64> {
    check_point(x, c, t)?;
    let tau = c * t;
    let forward = profile.antiderivative(x + tau, c)?;
    // x == ct belongs to the reflected branch.
    let backward = if x <= tau {
        profile.antiderivative(tau - x, c)?
    } else {
        profile.antiderivative(x - tau, c)?
    };
    Ok(forward - backward)
}

fn evaluate_right(profile: &VelocityProfile, x: f64, c: f64, t: f64) -> Result<f64> {
    check_point(x, c, t)?;
    profile.antiderivative(x + c * t, c)
}

fn evaluate_left(profile: &VelocityProfile, x: f64, c: f64, t: f64) -> Result<f64> {
    check_point(x, c, t)?;
    let tau = c * t;
    let folded = if x > tau {
        profile.antiderivative(x - tau, c)?
    } else {
        profile.antiderivative(tau - x, c)?
    };
    Ok(-folded)
}

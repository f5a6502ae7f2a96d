//! Piecewise-constant initial velocity g(x) and its antiderivative G(x, c).
//!
//! The string starts at rest, u(x, 0) = 0, and is struck with a velocity
//! u_t(x, 0) = g(x) that is constant on a handful of intervals and zero
//! everywhere else. The default profile is the unit-wide bump
//!
//! ```text
//! g(x) = 0   0 < x < 1
//!        2   1 < x < 2
//!        0   2 < x
//! ```
//!
//! G is the running integral of the odd extension of g, scaled by the
//! d'Alembert kernel 1/(2c). Integrating an odd function gives an even one,
//! so G only has to be defined for x >= 0; callers fold negative arguments
//! back with |x| before calling in.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};

/// One constant piece of the velocity profile: g = `value` on `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub start: f64,
    pub end: f64,
    pub value: f64,
}

impl Piece {
    pub fn new(start: f64, end: f64, value: f64) -> Self {
        Self { start, end, value }
    }

    fn contains(&self, x: f64) -> bool {
        self.start <= x && x < self.end
    }

    /// ∫ g over [0, x] restricted to this piece.
    fn integral_to(&self, x: f64) -> f64 {
        self.value * (x.clamp(self.start, self.end) - self.start)
    }

    fn impulse(&self) -> f64 {
        self.value * (self.end - self.start)
    }
}

/// Ordered, non-overlapping pieces on x >= 0. g is zero outside every piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct VelocityProfile {
    pieces: Vec<Piece>,
}

impl VelocityProfile {
    pub fn new(pieces: Vec<Piece>) -> Result<Self> {
        if pieces.is_empty() {
            return Err(WaveError::InvalidProfile("profile has no pieces".into()));
        }

        for (i, piece) in pieces.iter().enumerate() {
            let Piece { start, end, value } = *piece;
            if !(start.is_finite() && end.is_finite() && value.is_finite()) {
                return Err(WaveError::InvalidProfile(format!(
                    "piece {i} has a non-finite bound or value"
                )));
            }
            if start < 0.0 {
                return Err(WaveError::InvalidProfile(format!(
                    "piece {i} starts at {start}, left of the boundary"
                )));
            }
            if end <= start {
                return Err(WaveError::InvalidProfile(format!(
                    "piece {i} is empty: [{start}, {end})"
                )));
            }
        }

        for (i, pair) in pieces.windows(2).enumerate() {
            if pair[1].start < pair[0].end {
                return Err(WaveError::InvalidProfile(format!(
                    "pieces {} and {} overlap or are out of order",
                    i,
                    i + 1
                )));
            }
        }

        Ok(Self { pieces })
    }

    /// Shared instance of the default bump profile.
    pub fn standard() -> &'static VelocityProfile {
        static STANDARD: OnceLock<VelocityProfile> = OnceLock::new();
        STANDARD.get_or_init(VelocityProfile::default)
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Total impulse ∫₀^∞ g.
    pub fn total_impulse(&self) -> f64 {
        self.pieces.iter().map(Piece::impulse).sum()
    }

    /// g(x) for x >= 0.
    pub fn velocity(&self, x: f64) -> Result<f64> {
        check_position(x)?;
        Ok(self
            .pieces
            .iter()
            .find(|piece| piece.contains(x))
            .map_or(0.0, |piece| piece.value))
    }

    /// Odd extension of g to the whole line: g_odd(-x) = -g(x).
    pub fn odd_velocity(&self, x: f64) -> Result<f64> {
        if x.is_nan() {
            return Err(WaveError::InvalidPosition(x));
        }
        if x < 0.0 {
            Ok(-self.velocity(-x)?)
        } else if x == 0.0 {
            Ok(0.0)
        } else {
            self.velocity(x)
        }
    }

    /// G(x, c): antiderivative of the odd-extended profile, defined on x >= 0.
    ///
    /// The integration constant is chosen so the plateaus on either side of
    /// the support sit at ∓I/(4c), with I the total impulse. For the default
    /// profile that is -1/(2c) on [0, 1), the ramp (2(x - 1.5))/(2c) on
    /// [1, 2) and 1/(2c) from 2 on. G is continuous at every breakpoint.
    pub fn antiderivative(&self, x: f64, c: f64) -> Result<f64> {
        check_position(x)?;
        check_speed(c)?;
        let running: f64 = self.pieces.iter().map(|piece| piece.integral_to(x)).sum();
        Ok((running - 0.5 * self.total_impulse()) / (2.0 * c))
    }
}

impl Default for VelocityProfile {
    fn default() -> Self {
        Self {
            pieces: vec![Piece::new(1.0, 2.0, 2.0)],
        }
    }
}

impl TryFrom<Vec<Piece>> for VelocityProfile {
    type Error = WaveError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self> {
        Self::new(pieces)
    }
}

impl From<VelocityProfile> for Vec<Piece> {
    fn from(profile: VelocityProfile) -> Self {
        profile.pieces
    }
}

pub(crate) fn check_position(x: f64) -> Result<()> {
    // NaN fails the comparison too.
    if x >= 0.0 && x.is_finite() {
        Ok(())
    } else {
        Err(WaveError::InvalidPosition(x))
    }
}

pub(crate) fn check_speed(c: f64) -> Result<()> {
    if c > 0.0 && c.is_finite() {
        Ok(())
    } else {
        Err(WaveError::InvalidSpeed(c))
    }
}

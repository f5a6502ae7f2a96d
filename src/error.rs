//! Error types for evaluation, configuration and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaveError {
    /// The string only exists on 0 <= x < ∞.
    #[error("position must be finite and non-negative, got x = {0}")]
    InvalidPosition(f64),

    #[error("time must be finite and non-negative, got t = {0}")]
    InvalidTime(f64),

    /// Zero, negative or non-finite wave speed.
    #[error("wave speed must be positive and finite, got c = {0}")]
    InvalidSpeed(f64),

    #[error("invalid velocity profile: {0}")]
    InvalidProfile(String),

    #[error("invalid sample grid: {0}")]
    InvalidGrid(String),

    #[error("invalid plot axis: {0}")]
    InvalidAxis(String),

    #[error("plotting failed: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlRead(#[from] toml::de::Error),

    #[error(transparent)]
    TomlWrite(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, WaveError>;

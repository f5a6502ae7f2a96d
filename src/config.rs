//! Run configuration: wave speed and profile, sample grids, plot styling and
//! output targets. Loaded from TOML; every section is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WaveError};
use crate::grid::{linspace, TimeSchedule};
use crate::profile::{check_speed, VelocityProfile};
use crate::solution::SemiInfiniteString;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub wave: WaveConfig,
    pub grid: GridConfig,
    pub time: TimeSchedule,
    pub plot: PlotConfig,
    pub output: OutputConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WaveConfig {
    pub speed: f64,
    pub profile: VelocityProfile,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            profile: VelocityProfile::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub samples: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 6.0,
            samples: 1000,
        }
    }
}

impl GridConfig {
    pub fn positions(&self) -> Result<Vec<f64>> {
        if self.x_min < 0.0 {
            return Err(WaveError::InvalidGrid(format!(
                "x_min = {} lies left of the fixed end",
                self.x_min
            )));
        }
        linspace(self.x_min, self.x_max, self.samples)
    }

    /// Configured x range, used as the fixed horizontal axis of every plot.
    pub fn domain(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub y_min: f64,
    pub y_max: f64,
    /// Draw the left/right travelling components as dashed curves.
    pub overlays: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            y_min: -0.5,
            y_max: 0.75,
            overlays: true,
            width: 800,
            height: 600,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub html: PathBuf,
    pub html_enabled: bool,
    /// Directory for numbered per-frame PNG images.
    pub png_dir: Option<PathBuf>,
    /// Raw sampled frames as JSON.
    pub json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            html: PathBuf::from("semi_infinite_string.html"),
            html_enabled: true,
            png_dir: None,
            json: None,
        }
    }
}

impl Config {
    /// Parse a TOML file. Missing sections fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!("Config file {} not found. Using defaults.", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check every setting before anything is sampled or drawn.
    pub fn validate(&self) -> Result<()> {
        check_speed(self.wave.speed)?;
        if self.grid.samples < 2 {
            return Err(WaveError::InvalidGrid(format!(
                "need at least two x samples to draw a curve, got {}",
                self.grid.samples
            )));
        }
        self.grid.positions()?;
        self.time.times()?;

        let PlotConfig {
            y_min,
            y_max,
            width,
            height,
            ..
        } = self.plot;
        if !(y_min.is_finite() && y_max.is_finite() && y_min < y_max) {
            return Err(WaveError::InvalidAxis(format!(
                "y range [{y_min}, {y_max}] is empty or not finite"
            )));
        }
        if self.grid.x_max <= self.grid.x_min {
            return Err(WaveError::InvalidAxis(format!(
                "x range [{}, {}] is empty",
                self.grid.x_min, self.grid.x_max
            )));
        }
        if width == 0 || height == 0 {
            return Err(WaveError::InvalidAxis(format!(
                "image size {width}x{height} is empty"
            )));
        }
        Ok(())
    }

    pub fn string(&self) -> Result<SemiInfiniteString> {
        SemiInfiniteString::new(self.wave.speed, self.wave.profile.clone())
    }
}

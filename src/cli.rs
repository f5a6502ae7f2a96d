//! Command line interface

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::grid::{TimeSchedule, DEFAULT_FRAMES, DEFAULT_T_END};

/// Animate the d'Alembert solution on a semi-infinite string with a fixed end
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Wave speed c (overrides config file)
    #[arg(short = 'c', long, value_name = "C")]
    pub speed: Option<f64>,

    /// Right end of the plotted x range
    #[arg(long, value_name = "X")]
    pub x_max: Option<f64>,

    /// Number of x samples
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub samples: Option<usize>,

    /// End of the time sweep
    #[arg(long, value_name = "T")]
    pub t_end: Option<f64>,

    /// Number of frames in the time sweep
    #[arg(long, value_name = "COUNT")]
    pub frames: Option<usize>,

    /// Draw only these times instead of a sweep (comma separated)
    #[arg(long, value_name = "T1,T2,...", value_delimiter = ',')]
    pub times: Option<Vec<f64>>,

    /// Output HTML animation
    #[arg(long, value_name = "PATH", conflicts_with = "no_html")]
    pub html: Option<PathBuf>,

    /// Skip the HTML animation
    #[arg(long)]
    pub no_html: bool,

    /// Directory for numbered PNG frames
    #[arg(long, value_name = "DIR")]
    pub png_dir: Option<PathBuf>,

    /// Dump sampled frames as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Hide the dashed left/right component curves
    #[arg(long)]
    pub no_overlays: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Write the default configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    pub write_default_config: Option<PathBuf>,
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(speed) = args.speed {
        info!("Overriding wave speed to: {speed}");
        config.wave.speed = speed;
    }

    if let Some(x_max) = args.x_max {
        info!("Overriding x range to: [{}, {x_max}]", config.grid.x_min);
        config.grid.x_max = x_max;
    }

    if let Some(samples) = args.samples {
        info!("Overriding x samples to: {samples}");
        config.grid.samples = samples;
    }

    if let Some(times) = &args.times {
        info!("Using fixed times: {times:?}");
        config.time = TimeSchedule::Fixed {
            times: times.clone(),
        };
    } else if args.t_end.is_some() || args.frames.is_some() {
        let (start, end, frames) = match config.time {
            TimeSchedule::Sweep { start, end, frames } => (start, end, frames),
            TimeSchedule::Fixed { .. } => (0.0, DEFAULT_T_END, DEFAULT_FRAMES),
        };
        let end = args.t_end.unwrap_or(end);
        let frames = args.frames.unwrap_or(frames);
        info!("Using time sweep [{start}, {end}] with {frames} frames");
        config.time = TimeSchedule::Sweep { start, end, frames };
    }

    if let Some(html) = &args.html {
        config.output.html = html.clone();
        config.output.html_enabled = true;
    }

    if args.no_html {
        config.output.html_enabled = false;
    }

    if let Some(dir) = &args.png_dir {
        config.output.png_dir = Some(dir.clone());
    }

    if let Some(json) = &args.json {
        config.output.json = Some(json.clone());
    }

    if args.no_overlays {
        config.plot.overlays = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn short_flags_are_distinct() {
        let args = Args::parse_from(["semi_infinite_string", "-c", "3", "-n", "10", "-v"]);
        assert_eq!(args.speed, Some(3.0));
        assert_eq!(args.samples, Some(10));
        assert!(args.verbose);
        assert!(args.config.is_none());

        let args = Args::parse_from(["semi_infinite_string", "-f", "run.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("run.toml")));
        assert!(args.speed.is_none());
    }

    #[test]
    fn html_output_can_be_disabled() {
        let args = Args::parse_from(["semi_infinite_string", "--no-html"]);
        let config = load_and_apply_config(&args).unwrap();
        assert!(!config.output.html_enabled);

        let args = Args::parse_from(["semi_infinite_string", "--html", "page.html"]);
        let config = load_and_apply_config(&args).unwrap();
        assert!(config.output.html_enabled);
        assert_eq!(config.output.html, PathBuf::from("page.html"));

        let clash =
            Args::try_parse_from(["semi_infinite_string", "--html", "a.html", "--no-html"]);
        assert!(clash.is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "semi_infinite_string",
            "--speed",
            "1.5",
            "--x-max",
            "8",
            "--samples",
            "200",
            "--no-overlays",
            "--png-dir",
            "frames",
        ]);
        let config = load_and_apply_config(&args).unwrap();
        assert_eq!(config.wave.speed, 1.5);
        assert_eq!(config.grid.x_max, 8.0);
        assert_eq!(config.grid.samples, 200);
        assert!(!config.plot.overlays);
        assert_eq!(config.output.png_dir, Some(PathBuf::from("frames")));
    }

    #[test]
    fn times_list_replaces_sweep() {
        let args = Args::parse_from(["semi_infinite_string", "--times", "0,0.5,1.25"]);
        let config = load_and_apply_config(&args).unwrap();
        assert_eq!(
            config.time,
            TimeSchedule::Fixed {
                times: vec![0.0, 0.5, 1.25]
            }
        );
    }

    #[test]
    fn sweep_bounds_can_be_adjusted() {
        let args = Args::parse_from(["semi_infinite_string", "--t-end", "3", "--frames", "31"]);
        let config = load_and_apply_config(&args).unwrap();
        assert_eq!(
            config.time,
            TimeSchedule::Sweep {
                start: 0.0,
                end: 3.0,
                frames: 31
            }
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/semi_infinite_string.toml")),
            ..Args::default()
        };
        assert!(load_and_apply_config(&args).is_err());
    }
}

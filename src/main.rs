use std::fs::write;
use std::process::ExitCode;

use clap::Parser;
use serde_json::to_string;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use semi_infinite_string::cli::{load_and_apply_config, Args};
use semi_infinite_string::render::{write_html, write_png_frames};
use semi_infinite_string::{sample_animation, Config, Result};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.write_default_config {
        Config::default().save(path)?;
        info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = load_and_apply_config(args)?;
    config.validate()?;
    debug!("{config:?}");

    let string = config.string()?;
    let xs = config.grid.positions()?;
    let times = config.time.times()?;
    info!(
        "Sampling {} positions over [{}, {}] at {} times (c = {})",
        xs.len(),
        config.grid.x_min,
        config.grid.x_max,
        times.len(),
        string.speed()
    );
    let animation = sample_animation(&string, &xs, &times)?;

    if let Some(path) = &config.output.json {
        write(path, to_string(&animation)?)?;
        info!("Generated: {}", path.display());
    }

    let domain = config.grid.domain();
    if config.output.html_enabled {
        write_html(&config.output.html, &animation, domain, &config.plot)?;
    }

    if let Some(dir) = &config.output.png_dir {
        write_png_frames(dir, &animation, domain, &config.plot)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

//! Numbered PNG frames, one image per sampled instant.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::{debug, info};

use crate::config::PlotConfig;
use crate::error::{Result, WaveError};
use crate::frames::{Animation, Frame};

/// `image001.png`, `image002.png`, ... for 0-based frame indices.
pub fn frame_file_name(index: usize) -> String {
    format!("image{:03}.png", index + 1)
}

fn draw_frame(
    path: &Path,
    x: &[f64],
    frame: &Frame,
    (x_min, x_max): (f64, f64),
    plot: &PlotConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (plot.width, plot.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, plot.y_min..plot.y_max)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc(format!("u (x, {:.2})", frame.t))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            x.iter().copied().zip(frame.displacement.iter().copied()),
            BLUE.stroke_width(2),
        ))?
        .label("u")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    if plot.overlays {
        chart
            .draw_series(DashedLineSeries::new(
                x.iter().copied().zip(frame.left.iter().copied()),
                6,
                4,
                GREEN.into(),
            ))?
            .label("reflected wave")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

        chart
            .draw_series(DashedLineSeries::new(
                x.iter().copied().zip(frame.right.iter().copied()),
                6,
                4,
                RED.into(),
            ))?
            .label("right-moving wave")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render one numbered PNG per frame into `dir`, creating it if needed.
pub fn write_png_frames(
    dir: impl AsRef<Path>,
    animation: &Animation,
    domain: (f64, f64),
    plot: &PlotConfig,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(animation.frames.len());
    for (index, frame) in animation.frames.iter().enumerate() {
        let path = dir.join(frame_file_name(index));
        draw_frame(&path, &animation.x, frame, domain, plot)
            .map_err(|err| WaveError::Plot(format!("{}: {err}", path.display())))?;
        debug!("Wrote frame t = {:.2} to {}", frame.t, path.display());
        written.push(path);
    }

    info!("Generated {} frames in {}", written.len(), dir.display());
    Ok(written)
}

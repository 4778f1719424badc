mod frame;
mod graph;

pub use frame::{frame_path, render_frame};
pub use graph::plot_anomalies_graph;

use indicatif::{ProgressBar, ProgressStyle};

use std::fs;
use std::path::Path;

use crate::error::AnimationError;
use crate::orbit::Ellipse;
use crate::samples::AnomalySamples;

/// Renders one frame per sample into `frames_dir`, creating it if needed.
/// Returns the number of frames written.
pub fn render_frames(
    frames_dir: &Path,
    samples: &AnomalySamples,
    ellipse: &Ellipse,
    size: (u32, u32),
) -> Result<usize, AnimationError> {
    fs::create_dir_all(frames_dir)?;

    let bar = ProgressBar::new(samples.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} frames | ETA {eta} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for index in 0..samples.len() {
        let path = frame_path(frames_dir, index);
        bar.set_message(path.display().to_string());
        render_frame(&path, samples, ellipse, index, size)?;
        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(samples.len())
}

/// Adapts a plotters error into ours, remembering which file we were drawing.
fn drawing_error<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> AnimationError + '_ {
    move |err| AnimationError::drawing(path, err)
}

/// A filled wedge: the center, followed by the arc from `start` to `end`.
fn wedge(center: (f64, f64), radius: f64, start: f64, end: f64) -> Vec<(f64, f64)> {
    let (x0, y0) = center;
    std::iter::once(center)
        .chain(
            crate::math::linspace(start, end, 100)
                .map(|angle| (x0 + radius * angle.cos(), y0 + radius * angle.sin())),
        )
        .collect()
}

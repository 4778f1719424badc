use clap::Parser;

use std::path::PathBuf;

use kepler_anomalies::config::AnimationConfig;
use kepler_anomalies::error::AnimationError;
use kepler_anomalies::orbit::Ellipse;
use kepler_anomalies::render::{plot_anomalies_graph, render_frames};
use kepler_anomalies::samples::AnomalySamples;
use kepler_anomalies::video::{make_video, VideoSettings};

/// Animates the mean, eccentric and true anomalies over one orbit.
#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long, default_value_t = 0.7)]
    eccentricity: f64,

    #[arg(long, default_value_t = 1.0)]
    semimajor: f64,

    /// Number of samples over one period; one frame is rendered per sample
    #[arg(short, long, default_value_t = 1000)]
    frames: usize,

    #[arg(long, default_value_t = 60)]
    framerate: u32,

    /// How many times the orbit plays in the video
    #[arg(long, default_value_t = 3)]
    loops: u32,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1440)]
    height: u32,

    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Render the frames, but don't call ffmpeg
    #[arg(long)]
    skip_video: bool,

    /// Only draw the anomaly graph
    #[arg(long)]
    graph_only: bool,
}

impl Args {
    fn to_config(&self) -> AnimationConfig {
        AnimationConfig {
            eccentricity: self.eccentricity,
            semimajor_axis: self.semimajor,
            num_frames: self.frames,
            framerate: self.framerate,
            loop_amount: self.loops,
            frame_size: (self.width, self.height),
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() -> Result<(), AnimationError> {
    let args = Args::parse();
    let config = args.to_config();
    config.validate()?;

    let ellipse = Ellipse::new(config.semimajor_axis, config.eccentricity)?;
    let samples = AnomalySamples::compute(config.eccentricity, config.num_frames)?;

    let graph_path = config.graph_path();
    plot_anomalies_graph(&graph_path, &samples, config.frame_size)?;
    println!("Anomaly graph written to {}", graph_path.display());

    if args.graph_only {
        return Ok(());
    }

    let frames_dir = config.frames_dir();
    let num_frames = render_frames(&frames_dir, &samples, &ellipse, config.frame_size)?;
    println!("Rendered {} frames into {}", num_frames, frames_dir.display());

    if args.skip_video {
        return Ok(());
    }

    let settings = VideoSettings {
        framerate: config.framerate,
        loop_amount: config.loop_amount,
        frame_size: config.frame_size,
    };
    match make_video(&frames_dir, &config.video_path(), &settings) {
        Err(AnimationError::FfmpegNotFound) => {
            eprintln!("ffmpeg not found on PATH; frames were kept but no video was made.");
            Ok(())
        }
        result => result,
    }
}

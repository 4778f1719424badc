use std::path::PathBuf;

use thiserror::Error;

use crate::math::anomaly::AnomalyError;
use crate::orbit::OrbitError;

#[derive(Error, Debug)]
pub enum AnimationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to draw {path}: {message}")]
    Drawing { path: PathBuf, message: String },

    #[error("Frame index {index} is out of range for {len} samples")]
    FrameOutOfRange { index: usize, len: usize },

    #[error("ffmpeg was not found on PATH")]
    FfmpegNotFound,

    #[error("ffmpeg exited with {0}")]
    FfmpegFailed(std::process::ExitStatus),
}

impl AnimationError {
    /// Plotters errors are generic over the backend, so we flatten them to a
    /// message tagged with the file we were drawing.
    pub fn drawing(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        AnimationError::Drawing {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

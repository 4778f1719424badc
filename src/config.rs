use std::path::{Path, PathBuf};

use crate::consts::{FRAMES_DIR_NAME, GRAPH_FILE_NAME, VIDEO_FILE_NAME};
use crate::error::AnimationError;
use crate::math::anomaly::check_eccentricity;

/// Everything needed to produce the graph, the frames and the video.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub eccentricity: f64,
    pub semimajor_axis: f64,
    /// One frame per sample, so this is also the number of samples
    pub num_frames: usize,
    pub framerate: u32,
    /// How many times the video plays the orbit
    pub loop_amount: u32,
    pub frame_size: (u32, u32),
    pub output_dir: PathBuf,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            eccentricity: 0.7,
            semimajor_axis: 1.0,
            num_frames: 1000,
            framerate: 60,
            loop_amount: 3,
            frame_size: (1920, 1440),
            output_dir: PathBuf::from("."),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), AnimationError> {
        check_eccentricity(self.eccentricity)?;

        if !(self.semimajor_axis.is_finite() && self.semimajor_axis > 0.0) {
            return Err(AnimationError::InvalidConfig(format!(
                "semi-major axis must be positive, got {}",
                self.semimajor_axis
            )));
        }
        if self.num_frames < 2 {
            return Err(AnimationError::InvalidConfig(format!(
                "need at least 2 frames, got {}",
                self.num_frames
            )));
        }
        // The frame files are named with four digits
        if self.num_frames > 10_000 {
            return Err(AnimationError::InvalidConfig(format!(
                "at most 10000 frames are supported, got {}",
                self.num_frames
            )));
        }
        if self.framerate == 0 {
            return Err(AnimationError::InvalidConfig(
                "framerate must be positive".to_owned(),
            ));
        }
        if self.loop_amount == 0 {
            return Err(AnimationError::InvalidConfig(
                "loop amount must be at least 1".to_owned(),
            ));
        }
        let (width, height) = self.frame_size;
        if width == 0 || height == 0 {
            return Err(AnimationError::InvalidConfig(format!(
                "frame size must be non-empty, got {}x{}",
                width, height
            )));
        }

        Ok(())
    }

    pub fn graph_path(&self) -> PathBuf {
        self.output_dir.join(GRAPH_FILE_NAME)
    }

    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join(FRAMES_DIR_NAME)
    }

    pub fn video_path(&self) -> PathBuf {
        self.output_dir.join(VIDEO_FILE_NAME)
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_owned();
        self
    }
}

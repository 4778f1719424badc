use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::AnimationError;

/// Settings for muxing the frames into a video.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoSettings {
    pub framerate: u32,
    /// Total number of times the frames are played back to back
    pub loop_amount: u32,
    pub frame_size: (u32, u32),
}

/// Builds the ffmpeg argument list. The frames are read with a glob, so
/// they're picked up in lexicographic order; that's why frame names are
/// zero-padded.
pub fn ffmpeg_args(frames_dir: &Path, output: &Path, settings: &VideoSettings) -> Vec<OsString> {
    let (width, height) = settings.frame_size;
    let stream_loop = settings.loop_amount.saturating_sub(1);

    // -s goes before -i, so it describes the input frames rather than
    // asking for a rescale
    let mut args: Vec<OsString> = vec![
        "-y".into(),
        "-stream_loop".into(),
        stream_loop.to_string().into(),
        "-framerate".into(),
        settings.framerate.to_string().into(),
        "-s".into(),
        format!("{}x{}", width, height).into(),
        "-pattern_type".into(),
        "glob".into(),
        "-i".into(),
    ];
    args.push(frames_dir.join("*.png").into_os_string());
    args.extend(
        ["-c:v", "libx264", "-pix_fmt", "yuv420p"]
            .iter()
            .map(OsString::from),
    );
    args.push(output.as_os_str().to_owned());
    args
}

/// Runs ffmpeg to turn the frames in `frames_dir` into a video at `output`.
pub fn make_video(
    frames_dir: &Path,
    output: &Path,
    settings: &VideoSettings,
) -> Result<(), AnimationError> {
    if settings.loop_amount == 0 {
        return Err(AnimationError::InvalidConfig(
            "loop amount must be at least 1".to_owned(),
        ));
    }

    println!("Encoding {}...", output.display());
    let status = Command::new("ffmpeg")
        .args(ffmpeg_args(frames_dir, output, settings))
        .stdin(Stdio::null())
        .status()
        .map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AnimationError::FfmpegNotFound,
            _ => AnimationError::Io(err),
        })?;

    if !status.success() {
        return Err(AnimationError::FfmpegFailed(status));
    }

    println!("Video written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(loop_amount: u32) -> VideoSettings {
        VideoSettings {
            framerate: 60,
            loop_amount,
            frame_size: (1920, 1440),
        }
    }

    #[test]
    fn test_ffmpeg_args() {
        let args = ffmpeg_args(Path::new("out/frames"), Path::new("out/kepler.mp4"), &settings(3));
        let args: Vec<String> = args
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            args,
            vec![
                "-y",
                "-stream_loop",
                "2",
                "-framerate",
                "60",
                "-s",
                "1920x1440",
                "-pattern_type",
                "glob",
                "-i",
                "out/frames/*.png",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "out/kepler.mp4",
            ]
        );
    }

    #[test]
    fn test_single_loop() {
        let args = ffmpeg_args(Path::new("f"), Path::new("v.mp4"), &settings(1));
        assert_eq!(args[1], OsString::from("-stream_loop"));
        assert_eq!(args[2], OsString::from("0"));
    }

    #[test]
    fn test_zero_loops_rejected() {
        let result = make_video(Path::new("f"), Path::new("v.mp4"), &settings(0));
        assert!(matches!(result, Err(AnimationError::InvalidConfig(_))));
    }
}

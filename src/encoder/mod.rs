//! # Video Encoder
//!
//! Takes the paginated frame texts and produces the output video. Telop
//! deliberately does not rasterize or encode in-process: the system `ffmpeg`
//! owns all of that, and this module owns all knowledge of how to drive it.
//!
//! ## Pipeline
//!
//! ```text
//! frame texts
//!      ↓  one clip per frame:
//!      ↓    lavfi color source (background, size, duration)
//!      ↓    drawtext filter (textfile, fontfile, centered)
//!      ↓    libx264 / yuv420p
//! frame clips
//!      ↓  concat demuxer, stream copy, emission order
//! output video
//! ```
//!
//! Frame text always goes through a temp textfile rather than an inline
//! `text=` value: drawtext's inline escaping rules are a labyrinth, and the
//! textfile route sidesteps them for arbitrary UTF-8 content. All
//! intermediates live in one [`TempDir`] and vanish when it drops.
//!
//! Argument construction is kept in pure functions so it can be tested
//! without ffmpeg installed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tracing::{debug, info};

use crate::config::VideoConfig;
use crate::error::TelopError;

/// Fixed clip frame rate. Only duration, size, and colors are configurable.
const FRAME_RATE: u32 = 30;

/// Drives ffmpeg to render and concatenate frame clips.
pub struct FfmpegEncoder<'a> {
    config: &'a VideoConfig,
    font_path: PathBuf,
}

impl<'a> FfmpegEncoder<'a> {
    pub fn new(config: &'a VideoConfig, font_path: PathBuf) -> Self {
        Self { config, font_path }
    }

    /// Probe for a runnable ffmpeg before doing any work.
    pub fn check_available() -> Result<(), TelopError> {
        match Command::new("ffmpeg").arg("-version").output() {
            Ok(output) if output.status.success() => Ok(()),
            _ => Err(TelopError::EncoderMissing),
        }
    }

    /// Render every frame to a clip, then concatenate the clips into
    /// `output`, in the order the frames were emitted.
    pub fn encode(&self, frames: &[String], output: &Path) -> Result<(), TelopError> {
        let scratch = TempDir::new()?;
        let mut clips = Vec::with_capacity(frames.len());

        for (index, text) in frames.iter().enumerate() {
            info!(frame = index + 1, total = frames.len(), "rendering frame clip");
            let clip = scratch.path().join(format!("frame_{index:04}.mp4"));
            self.render_frame(text, scratch.path(), index, &clip)?;
            clips.push(clip);
        }

        info!(clips = clips.len(), "concatenating frame clips");
        self.concatenate(&clips, scratch.path(), output)
    }

    fn render_frame(
        &self,
        text: &str,
        scratch: &Path,
        index: usize,
        clip: &Path,
    ) -> Result<(), TelopError> {
        let textfile = scratch.join(format!("frame_{index:04}.txt"));
        fs::write(&textfile, text)?;
        debug!(clip = %clip.display(), "invoking ffmpeg");
        let args = frame_args(self.config, &self.font_path, &textfile, clip);
        run_ffmpeg(&args, "rendering a frame clip")
    }

    fn concatenate(
        &self,
        clips: &[PathBuf],
        scratch: &Path,
        output: &Path,
    ) -> Result<(), TelopError> {
        let list_path = scratch.join("concat.txt");
        fs::write(&list_path, concat_list(clips))?;
        let args = concat_args(&list_path, output);
        run_ffmpeg(&args, "concatenating frame clips")
    }
}

fn run_ffmpeg(args: &[String], context: &str) -> Result<(), TelopError> {
    let output = Command::new("ffmpeg").args(args).output().map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            TelopError::EncoderMissing
        } else {
            TelopError::Io(error)
        }
    })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(TelopError::Encoder {
            context: context.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Arguments for rendering one frame clip.
fn frame_args(
    config: &VideoConfig,
    font_path: &Path,
    textfile: &Path,
    clip: &Path,
) -> Vec<String> {
    vec![
        "-f".into(),
        "lavfi".into(),
        "-i".into(),
        color_source(config),
        "-vf".into(),
        drawtext_filter(config, font_path, textfile),
        "-c:v".into(),
        "libx264".into(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-y".into(),
        clip.display().to_string(),
    ]
}

/// The lavfi color source describing the frame background.
fn color_source(config: &VideoConfig) -> String {
    format!(
        "color=c={}:size={}x{}:duration={}:rate={}",
        config.background_color, config.width, config.height, config.frame_duration, FRAME_RATE
    )
}

/// The drawtext filter: read text from a file, render it centered.
fn drawtext_filter(config: &VideoConfig, font_path: &Path, textfile: &Path) -> String {
    format!(
        "drawtext=textfile='{}':fontfile={}:fontsize={}:fontcolor={}:x=(w-text_w)/2:y=(h-text_h)/2:text_align=center",
        textfile.display(),
        font_path.display(),
        config.font_size,
        config.text_color
    )
}

/// Arguments for joining the clips with the concat demuxer.
fn concat_args(list_path: &Path, output: &Path) -> Vec<String> {
    vec![
        "-f".into(),
        "concat".into(),
        "-safe".into(),
        "0".into(),
        "-i".into(),
        list_path.display().to_string(),
        "-c".into(),
        "copy".into(),
        "-y".into(),
        output.display().to_string(),
    ]
}

/// The concat demuxer list file: one `file '...'` entry per clip, in order.
/// Single quotes inside a path use the demuxer's quote-splice escape.
fn concat_list(clips: &[PathBuf]) -> String {
    let mut list = String::new();
    for clip in clips {
        let escaped = clip.display().to_string().replace('\'', "'\\''");
        list.push_str("file '");
        list.push_str(&escaped);
        list.push_str("'\n");
    }
    list
}

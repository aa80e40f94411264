//! # Telop
//!
//! Turn plain text into a paced video of readable, centered frames.
//!
//! Most text-to-video scripts render first and slice the result afterwards,
//! which is how words get cut mid-glyph and emoji end up half off-screen.
//! Telop does the opposite: **the frame is the fundamental unit of layout.**
//! Text is normalized, measured with a width model that knows wide CJK and
//! symbol glyphs take two cells, wrapped into lines, and packed into frames
//! that are guaranteed to respect the line budget *before* any pixel is
//! rendered. Only then does each finished frame go to the encoder.
//!
//! ## Architecture
//!
//! ```text
//! Input (UTF-8 text file)
//!       ↓
//!   [text]     — Normalize, substitute symbols, estimate widths, wrap lines
//!       ↓
//!   [layout]   — Pack lines into frames, paragraph-aware
//!       ↓
//!   [font]     — Resolve the font file for rendering
//!       ↓
//!   [encoder]  — ffmpeg: one clip per frame, then concatenation
//! ```
//!
//! The text and layout stages are pure and deterministic; everything that
//! touches the filesystem or spawns a process lives in `font`, `encoder`,
//! and the entry points below.

pub mod config;
pub mod encoder;
pub mod error;
pub mod font;
pub mod layout;
pub mod text;

use std::fs;
use std::path::Path;

use tracing::info;

use config::VideoConfig;
use encoder::FfmpegEncoder;
use error::TelopError;

/// Summary of a completed generation run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    /// Number of frames in the output video.
    pub frame_count: usize,
    /// Total video duration in seconds.
    pub duration_secs: u64,
}

/// Paginate raw text into frame texts without touching the filesystem.
///
/// This is the primary library entry point: validates the configuration,
/// normalizes the text, and paginates it. Always returns at least one frame;
/// empty input yields a single empty frame.
pub fn paginate_text(raw: &str, config: &VideoConfig) -> Result<Vec<String>, TelopError> {
    let geometry = config.geometry()?;
    let cleaned = text::normalize(raw, config.substitute_symbols);
    Ok(layout::paginate(&cleaned, geometry))
}

/// Run the full pipeline: read the input file, paginate, render and
/// concatenate via ffmpeg, write the output video.
pub fn generate(input: &Path, output: &Path, config: &VideoConfig) -> Result<Report, TelopError> {
    let raw = load_text(input)?;
    let frames = paginate_text(&raw, config)?;
    info!(frames = frames.len(), "paginated input");

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let font_path = font::resolve_font(config.font_path.as_deref())?;
    FfmpegEncoder::new(config, font_path).encode(&frames, output)?;

    Ok(Report {
        frame_count: frames.len(),
        duration_secs: frames.len() as u64 * u64::from(config.frame_duration),
    })
}

/// Read an input file as UTF-8 text. Invalid UTF-8 is a decode error naming
/// the path, distinct from plain I/O failures.
pub fn load_text(path: &Path) -> Result<String, TelopError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| TelopError::InputDecode {
        path: path.to_path_buf(),
    })
}

//! Structured error types for the Telop pipeline.
//!
//! One unified enum covers the real failure sources: configuration
//! validation, input decoding, filesystem I/O, font resolution, and the
//! external encoder. Engine pagination itself never fails; degenerate input
//! produces a single empty frame instead of an error.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The unified error type returned by all public Telop API functions.
#[derive(Debug, Error)]
pub enum TelopError {
    /// A configuration knob was non-positive. Rejected before the frame
    /// geometry is derived, so a zero font size can never floor its way
    /// into a meaningless layout.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The input file's bytes are not valid UTF-8 text.
    #[error("input file '{}' is not valid UTF-8 text", .path.display())]
    InputDecode { path: PathBuf },

    /// Filesystem failure reading input, writing scratch files, or writing
    /// the final output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An explicitly configured font could not be found or parsed.
    #[error("font error: {0}")]
    Font(String),

    /// ffmpeg is not installed or not runnable from PATH.
    #[error("ffmpeg is not installed or not available in PATH (on Ubuntu/Debian: `sudo apt install ffmpeg`, on macOS: `brew install ffmpeg`)")]
    EncoderMissing,

    /// An ffmpeg invocation ran but exited with a failure status.
    #[error("ffmpeg failed while {context} ({status}): {stderr}")]
    Encoder {
        context: String,
        status: ExitStatus,
        stderr: String,
    },
}

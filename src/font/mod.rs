//! # Font Resolution
//!
//! Picks the font file handed to the encoder's drawtext filter. This is a
//! configuration-resolution strategy, not engine logic: an ordered list of
//! candidate paths is probed, the first candidate that exists *and* parses
//! as a real font face wins, and a fixed fallback is returned when nothing
//! matches. Candidates are ordered by Unicode coverage, since the drawtext
//! filter renders symbols and international text only as well as the face
//! it is given.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::TelopError;

/// Candidate font paths as shipped on common Linux distributions, probed in
/// order.
const CANDIDATE_FONTS: [&str; 6] = [
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansSymbols-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansSymbols2-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Returned when no candidate is usable. ffmpeg reports its own error if
/// this is missing too; resolution itself always succeeds without an
/// explicit path.
const FALLBACK_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Resolve the font file to render with.
///
/// An explicit path bypasses the probe entirely but must exist and parse;
/// a broken explicit path is an error rather than a silent fallback, since
/// the user asked for that exact face.
pub fn resolve_font(explicit: Option<&Path>) -> Result<PathBuf, TelopError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(TelopError::Font(format!(
                "font file '{}' does not exist",
                path.display()
            )));
        }
        validate_face(path)?;
        return Ok(path.to_path_buf());
    }

    for candidate in CANDIDATE_FONTS {
        let path = Path::new(candidate);
        if path.is_file() && validate_face(path).is_ok() {
            info!(font = candidate, "selected font");
            return Ok(path.to_path_buf());
        }
    }

    warn!(font = FALLBACK_FONT, "no usable candidate font, using fallback");
    Ok(PathBuf::from(FALLBACK_FONT))
}

/// Check that the file parses as a font face, so a truncated or bogus file
/// never reaches the encoder.
fn validate_face(path: &Path) -> Result<(), TelopError> {
    let data = std::fs::read(path)?;
    match ttf_parser::Face::parse(&data, 0) {
        Ok(_) => Ok(()),
        Err(error) => Err(TelopError::Font(format!(
            "failed to parse font '{}': {}",
            path.display(),
            error
        ))),
    }
}

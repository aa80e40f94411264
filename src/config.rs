//! # Run Configuration
//!
//! The immutable configuration for one generation run, plus the frame
//! geometry derived from it. The geometry is where pixels become layout
//! budgets: the text block gets 80% of the frame in each dimension, and the
//! per-character cell is estimated from the font size alone. That estimate is
//! deliberately conservative so wide glyphs still fit after the width model
//! (see [`crate::text::width`]) charges them two cells.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TelopError;

/// Configuration for a text-to-video run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConfig {
    /// Video width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Video height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Font size in points for the rendered text.
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Seconds each frame stays on screen.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: u32,

    /// Background color name passed through to the encoder.
    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// Text color name passed through to the encoder.
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Replace known symbol glyphs with bracketed text labels.
    #[serde(default = "default_substitute_symbols")]
    pub substitute_symbols: bool,

    /// Explicit font file. When set, the candidate probe is skipped and this
    /// path must exist and parse as a font face.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_font_size() -> u32 {
    32
}

fn default_frame_duration() -> u32 {
    2
}

fn default_background_color() -> String {
    "black".to_string()
}

fn default_text_color() -> String {
    "white".to_string()
}

fn default_substitute_symbols() -> bool {
    true
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            font_size: default_font_size(),
            frame_duration: default_frame_duration(),
            background_color: default_background_color(),
            text_color: default_text_color(),
            substitute_symbols: default_substitute_symbols(),
            font_path: None,
        }
    }
}

impl VideoConfig {
    /// Reject non-positive knobs before any geometry is derived.
    pub fn validate(&self) -> Result<(), TelopError> {
        if self.width == 0 {
            return Err(TelopError::InvalidConfig("width must be positive".into()));
        }
        if self.height == 0 {
            return Err(TelopError::InvalidConfig("height must be positive".into()));
        }
        if self.font_size == 0 {
            return Err(TelopError::InvalidConfig(
                "font size must be positive".into(),
            ));
        }
        if self.frame_duration == 0 {
            return Err(TelopError::InvalidConfig(
                "frame duration must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Validate and derive the layout budgets for this configuration.
    pub fn geometry(&self) -> Result<FrameGeometry, TelopError> {
        self.validate()?;
        Ok(FrameGeometry::derive(self))
    }
}

/// Layout budgets derived from a [`VideoConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Maximum visual-width units permitted on one line.
    pub chars_per_line: usize,
    /// Maximum number of lines permitted in one frame.
    pub lines_per_frame: usize,
}

/// Fraction of the frame reserved for text in each dimension.
const TEXT_AREA_RATIO: f64 = 0.8;

impl FrameGeometry {
    fn derive(config: &VideoConfig) -> Self {
        let text_width = f64::from(config.width) * TEXT_AREA_RATIO;
        let text_height = f64::from(config.height) * TEXT_AREA_RATIO;
        let font_size = f64::from(config.font_size);

        // Approximate cell size: an average glyph advance of font_size/1.5
        // horizontally, and font_size plus leading vertically. Both budgets
        // floor at 1 so a tiny frame with a huge font still lays out.
        let chars_per_line = (text_width / (font_size / 1.5)).floor() as usize;
        let lines_per_frame = (text_height / (font_size + 10.0)).floor() as usize;

        Self {
            chars_per_line: chars_per_line.max(1),
            lines_per_frame: lines_per_frame.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_derives_expected_budgets() {
        let geometry = VideoConfig::default().geometry().unwrap();
        // 1920x1080 at font size 32: 1536 / (32/1.5) = 72, 864 / 42 = 20.
        assert_eq!(geometry.chars_per_line, 72);
        assert_eq!(geometry.lines_per_frame, 20);
    }

    #[test]
    fn budgets_floor_at_one() {
        let config = VideoConfig {
            width: 10,
            height: 10,
            font_size: 200,
            ..Default::default()
        };
        let geometry = config.geometry().unwrap();
        assert_eq!(geometry.chars_per_line, 1);
        assert_eq!(geometry.lines_per_frame, 1);
    }

    #[test]
    fn zero_knobs_are_rejected() {
        for config in [
            VideoConfig {
                width: 0,
                ..Default::default()
            },
            VideoConfig {
                height: 0,
                ..Default::default()
            },
            VideoConfig {
                font_size: 0,
                ..Default::default()
            },
            VideoConfig {
                frame_duration: 0,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                config.geometry(),
                Err(TelopError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = VideoConfig {
            font_size: 48,
            text_color: "yellow".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: VideoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.font_size, 48);
        assert_eq!(back.text_color, "yellow");
        assert_eq!(back.width, config.width);
    }
}

//! Approximate visual-width model.
//!
//! Rendered text in a proportional font has no true "character width", but
//! the wrapper needs an integer cost per character to budget lines. The
//! model: every scalar codepoint costs 1 cell, except symbol glyphs
//! (General_Category `Symbol, other`) and East-Asian Fullwidth/Wide
//! characters, which cost 2. Combining marks and joiners are NOT discounted;
//! accounting is per scalar codepoint, not per grapheme cluster, so a ZWJ
//! sequence costs the sum of its parts. Unclassifiable codepoints default
//! to 1 rather than failing.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_width::UnicodeWidthChar;

/// Estimated cell cost of one scalar codepoint.
pub fn char_cells(ch: char) -> usize {
    if ch.general_category() == GeneralCategory::OtherSymbol {
        return 2;
    }
    // UnicodeWidthChar reports 2 for East-Asian Fullwidth/Wide codepoints.
    // Its 0-width answers (combining marks, joiners) and None (controls) are
    // clamped up to 1: this model never discounts a codepoint.
    match ch.width() {
        Some(w) if w >= 2 => 2,
        _ => 1,
    }
}

/// Estimated visual width of a string: the sum of its codepoint costs.
///
/// Pure and deterministic; the wrapper calls this per word on every layout
/// pass.
pub fn visual_width(text: &str) -> usize {
    text.chars().map(char_cells).sum()
}

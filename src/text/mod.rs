//! # Text Processing
//!
//! Everything character-level: normalization, symbol substitution, the
//! visual-width model, and greedy line wrapping. The layout module consumes
//! this module's output and never looks at raw input text itself.
//!
//! Order inside [`normalize`] is load-bearing. Symbol substitution must run
//! before the allow-list filter: the filter would otherwise blank out the
//! glyphs before they can be matched, and the brackets of already-produced
//! labels would be stripped too. Brackets are therefore part of the
//! allow-list.

pub mod symbols;
pub mod width;
pub mod wrap;

pub use symbols::SymbolTable;
pub use width::visual_width;
pub use wrap::{wrap, Line};

use unicode_normalization::UnicodeNormalization;

/// Punctuation that survives normalization. Everything else outside
/// alphanumerics and whitespace becomes a single space. `[` and `]` are
/// included so substitution labels like `[wave]` survive intact.
const ALLOWED_PUNCTUATION: [char; 7] = ['?', '!', '\'', '.', ',', '[', ']'];

/// Clean raw input text for layout.
///
/// Applies NFC normalization, optional symbol substitution, the allow-list
/// filter, and trims the result. Idempotent: normalizing an already
/// normalized string returns it unchanged. Empty input yields empty output;
/// the paginator turns that into a single empty frame.
pub fn normalize(raw: &str, substitute_symbols: bool) -> String {
    let composed: String = raw.nfc().collect();

    let substituted = if substitute_symbols {
        SymbolTable::global().substitute(&composed)
    } else {
        composed
    };

    let filtered: String = substituted
        .chars()
        .map(|ch| if is_allowed(ch) { ch } else { ' ' })
        .collect();

    filtered.trim().to_string()
}

fn is_allowed(ch: char) -> bool {
    ch.is_alphanumeric() || ch.is_whitespace() || ALLOWED_PUNCTUATION.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_characters_pass_through() {
        assert_eq!(
            normalize("Hello, world! Isn't it fine?", false),
            "Hello, world! Isn't it fine?"
        );
    }

    #[test]
    fn disallowed_punctuation_becomes_space() {
        assert_eq!(normalize("a;b:c(d)e", false), "a b c d e");
    }

    #[test]
    fn result_is_trimmed() {
        assert_eq!(normalize("  hi  ", false), "hi");
        assert_eq!(normalize("\n\nhi\n\n", false), "hi");
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_output() {
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize(" \t\n ", true), "");
    }

    #[test]
    fn substitution_labels_survive_the_filter() {
        assert_eq!(normalize("👋 hi", true), "[wave] hi");
    }

    #[test]
    fn unsubstituted_glyphs_are_blanked() {
        // With substitution off the wave emoji is outside the allow-list.
        assert_eq!(normalize("👋 hi", false), "hi");
    }

    #[test]
    fn wide_letters_are_kept() {
        // CJK ideographs are alphanumeric in the Unicode sense.
        assert_eq!(normalize("中文 ok", false), "中文 ok");
    }

    #[test]
    fn nfc_composes_decomposed_input() {
        // "e" + combining acute composes to a single codepoint.
        let decomposed = "cafe\u{0301}";
        let normalized = normalize(decomposed, false);
        assert_eq!(normalized, "café");
        assert_eq!(normalized.chars().count(), 4);
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["  Hello 👋 world!  ", "a;b", "café\u{0301}", ""] {
            let once = normalize(input, true);
            assert_eq!(normalize(&once, true), once);
        }
    }
}

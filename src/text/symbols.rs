//! Symbol-to-label substitution table.
//!
//! Video renderers handle emoji and pictographs unevenly, so Telop can
//! replace known glyphs with bracketed text labels like `[wave]` before any
//! filtering happens. The mapping is data, not code: a JSON asset embedded
//! at build time and parsed once on first use, so extending the table never
//! touches the substitution algorithm.

use serde::Deserialize;
use std::sync::OnceLock;

/// One glyph-to-label mapping. A glyph may span several codepoints (a base
/// character plus a variation selector, or a full ZWJ sequence).
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolEntry {
    pub glyph: String,
    pub label: String,
}

/// The substitution table, held with entries ordered longest glyph sequence
/// first. Ordering matters when sequences overlap: a ZWJ sequence must win
/// over its leading base emoji, otherwise substitution would tear the
/// sequence apart and leave stray joiners behind.
#[derive(Debug)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
}

static TABLE: OnceLock<SymbolTable> = OnceLock::new();

impl SymbolTable {
    /// The table loaded from the embedded asset.
    pub fn global() -> &'static SymbolTable {
        TABLE.get_or_init(|| {
            SymbolTable::from_json(include_str!("../../assets/symbols.json"))
                .expect("embedded symbol table asset must parse")
        })
    }

    /// Parse a table from JSON and order it longest-first.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut entries: Vec<SymbolEntry> = serde_json::from_str(json)?;
        entries.sort_by(|a, b| b.glyph.chars().count().cmp(&a.glyph.chars().count()));
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every occurrence of every known glyph with its label.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for entry in &self.entries {
            if result.contains(&entry.glyph) {
                result = result.replace(&entry.glyph, &entry.label);
            }
        }
        result
    }
}

//! The structured mapping document.
//!
//! The generator writes the name map a second time as JSON next to the artifact.
//! Tools that need the map read this document instead of pattern-matching the generated source.
//!
//! ```json
//! {
//!   "name": "k-icon",
//!   "font_family": "iconfont",
//!   "css_prefix_text": "kit-",
//!   "counts": { "fill": 1, "line": 1, "other": 0 },
//!   "entries": [
//!     { "name": "home-fill", "unicode": "e600" },
//!     { "name": "home-line", "unicode": "e601" }
//!   ]
//! }
//! ```
//!
//! Entries are listed in map order and the document holds no timestamp, so it is byte-identical across runs on an unchanged manifest.

use super::Provenance;
use crate::classify::CategoryCounts;
use crate::data::Codepoint;
use crate::error::{read_input, write_output, Error, Result};
use crate::map::IconNameMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The structured form of a generated map.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The name of the icon set.
    pub name: String,
    /// The CSS font family.
    pub font_family: String,
    /// The CSS class prefix.
    pub css_prefix_text: String,
    /// The number of glyphs per category.
    pub counts: CategoryCounts,
    /// The names of the map in map order.
    pub entries: Vec<Entry>,
}

/// One name of a map.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// The icon name.
    pub name: String,
    /// The hexadecimal codepoint.
    pub unicode: String,
}

impl Document {
    /// Creates the document of a map.
    pub fn new(names: &IconNameMap, provenance: &Provenance) -> Document {
        Document {
            name: provenance.name.clone(),
            font_family: provenance.font_family.clone(),
            css_prefix_text: provenance.css_prefix.clone(),
            counts: provenance.counts,
            entries: names
                .iter()
                .map(|(name, codepoint)| Entry {
                    name: name.to_string(),
                    unicode: codepoint.hex().to_string(),
                })
                .collect(),
        }
    }

    /// Parses a document.
    pub fn from_json(json: &str) -> Result<Document> {
        serde_json::from_str(json).map_err(Error::Document)
    }

    /// Serializes the document as pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> String {
        // a derived `Serialize` of strings and integers can not fail
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }

    /// Reads the document at `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        log::info!("read mapping document {} ...", path.display());
        Self::from_json(&read_input(path)?)
    }

    /// Writes the document to `path`, creating missing parent directories.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::info!("write mapping document {} ...", path.display());
        write_output(path, &self.to_json())
    }

    /// Returns the name map of the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodepoint`] if an entry's `unicode` is not a valid codepoint.
    pub fn names(&self) -> Result<IconNameMap> {
        self.entries
            .iter()
            .map(|entry| -> Result<(String, Codepoint)> {
                let codepoint =
                    Codepoint::parse(&entry.unicode).ok_or_else(|| Error::InvalidCodepoint {
                        identifier: entry.name.clone(),
                        codepoint: entry.unicode.clone(),
                    })?;
                Ok((entry.name.clone(), codepoint))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::ctx::Context;
    use crate::data::{Glyph, Source};
    use crate::map::build;

    fn fixture() -> (IconNameMap, Provenance) {
        let source = Source {
            font_family: Some("kit-icon".to_string()),
            glyphs: vec![
                Glyph::new("", "home-line", "e601").unwrap(),
                Glyph::new("house", "home-fill", "e600").unwrap(),
            ],
            ..Source::default()
        };
        let mapping = build(&classify(&source.glyphs));
        let provenance = Provenance::new(&source, &Context::default(), &mapping, "2026-01-01 00:00:00");
        (mapping.names, provenance)
    }

    #[test]
    fn test_document_entries_keep_map_order() {
        let (names, provenance) = fixture();
        let document = Document::new(&names, &provenance);

        let entries: Vec<(&str, &str)> = document
            .entries
            .iter()
            .map(|x| (x.name.as_str(), x.unicode.as_str()))
            .collect();
        assert_eq!(
            entries,
            [("home-fill", "e600"), ("house", "e600"), ("home-line", "e601")]
        );
        assert_eq!(document.name, "k-icon");
        assert_eq!(document.font_family, "kit-icon");
        assert_eq!(document.counts.fill, 1);
    }

    #[test]
    fn test_document_json_restores_map() {
        let (names, provenance) = fixture();
        let json = Document::new(&names, &provenance).to_json();

        assert!(json.ends_with("}\n"));
        assert!(!json.contains("2026"));

        let restored = Document::from_json(&json).unwrap().names().unwrap();
        assert_eq!(restored.names(), names.names());
        assert_eq!(restored.get("house"), names.get("house"));
    }

    #[test]
    fn test_document_rejects_invalid_entries() {
        let json = r#"{
            "name": "k-icon",
            "font_family": "iconfont",
            "css_prefix_text": "kit-",
            "counts": { "fill": 0, "line": 0, "other": 1 },
            "entries": [{ "name": "x", "unicode": "nope" }]
        }"#;
        let document = Document::from_json(json).unwrap();
        assert!(matches!(document.names(), Err(Error::InvalidCodepoint { .. })));
        assert!(matches!(Document::from_json("[]"), Err(Error::Document(_))));
    }
}

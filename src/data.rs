//! The source data of an icon font.
//!
//! Sources are read from an `iconfont.json` style manifest:
//!
//! ```json
//! {
//!   "name": "k-icon",
//!   "font_family": "kit-icon",
//!   "css_prefix_text": "kit-",
//!   "description": "",
//!   "glyphs": [
//!     { "name": "home", "font_class": "home-fill", "unicode": "e600" }
//!   ]
//! }
//! ```
//!
//! Every field other than `glyphs` is optional.
//! Glyph records may carry further fields (`icon_id`, `unicode_decimal`, ...) which are ignored.

use crate::classify::Category;
use crate::error::{read_input, Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// The source of an icon font.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Source {
    /// The name of the icon set.
    pub name: Option<String>,
    /// The CSS font family of the icon font.
    pub font_family: Option<String>,
    /// The prefix of the CSS classes of the icon font.
    pub css_prefix: Option<String>,
    /// A human description of the icon set.
    pub description: Option<String>,
    /// The glyphs of the font in manifest order.
    pub glyphs: Vec<Glyph>,
}

/// One glyph of an icon font.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Glyph {
    /// The display name; often equal to `identifier`, sometimes an alias.
    pub name: String,
    /// The `font_class` of the glyph, following `<base>[-fill|-line]`.
    pub identifier: String,
    /// The codepoint the glyph is mapped to.
    pub codepoint: Codepoint,
}

impl Glyph {
    /// Creates a glyph, returning `None` if `codepoint` is not a valid codepoint.
    ///
    /// ```
    /// # use iconmap::data::Glyph;
    /// let glyph = Glyph::new("home", "home-fill", "e600").unwrap();
    /// assert_eq!(glyph.codepoint.hex(), "e600");
    /// assert!(Glyph::new("home", "home-fill", "xyz").is_none());
    /// ```
    pub fn new(name: &str, identifier: &str, codepoint: &str) -> Option<Glyph> {
        Some(Glyph {
            name: name.to_string(),
            identifier: identifier.to_string(),
            codepoint: Codepoint::parse(codepoint)?,
        })
    }

    /// The category of the glyph, derived from the suffix of its identifier.
    pub fn category(&self) -> Category {
        Category::of(&self.identifier)
    }

    /// The display name if it is an alias distinct from the identifier.
    pub fn alias(&self) -> Option<&str> {
        if self.name.is_empty() || self.name == self.identifier {
            None
        } else {
            Some(&self.name)
        }
    }
}

/// The hexadecimal text of a Unicode scalar value, as written in the manifest.
///
/// The text is kept verbatim (including case and leading zeros) so that emitted artifacts reproduce the manifest.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Codepoint(String);

impl Codepoint {
    /// Returns a codepoint for hexadecimal text, or `None` if the text is not the value of a Unicode scalar.
    ///
    /// Surrogates and values beyond `U+10FFFF` are rejected.
    pub fn parse(text: &str) -> Option<Codepoint> {
        if text.is_empty() || !text.bytes().all(|x| x.is_ascii_hexdigit()) {
            return None;
        }

        let value = u32::from_str_radix(text, 16).ok()?;
        std::char::from_u32(value)?;
        Some(Codepoint(text.to_string()))
    }

    /// The hexadecimal text.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// The character of the codepoint.
    pub fn as_char(&self) -> char {
        // validated by `parse`
        u32::from_str_radix(&self.0, 16)
            .ok()
            .and_then(std::char::from_u32)
            .unwrap_or(std::char::REPLACEMENT_CHARACTER)
    }

    /// The codepoint as an escaped Unicode string literal body.
    ///
    /// Four-digit codepoints are written as `\uXXXX`; other lengths use the braced `\u{...}` form.
    ///
    /// ```
    /// # use iconmap::data::Codepoint;
    /// assert_eq!(Codepoint::parse("e601").unwrap().escaped(), "\\ue601");
    /// assert_eq!(Codepoint::parse("1f600").unwrap().escaped(), "\\u{1f600}");
    /// ```
    pub fn escaped(&self) -> String {
        if self.0.len() == 4 {
            format!("\\u{}", self.0)
        } else {
            format!("\\u{{{}}}", self.0)
        }
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{}", self.0.to_uppercase())
    }
}

#[derive(Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    css_prefix_text: Option<String>,
    #[serde(default)]
    description: Option<String>,
    glyphs: Vec<RawGlyph>,
}

#[derive(Deserialize)]
struct RawGlyph {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    font_class: Option<String>,
    #[serde(default)]
    unicode: Option<String>,
}

impl Source {
    /// Parses a manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGlyphs`] if `glyphs` is absent or not an array, [`Error::Manifest`] if the document is otherwise malformed, and [`Error::EmptyIdentifier`] or [`Error::InvalidCodepoint`] for invalid glyph records.
    ///
    /// ```
    /// # use iconmap::data::Source;
    /// let source = Source::from_json(r#"{
    ///     "font_family": "kit-icon",
    ///     "glyphs": [{ "name": "home", "font_class": "home-fill", "unicode": "e600" }]
    /// }"#).unwrap();
    /// assert_eq!(source.glyphs[0].identifier, "home-fill");
    /// assert_eq!(source.name, None);
    /// ```
    pub fn from_json(json: &str) -> Result<Source> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(Error::Manifest)?;

        if !value.get("glyphs").map_or(false, |x| x.is_array()) {
            return Err(Error::MissingGlyphs);
        }

        let raw: RawManifest = serde_json::from_value(value).map_err(Error::Manifest)?;
        let glyphs = raw
            .glyphs
            .into_iter()
            .enumerate()
            .map(|(index, glyph)| -> Result<Glyph> {
                let identifier = glyph.font_class.unwrap_or_default();

                if identifier.is_empty() {
                    return Err(Error::EmptyIdentifier { index });
                }

                let text = glyph.unicode.unwrap_or_default();
                let codepoint = Codepoint::parse(&text).ok_or_else(|| Error::InvalidCodepoint {
                    identifier: identifier.clone(),
                    codepoint: text,
                })?;

                Ok(Glyph {
                    name: glyph.name.unwrap_or_default(),
                    identifier,
                    codepoint,
                })
            })
            .collect::<Result<Vec<Glyph>>>()?;

        Ok(Source {
            name: raw.name,
            font_family: raw.font_family,
            css_prefix: raw.css_prefix_text,
            description: raw.description,
            glyphs,
        })
    }

    /// Reads and parses the manifest at `path`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Source> {
        let path = path.as_ref();
        log::info!("read manifest {} ...", path.display());

        let source = Self::from_json(&read_input(path)?)?;
        log::debug!("manifest has {} glyphs", source.glyphs.len());

        Ok(source)
    }
}

//! The ordered mapping of icon names to codepoints.
//!
//! Use [`build`] to turn classified glyphs into an [`IconNameMap`].
//! The map keeps insertion order, which is the order of the generated `ICON_UNICODE_MAP` literal:
//! fill glyphs, then line glyphs, then other glyphs, each sorted by identifier, and every alias directly after the identifier it belongs to.
//!
//! ```
//! # use iconmap::classify::classify;
//! # use iconmap::data::Glyph;
//! # use iconmap::map::build;
//! let glyphs = vec![
//!     Glyph::new("", "settings-line", "e602").unwrap(),
//!     Glyph::new("", "home-line", "e601").unwrap(),
//!     Glyph::new("", "home-fill", "e600").unwrap(),
//! ];
//! let mapping = build(&classify(&glyphs));
//! assert_eq!(mapping.names.names(), ["home-fill", "home-line", "settings-line"]);
//! assert!(mapping.names.get("nonexistent").is_none());
//! ```

use crate::classify::{base_name, Categories, Category, CategoryCounts, FILL_SUFFIX, LINE_SUFFIX};
use crate::data::Codepoint;
use indexmap::IndexMap;
use itertools::Itertools;
use std::iter::FromIterator;

/// An insertion-ordered map from icon names (identifiers and aliases) to codepoints.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct IconNameMap {
    entries: IndexMap<String, Codepoint>,
}

/// A key that was inserted more than once while building a map.
///
/// The later insertion wins; the key keeps the position of its first insertion.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Collision {
    /// The colliding name.
    pub key: String,
    /// The identifier of the glyph whose insertion replaced the earlier value.
    pub owner: String,
    /// The overwritten codepoint.
    pub replaced: Codepoint,
    /// The codepoint the key maps to after the collision.
    pub kept: Codepoint,
}

/// The result of [`build`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mapping {
    /// The name map.
    pub names: IconNameMap,
    /// The number of glyphs per category.
    pub counts: CategoryCounts,
    /// Keys that were inserted more than once, in order of occurrence.
    pub collisions: Vec<Collision>,
}

/// Builds the name map of classified glyphs.
///
/// Glyphs are inserted in order fill, line, other.
/// Each glyph inserts its identifier and, if the glyph has a display name distinct from the identifier, the display name as an alias.
/// A key inserted twice takes the later value and is recorded as a [`Collision`].
pub fn build(categories: &Categories<'_>) -> Mapping {
    let mut names = IconNameMap::default();
    let mut collisions = Vec::new();

    for glyph in categories.iter() {
        let keys = std::iter::once(glyph.identifier.as_str()).chain(glyph.alias());

        for key in keys {
            log::trace!("{} -> {}", key, glyph.codepoint);

            if let Some(replaced) = names.insert(key.to_string(), glyph.codepoint.clone()) {
                let collision = Collision {
                    key: key.to_string(),
                    owner: glyph.identifier.clone(),
                    replaced,
                    kept: glyph.codepoint.clone(),
                };
                log::debug!("collision: {:?}", collision);
                collisions.push(collision);
            }
        }
    }

    log::debug!(
        "built unicode map with {} names from {} glyphs",
        names.len(),
        categories.len()
    );

    Mapping {
        names,
        counts: categories.counts(),
        collisions,
    }
}

impl IconNameMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, returning the codepoint it mapped to before.
    ///
    /// A name that is already present keeps its position.
    pub fn insert(&mut self, name: String, codepoint: Codepoint) -> Option<Codepoint> {
        self.entries.insert(name, codepoint)
    }

    /// The number of names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the names and codepoints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Codepoint)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the codepoint of a name, or `None` if the name is unknown.
    pub fn get(&self, name: &str) -> Option<&Codepoint> {
        self.entries.get(name)
    }

    /// Whether the map contains a name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// The names of a category, sorted ascending.
    ///
    /// The category is derived from the suffix of each name, so aliases without a suffix count as [`Category::Other`].
    pub fn names_by_category(&self, category: Category) -> Vec<&str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|x| Category::of(x) == category)
            .sorted()
            .collect()
    }

    /// The names containing `keyword`, compared case-insensitively, sorted ascending.
    ///
    /// An empty keyword matches nothing, unlike a plain substring test which matches every name.
    /// The generated `searchIcons` accessor behaves the same.
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        if keyword.is_empty() {
            return Vec::new();
        }

        let keyword = keyword.to_lowercase();
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|x| x.to_lowercase().contains(&keyword))
            .sorted()
            .collect()
    }

    /// The present variants of a base name, in order `<base>-fill`, `<base>-line`, `<base>`.
    pub fn variants(&self, base: &str) -> Vec<String> {
        vec![
            format!("{}{}", base, FILL_SUFFIX),
            format!("{}{}", base, LINE_SUFFIX),
            base.to_string(),
        ]
        .into_iter()
        .filter(|x| self.contains(x))
        .collect()
    }

    /// The base name of an icon name; see [`base_name`].
    pub fn base_name(name: &str) -> &str {
        base_name(name)
    }
}

impl FromIterator<(String, Codepoint)> for IconNameMap {
    fn from_iter<I: IntoIterator<Item = (String, Codepoint)>>(iter: I) -> Self {
        IconNameMap {
            entries: iter.into_iter().collect(),
        }
    }
}

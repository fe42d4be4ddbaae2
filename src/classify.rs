//! Classification of glyphs by the `-fill` / `-line` suffix convention.
//!
//! Identifiers follow `<base>-fill`, `<base>-line`, or `<base>`.
//! The suffix alone decides the [`Category`] of a glyph; no other property is considered.
//!
//! ```
//! # use iconmap::classify::{classify, Category};
//! # use iconmap::data::Glyph;
//! let glyphs = vec![
//!     Glyph::new("", "star-line", "e603").unwrap(),
//!     Glyph::new("", "home-fill", "e600").unwrap(),
//!     Glyph::new("", "arrow", "e610").unwrap(),
//!     Glyph::new("", "heart-fill", "e602").unwrap(),
//! ];
//! let categories = classify(&glyphs);
//! let fill: Vec<&str> = categories.fill.iter().map(|x| x.identifier.as_str()).collect();
//! assert_eq!(fill, ["heart-fill", "home-fill"]);
//! assert_eq!(categories.len(), glyphs.len());
//! ```

use crate::data::Glyph;
use std::fmt;

/// The suffix of filled icons.
pub const FILL_SUFFIX: &str = "-fill";
/// The suffix of outlined icons.
pub const LINE_SUFFIX: &str = "-line";

/// The category of an icon name.
///
/// Categories are ordered as they appear in a generated map: fill, then line, then other.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Category {
    /// Names ending in `-fill`.
    Fill,
    /// Names ending in `-line`.
    Line,
    /// All remaining names.
    Other,
}

impl Category {
    /// All categories in map order.
    pub const ALL: [Category; 3] = [Category::Fill, Category::Line, Category::Other];

    /// Returns the category of a name.
    pub fn of(name: &str) -> Category {
        if name.ends_with(FILL_SUFFIX) {
            Category::Fill
        } else if name.ends_with(LINE_SUFFIX) {
            Category::Line
        } else {
            Category::Other
        }
    }

    /// Returns the category for the name used by the generated accessors (`fill`, `line`, `other`), or `None` if the name is invalid.
    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "fill" => Some(Category::Fill),
            "line" => Some(Category::Line),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// The name used by the generated accessors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Line => "line",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the base name of an icon name by removing a trailing `-fill` or `-line`.
///
/// ```
/// # use iconmap::classify::base_name;
/// assert_eq!(base_name("star-fill"), "star");
/// assert_eq!(base_name("star-line"), "star");
/// assert_eq!(base_name("star"), "star");
/// ```
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(FILL_SUFFIX)
        .or_else(|| name.strip_suffix(LINE_SUFFIX))
        .unwrap_or(name)
}

/// Glyphs partitioned by [`Category`], each partition sorted by identifier.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Categories<'a> {
    /// Glyphs whose identifier ends in `-fill`.
    pub fill: Vec<&'a Glyph>,
    /// Glyphs whose identifier ends in `-line`.
    pub line: Vec<&'a Glyph>,
    /// All remaining glyphs.
    pub other: Vec<&'a Glyph>,
}

impl<'a> Categories<'a> {
    /// The partition of a category.
    pub fn get(&self, category: Category) -> &[&'a Glyph] {
        match category {
            Category::Fill => &self.fill,
            Category::Line => &self.line,
            Category::Other => &self.other,
        }
    }

    /// The number of classified glyphs.
    pub fn len(&self) -> usize {
        self.fill.len() + self.line.len() + self.other.len()
    }

    /// Whether no glyph was classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the glyphs in map order: fill, then line, then other.
    pub fn iter(&self) -> impl Iterator<Item = &'a Glyph> + '_ {
        self.fill
            .iter()
            .chain(self.line.iter())
            .chain(self.other.iter())
            .copied()
    }

    /// The size of each partition.
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            fill: self.fill.len(),
            line: self.line.len(),
            other: self.other.len(),
        }
    }
}

/// The number of glyphs per category.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct CategoryCounts {
    /// The number of fill glyphs.
    pub fill: usize,
    /// The number of line glyphs.
    pub line: usize,
    /// The number of other glyphs.
    pub other: usize,
}

/// Partitions glyphs by category and sorts each partition by identifier.
///
/// Partitions are sorted by ordinal comparison of identifiers.
/// The sort is stable, so glyphs sharing an identifier keep their manifest order.
pub fn classify(glyphs: &[Glyph]) -> Categories<'_> {
    let mut categories = Categories::default();

    for glyph in glyphs {
        match glyph.category() {
            Category::Fill => categories.fill.push(glyph),
            Category::Line => categories.line.push(glyph),
            Category::Other => categories.other.push(glyph),
        }
    }

    for partition in [
        &mut categories.fill,
        &mut categories.line,
        &mut categories.other,
    ]
    .iter_mut()
    {
        partition.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    log::debug!(
        "classified {} glyphs: {} fill, {} line, {} other",
        glyphs.len(),
        categories.fill.len(),
        categories.line.len(),
        categories.other.len()
    );

    categories
}

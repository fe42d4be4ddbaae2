//! # Iconmap
//!
//! *Iconmap* compiles icon font manifests into unicode maps.
//!
//! An icon font manifest (the `iconfont.json` layout) lists glyphs with a display name, a `font_class` identifier, and a codepoint.
//! Identifiers follow the `<base>-fill` / `<base>-line` / `<base>` convention.
//! The pipeline turns such a manifest into a generated source artifact mapping every icon name to its codepoint, and audits the result.
//!
//! The pipeline stages are:
//!
//! - [Reading](crate::data) the manifest.
//! - [Classifying](crate::classify) glyphs into fill, line, and other, sorted by identifier.
//! - [Building](crate::map) the ordered name map, including display-name aliases.
//! - [Emitting](crate::emit) the artifact and its [structured document](crate::emit::document).
//! - [Auditing](crate::audit) fill/line pairing.
//! - [Verifying](crate::harness) an artifact against its manifest.
//!
//! Each stage is exposed as a binary: `generate_icon_config`, `check_icon_pairs`, and `test_icon_config`.
//!
//! ## Example
//!
//! ```
//! # use iconmap::classify::classify;
//! # use iconmap::data::Source;
//! # use iconmap::map::build;
//! # use iconmap::audit::audit;
//! let source = Source::from_json(r#"{ "glyphs": [
//!     { "name": "home-fill", "font_class": "home-fill", "unicode": "e600" },
//!     { "name": "home-line", "font_class": "home-line", "unicode": "e601" },
//!     { "name": "settings-line", "font_class": "settings-line", "unicode": "e602" }
//! ] }"#).unwrap();
//! let mapping = build(&classify(&source.glyphs));
//! assert_eq!(mapping.names.names(), ["home-fill", "home-line", "settings-line"]);
//!
//! let report = audit(mapping.names.names());
//! assert_eq!(report.pair_rate_text(), "50.0%");
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod audit;
pub mod classify;
pub mod ctx;
pub mod data;
pub mod emit;
pub mod error;
pub mod harness;
pub mod map;

pub use error::{Error, Result};

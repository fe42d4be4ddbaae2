//! # Emitter
//!
//! Compiles a name map into the generated source artifact.
//!
//! An artifact consists of three parts:
//!
//! 1. A provenance header comment with the manifest metadata, the category counts, and the generation time.
//! 2. The `ICON_UNICODE_MAP` literal, listing every name in map order.
//! 3. The [accessor library](accessors::LIBRARY).
//!
//! # Example
//!
//! ```
//! # use iconmap::classify::classify;
//! # use iconmap::ctx::Context;
//! # use iconmap::data::Source;
//! # use iconmap::emit::{compile, Provenance};
//! # use iconmap::map::build;
//! let ctx = Context::default();
//! let source = Source::from_json(r#"{ "glyphs": [
//!     { "name": "home-fill", "font_class": "home-fill", "unicode": "e600" }
//! ] }"#).unwrap();
//! let mapping = build(&classify(&source.glyphs));
//! let provenance = Provenance::new(&source, &ctx, &mapping, "2026-01-01 00:00:00");
//! let artifact = compile(&mapping.names, &provenance);
//! assert!(artifact.contains("  'home-fill': '\\ue600'\n}"));
//! ```

pub mod accessors;
pub mod document;

use crate::classify::{classify, Categories, Category, CategoryCounts};
use crate::ctx::Context;
use crate::data::Source;
use crate::error::{write_output, Result};
use crate::map::{build, IconNameMap, Mapping};
use accessors::{LIBRARY, MAP_NAME};
use document::Document;
use itertools::Itertools;
use std::fmt;
use std::path::Path;

/// The format of the generation timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// The number of identifiers per category listed as examples in the generation statistics.
const STATISTICS_EXAMPLES: usize = 3;

/// The metadata recorded in the provenance header.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Provenance {
    /// The name of the icon set.
    pub name: String,
    /// A human description of the icon set.
    pub description: String,
    /// The font file.
    pub font_file: String,
    /// The CSS font family.
    pub font_family: String,
    /// The CSS class prefix.
    pub css_prefix: String,
    /// The number of glyphs per category.
    pub counts: CategoryCounts,
    /// The local generation time.
    pub generated_at: String,
}

impl Provenance {
    /// Collects the provenance of a mapping.
    ///
    /// Metadata absent from (or empty in) the manifest falls back to the defaults of `ctx`.
    pub fn new(source: &Source, ctx: &Context, mapping: &Mapping, generated_at: &str) -> Self {
        fn or(value: &Option<String>, fallback: &str) -> String {
            value
                .as_deref()
                .filter(|x| !x.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }

        Provenance {
            name: or(&source.name, &ctx.default_name),
            description: or(&source.description, &ctx.default_description),
            font_file: ctx.font_file.clone(),
            font_family: or(&source.font_family, &ctx.default_font_family),
            css_prefix: or(&source.css_prefix, &ctx.default_css_prefix),
            counts: mapping.counts,
            generated_at: generated_at.to_string(),
        }
    }

    /// Returns the current local time formatted for the provenance header.
    pub fn now() -> String {
        chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Keeps a metadata value on a single comment line.
fn comment_text(text: &str) -> String {
    text.lines().map(str::trim).join(" ").replace("*/", "* /")
}

/// Escapes a name for a single-quoted string literal.
fn quote(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');

    for c in name.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }

    quoted.push('\'');
    quoted
}

/// Returns the provenance header comment.
pub fn header(provenance: &Provenance) -> String {
    format!(
        "/**\n\
         \x20* {name} icon unicode map\n\
         \x20* {description}\n\
         \x20* Font file: {font_file}\n\
         \x20* Font family: {font_family}\n\
         \x20* CSS prefix: {css_prefix}\n\
         \x20*\n\
         \x20* Icon categories:\n\
         \x20* - Fill: {fill}\n\
         \x20* - Line: {line}\n\
         \x20* - Other: {other}\n\
         \x20*\n\
         \x20* Generated file, do not edit by hand\n\
         \x20* Generated at: {generated_at}\n\
         \x20*/\n\n",
        name = comment_text(&provenance.name),
        description = comment_text(&provenance.description),
        font_file = comment_text(&provenance.font_file),
        font_family = comment_text(&provenance.font_family),
        css_prefix = comment_text(&provenance.css_prefix),
        fill = provenance.counts.fill,
        line = provenance.counts.line,
        other = provenance.counts.other,
        generated_at = provenance.generated_at,
    )
}

/// Returns the `ICON_UNICODE_MAP` literal in map order.
pub fn map_literal(names: &IconNameMap) -> String {
    let entries = names
        .iter()
        .map(|(name, codepoint)| format!("  {}: '{}'", quote(name), codepoint.escaped()))
        .join(",\n");

    format!(
        "// Icon unicode map\nexport const {}: UTSJSONObject = {{\n{}\n}}\n\n",
        MAP_NAME, entries
    )
}

/// Compiles the artifact of a name map.
pub fn compile(names: &IconNameMap, provenance: &Provenance) -> String {
    log::info!("compile artifact with {} names ...", names.len());

    let header = header(provenance);
    let literal = map_literal(names);
    let mut artifact = String::with_capacity(header.len() + literal.len() + LIBRARY.len());
    artifact.push_str(&header);
    artifact.push_str(&literal);
    artifact.push_str(LIBRARY);
    artifact
}

/// Writes an artifact to `path`, creating missing parent directories.
pub fn write<P: AsRef<Path>>(path: P, artifact: &str) -> Result<()> {
    let path = path.as_ref();
    log::info!("write artifact {} ...", path.display());
    write_output(path, artifact)
}

/// The outcome of [`generate`].
#[derive(Debug, Clone)]
pub struct Generated {
    /// The number of glyphs in the manifest.
    pub glyph_count: usize,
    /// The first identifiers of the fill and line categories, in map order.
    pub examples: [Vec<String>; 2],
    /// The built mapping.
    pub mapping: Mapping,
    /// The provenance recorded in the artifact.
    pub provenance: Provenance,
}

impl Generated {
    /// Returns the generation statistics printed to the console.
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics(self)
    }
}

/// The console statistics of a [`Generated`] run; see [`Generated::statistics`].
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a>(&'a Generated);

impl fmt::Display for Statistics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generated = self.0;
        let counts = &generated.mapping.counts;

        writeln!(f, "Statistics:")?;
        writeln!(f, "   Glyphs: {}", generated.glyph_count)?;
        writeln!(f, "   Mapped names: {}", generated.mapping.names.len())?;
        writeln!(f, "   Font family: {}", generated.provenance.font_family)?;
        writeln!(f, "   CSS prefix: {}", generated.provenance.css_prefix)?;
        writeln!(f)?;
        writeln!(f, "Categories:")?;
        writeln!(f, "   Fill: {}", counts.fill)?;
        writeln!(f, "   Line: {}", counts.line)?;
        writeln!(f, "   Other: {}", counts.other)?;

        for (label, examples, count) in [
            ("Fill", &generated.examples[0], counts.fill),
            ("Line", &generated.examples[1], counts.line),
        ]
        .iter()
        {
            if !examples.is_empty() {
                let more = if *count > STATISTICS_EXAMPLES { "..." } else { "" };
                writeln!(f, "   {} examples: {}{}", label, examples.join(", "), more)?;
            }
        }

        for collision in &generated.mapping.collisions {
            writeln!(
                f,
                "   Collision: '{}' now maps to {} ({}), was {}",
                collision.key, collision.kept, collision.owner, collision.replaced
            )?;
        }

        Ok(())
    }
}

/// Returns the first identifiers of a category partition.
fn examples(categories: &Categories<'_>, category: Category) -> Vec<String> {
    categories
        .get(category)
        .iter()
        .take(STATISTICS_EXAMPLES)
        .map(|x| x.identifier.clone())
        .collect()
}

/// Reads the manifest of `ctx`, then writes the artifact and the structured document.
///
/// `generated_at` is recorded in the provenance header; see [`Provenance::now`].
///
/// # Errors
///
/// Returns an error if the manifest is missing or malformed, or if an output can not be written.
/// Nothing is written if the manifest can not be read.
pub fn generate(ctx: &Context, generated_at: &str) -> Result<Generated> {
    let source = Source::read(&ctx.manifest_path)?;

    log::info!("build unicode map ...");
    let categories = classify(&source.glyphs);
    let mapping = build(&categories);

    for collision in &mapping.collisions {
        log::warn!(
            "'{}' is defined twice; {} replaces {}",
            collision.key,
            collision.kept,
            collision.replaced
        );
    }

    let provenance = Provenance::new(&source, ctx, &mapping, generated_at);
    let artifact = compile(&mapping.names, &provenance);
    write(&ctx.artifact_path, &artifact)?;
    Document::new(&mapping.names, &provenance).write(&ctx.document_path)?;

    Ok(Generated {
        glyph_count: source.glyphs.len(),
        examples: [
            examples(&categories, Category::Fill),
            examples(&categories, Category::Line),
        ],
        mapping,
        provenance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Glyph;
    use pretty_assertions::assert_eq;

    fn fixture(glyphs: Vec<Glyph>) -> (Mapping, Provenance) {
        let source = Source {
            name: Some("kit".to_string()),
            font_family: Some("kit-icon".to_string()),
            css_prefix: Some(String::new()),
            description: None,
            glyphs,
        };
        let mapping = build(&classify(&source.glyphs));
        let provenance = Provenance::new(&source, &Context::default(), &mapping, "2026-10-19 12:00:00");
        (mapping, provenance)
    }

    #[test]
    fn test_provenance_fallbacks() {
        let (_, provenance) = fixture(vec![]);
        assert_eq!(provenance.name, "kit");
        assert_eq!(provenance.font_family, "kit-icon");
        assert_eq!(provenance.css_prefix, "kit-");
        assert_eq!(
            provenance.description,
            "Icon unicode mapping generated from iconfont.json"
        );
        assert_eq!(provenance.font_file, "iconfont.ttf");
    }

    #[test]
    fn test_header() {
        let (_, provenance) = fixture(vec![
            Glyph::new("", "home-fill", "e600").unwrap(),
            Glyph::new("", "home-line", "e601").unwrap(),
            Glyph::new("", "close", "e602").unwrap(),
        ]);

        assert_eq!(
            header(&provenance),
            "/**\n\
             \x20* kit icon unicode map\n\
             \x20* Icon unicode mapping generated from iconfont.json\n\
             \x20* Font file: iconfont.ttf\n\
             \x20* Font family: kit-icon\n\
             \x20* CSS prefix: kit-\n\
             \x20*\n\
             \x20* Icon categories:\n\
             \x20* - Fill: 1\n\
             \x20* - Line: 1\n\
             \x20* - Other: 1\n\
             \x20*\n\
             \x20* Generated file, do not edit by hand\n\
             \x20* Generated at: 2026-10-19 12:00:00\n\
             \x20*/\n\n"
        );
    }

    #[test]
    fn test_header_keeps_comment_closed() {
        assert_eq!(comment_text("multi\n  line */ text"), "multi line * / text");
    }

    #[test]
    fn test_map_literal() {
        let (mapping, _) = fixture(vec![
            Glyph::new("", "settings-line", "e602").unwrap(),
            Glyph::new("Home", "home-fill", "e600").unwrap(),
            Glyph::new("", "smile", "1f600").unwrap(),
        ]);

        assert_eq!(
            map_literal(&mapping.names),
            "// Icon unicode map\n\
             export const ICON_UNICODE_MAP: UTSJSONObject = {\n\
             \x20 'home-fill': '\\ue600',\n\
             \x20 'Home': '\\ue600',\n\
             \x20 'settings-line': '\\ue602',\n\
             \x20 'smile': '\\u{1f600}'\n\
             }\n\n"
        );
    }

    #[test]
    fn test_map_literal_empty() {
        assert_eq!(
            map_literal(&IconNameMap::new()),
            "// Icon unicode map\nexport const ICON_UNICODE_MAP: UTSJSONObject = {\n\n}\n\n"
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("home"), "'home'");
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_compile_is_deterministic() {
        let glyphs = vec![
            Glyph::new("", "b-line", "e601").unwrap(),
            Glyph::new("alias", "a-fill", "e600").unwrap(),
        ];
        let (mapping, provenance) = fixture(glyphs.clone());
        let (again, _) = fixture(glyphs.into_iter().rev().collect());

        assert_eq!(
            compile(&mapping.names, &provenance),
            compile(&again.names, &provenance)
        );
    }

    #[test]
    fn test_compile_layout() {
        let (mapping, provenance) = fixture(vec![Glyph::new("", "home-fill", "e600").unwrap()]);
        let artifact = compile(&mapping.names, &provenance);

        assert!(artifact.starts_with("/**\n * kit icon unicode map\n"));
        assert!(artifact.ends_with(LIBRARY));
        assert_eq!(artifact.matches("export const ICON_UNICODE_MAP").count(), 1);
    }

    #[test]
    fn test_write_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts").join("k-icon.uts");

        write(&path, "artifact").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "artifact");
    }

    const MANIFEST: &str = r#"{
        "name": "kit",
        "font_family": "kit-icon",
        "glyphs": [
            { "name": "user-fill", "font_class": "user-fill", "unicode": "e604" },
            { "name": "home-fill", "font_class": "home-fill", "unicode": "e600" },
            { "name": "bell-fill", "font_class": "bell-fill", "unicode": "e605" },
            { "name": "star-fill", "font_class": "star-fill", "unicode": "e606" },
            { "name": "home-line", "font_class": "home-line", "unicode": "e601" },
            { "name": "close", "font_class": "close", "unicode": "e603" }
        ]
    }"#;

    fn project(manifest: Option<&str>) -> (tempfile::TempDir, Context) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(dir.path());
        if let Some(manifest) = manifest {
            write_output(&ctx.manifest_path, manifest).unwrap();
        }
        (dir, ctx)
    }

    #[test]
    fn test_generate_writes_artifact_and_document() {
        let (_dir, ctx) = project(Some(MANIFEST));
        let generated = generate(&ctx, "2026-10-19 12:00:00").unwrap();

        let artifact = std::fs::read_to_string(&ctx.artifact_path).unwrap();
        assert_eq!(artifact, compile(&generated.mapping.names, &generated.provenance));

        let document = Document::read(&ctx.document_path).unwrap();
        assert_eq!(document.entries.len(), 6);
        assert_eq!(document.counts, generated.mapping.counts);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let (_dir, ctx) = project(Some(MANIFEST));

        generate(&ctx, "2026-10-19 12:00:00").unwrap();
        let first = std::fs::read_to_string(&ctx.artifact_path).unwrap();
        let first_document = std::fs::read_to_string(&ctx.document_path).unwrap();

        generate(&ctx, "2026-10-19 12:00:00").unwrap();
        assert_eq!(std::fs::read_to_string(&ctx.artifact_path).unwrap(), first);
        assert_eq!(std::fs::read_to_string(&ctx.document_path).unwrap(), first_document);
    }

    #[test]
    fn test_generate_missing_manifest_writes_nothing() {
        let (_dir, ctx) = project(None);

        assert!(matches!(
            generate(&ctx, "2026-10-19 12:00:00"),
            Err(crate::Error::MissingInput { .. })
        ));
        assert!(!ctx.artifact_path.exists());
        assert!(!ctx.document_path.exists());
    }

    #[test]
    fn test_statistics() {
        let (_dir, ctx) = project(Some(MANIFEST));
        let generated = generate(&ctx, "2026-10-19 12:00:00").unwrap();

        assert_eq!(
            generated.statistics().to_string(),
            "Statistics:\n\
             \x20  Glyphs: 6\n\
             \x20  Mapped names: 6\n\
             \x20  Font family: kit-icon\n\
             \x20  CSS prefix: kit-\n\
             \n\
             Categories:\n\
             \x20  Fill: 4\n\
             \x20  Line: 1\n\
             \x20  Other: 1\n\
             \x20  Fill examples: bell-fill, home-fill, star-fill...\n\
             \x20  Line examples: home-line\n"
        );
    }
}

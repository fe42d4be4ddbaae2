//! # Consistency harness
//!
//! Verifies a generated artifact against its manifest.
//!
//! The harness deliberately shares no code with the generation path: it extracts the map literal with its own patterns, reads the manifest with its own minimal schema, and derives the expected map order with its own ordering rule.
//! A bug in the classifier, builder, or emitter therefore shows up as a failed assertion instead of being echoed.
//!
//! Failed assertions are findings, not errors.
//! [`run`] only fails if the artifact or the manifest is missing or unreadable.

use crate::ctx::Context;
use crate::emit::accessors::ACCESSOR_NAMES;
use crate::error::{read_input, Error, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

lazy_static! {
    /// The body of the map literal, without the braces.
    static ref MAP_LITERAL: Regex =
        Regex::new(r"export const ICON_UNICODE_MAP: UTSJSONObject = \{\n([\s\S]*?)\n\}").unwrap();
    /// One `'name': 'value'` line of the map literal.
    static ref MAP_ENTRY: Regex =
        Regex::new(r"^\s*'((?:[^'\\]|\\.)*)'\s*:\s*'((?:[^'\\]|\\.)*)',?\s*$").unwrap();
    /// An escaped codepoint, `\uXXXX` or `\u{X...}` with any number of digits.
    static ref ESCAPED_CODEPOINT: Regex =
        Regex::new(r"^\\u(?:([0-9a-fA-F]{4})|\{([0-9a-fA-F]+)\})$").unwrap();
    /// A category count of the provenance header.
    static ref HEADER_COUNT: Regex = Regex::new(r"(?m)^ \* - (Fill|Line|Other): (\d+)$").unwrap();
}

/// Base names checked by the sample section.
const SAMPLE_BASES: [&str; 5] = ["home", "user", "heart", "star", "search"];
/// The number of names listed in findings and samples.
const LISTED: usize = 5;

/// The map literal of an artifact.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Extracted {
    /// The names and escaped codepoints in literal order.
    pub entries: Vec<(String, String)>,
    /// The category counts of the provenance header, if present.
    pub header_counts: Option<[usize; 3]>,
}

/// Extracts the map literal of an artifact.
///
/// # Errors
///
/// Returns [`Error::MissingMapLiteral`] if the artifact has no `ICON_UNICODE_MAP` literal.
///
/// ```
/// # use iconmap::harness::extract;
/// let artifact = "export const ICON_UNICODE_MAP: UTSJSONObject = {\n  'home-fill': '\\ue600'\n}\n";
/// let extracted = extract(artifact).unwrap();
/// assert_eq!(extracted.entries, [("home-fill".to_string(), "\\ue600".to_string())]);
/// ```
pub fn extract(artifact: &str) -> Result<Extracted> {
    let body = MAP_LITERAL
        .captures(artifact)
        .and_then(|x| x.get(1))
        .ok_or(Error::MissingMapLiteral)?
        .as_str();

    let entries = body
        .lines()
        .filter_map(|line| {
            let captures = MAP_ENTRY.captures(line)?;
            Some((unescape(&captures[1]), captures[2].to_string()))
        })
        .collect();

    let counts: HashMap<String, usize> = HEADER_COUNT
        .captures_iter(artifact)
        .filter_map(|x| Some((x[1].to_string(), x[2].parse().ok()?)))
        .collect();
    let header_counts = match (counts.get("Fill"), counts.get("Line"), counts.get("Other")) {
        (Some(&fill), Some(&line), Some(&other)) => Some([fill, line, other]),
        _ => None,
    };

    Ok(Extracted {
        entries,
        header_counts,
    })
}

/// Reverses the escaping of a single-quoted literal.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}

/// Returns the hexadecimal digits of an escaped codepoint, or `None` if the text is no escaped codepoint.
fn codepoint_digits(escaped: &str) -> Option<&str> {
    let captures = ESCAPED_CODEPOINT.captures(escaped)?;
    captures.get(1).or_else(|| captures.get(2)).map(|x| x.as_str())
}

/// The reference manifest, read with a schema independent of [`crate::data`].
#[derive(Debug, Deserialize)]
struct Reference {
    glyphs: Vec<ReferenceGlyph>,
}

#[derive(Debug, Deserialize)]
struct ReferenceGlyph {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    font_class: Option<String>,
    #[serde(default)]
    unicode: Option<String>,
}

impl Reference {
    fn from_json(json: &str) -> Result<Reference> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(Error::Manifest)?;

        if !value.get("glyphs").map_or(false, |x| x.is_array()) {
            return Err(Error::MissingGlyphs);
        }

        serde_json::from_value(value).map_err(Error::Manifest)
    }

    fn font_classes(&self) -> Vec<&str> {
        self.glyphs
            .iter()
            .filter_map(|x| x.font_class.as_deref())
            .collect()
    }
}

/// The rank of a name in map order: fill, line, other.
fn rank(name: &str) -> usize {
    if name.ends_with("-fill") {
        0
    } else if name.ends_with("-line") {
        1
    } else {
        2
    }
}

/// The suffix-less name of a fill or line name.
fn strip(name: &str) -> &str {
    &name[..name.len() - 5]
}

/// The map order derived from `(name, font_class)` pairs of the manifest.
///
/// Fill, line, other; ordinal within each; aliases right after their identifier; a repeated key keeps its first position.
/// Each key is paired with whether it was first inserted as an identifier.
fn derive_order<'a>(reference: &[(&'a str, &'a str)]) -> Vec<(&'a str, bool)> {
    let mut ordered = reference.to_vec();
    ordered.sort_by(|(_, a), (_, b)| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

    let mut seen = HashSet::new();
    let mut expected = Vec::new();
    for (name, class) in ordered {
        if seen.insert(class) {
            expected.push((class, true));
        }
        if !name.is_empty() && name != class && seen.insert(name) {
            expected.push((name, false));
        }
    }

    expected
}

/// The keys of a derived order that were first inserted as an alias.
fn aliased_identifiers<'a>(order: &[(&'a str, bool)]) -> HashSet<&'a str> {
    order
        .iter()
        .filter(|(_, identifier)| !identifier)
        .map(|(key, _)| *key)
        .collect()
}

/// The outcome of one line of a harness section.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Outcome {
    /// Informational output.
    Info,
    /// A passed assertion.
    Pass,
    /// A failed assertion.
    Fail,
    /// A data-quality finding that is not an assertion.
    Warn,
}

/// One line of a harness section.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Line {
    /// The kind of line.
    pub outcome: Outcome,
    /// The text of the line.
    pub text: String,
}

/// A titled group of harness lines.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Section {
    /// The title of the section.
    pub title: &'static str,
    /// The lines of the section.
    pub lines: Vec<Line>,
}

impl Section {
    fn new(title: &'static str) -> Self {
        Section {
            title,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, outcome: Outcome, text: String) {
        self.lines.push(Line { outcome, text });
    }

    fn info(&mut self, text: String) {
        self.push(Outcome::Info, text);
    }

    fn assert(&mut self, passed: bool, pass: String, fail: String) {
        if passed {
            self.push(Outcome::Pass, pass);
        } else {
            self.push(Outcome::Fail, fail);
        }
    }

    /// The failed assertions of the section.
    pub fn failures(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|x| x.outcome == Outcome::Fail)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        for line in &self.lines {
            let mark = match line.outcome {
                Outcome::Info => "  ",
                Outcome::Pass => "ok",
                Outcome::Fail => "FAIL",
                Outcome::Warn => "warn",
            };
            writeln!(f, "   [{}] {}", mark, line.text)?;
        }

        Ok(())
    }
}

/// The results of a harness run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Report {
    /// The sections in order of execution.
    pub sections: Vec<Section>,
}

impl Report {
    /// The number of failed assertions.
    pub fn failure_count(&self) -> usize {
        self.sections.iter().map(|x| x.failures().count()).sum()
    }

    /// The section with the given title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|x| x.title == title)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}", section)?;
        }
        Ok(())
    }
}

/// Lists at most [`LISTED`] names, with `...` if there are more.
fn listing<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    let more = if names.len() > LISTED { "..." } else { "" };
    format!("{}{}", names.iter().take(LISTED).join(", "), more)
}

/// Checks that every identifier of the artifact sits in the block of its category and that the header counts match the manifest.
pub fn check_classification(extracted: &Extracted, reference: &[(&str, &str)]) -> Section {
    let mut section = Section::new("Classification");
    let names: Vec<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();
    let classes: HashSet<&str> = reference.iter().map(|(_, class)| *class).collect();
    // an identifier first inserted as an earlier glyph's alias keeps that position
    let aliased = aliased_identifiers(&derive_order(reference));

    let mut counts = [0usize; 3];
    for name in &names {
        counts[rank(name)] += 1;
    }
    section.info(format!("fill names: {}", counts[0]));
    section.info(format!("line names: {}", counts[1]));
    section.info(format!("other names: {}", counts[2]));

    // identifiers must form the blocks fill, line, other in this order
    let mut highest = 0;
    let mut misplaced = Vec::new();
    for name in names
        .iter()
        .filter(|x| classes.contains(*x) && !aliased.contains(*x))
    {
        let rank = rank(name);
        if rank < highest {
            misplaced.push(*name);
        }
        highest = highest.max(rank);
    }
    section.assert(
        misplaced.is_empty(),
        "identifiers are grouped fill, line, other".to_string(),
        format!("identifiers outside their category block: {}", listing(misplaced)),
    );

    let mut expected = [0usize; 3];
    for (_, class) in reference {
        expected[rank(class)] += 1;
    }
    match extracted.header_counts {
        Some(header) => section.assert(
            header == expected,
            "header category counts match the manifest".to_string(),
            format!(
                "header category counts {:?} differ from the manifest {:?}",
                header, expected
            ),
        ),
        None => section.push(
            Outcome::Fail,
            "header category counts are missing".to_string(),
        ),
    }

    section
}

/// Checks that identifiers are sorted within each category and that the map order matches the order derived from the manifest.
pub fn check_sorting(extracted: &Extracted, reference: &[(&str, &str)]) -> Section {
    let mut section = Section::new("Sorting");
    let names: Vec<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();
    let classes: HashSet<&str> = reference.iter().map(|(_, class)| *class).collect();
    let order = derive_order(reference);
    let aliased = aliased_identifiers(&order);

    for (rank_value, label) in [(0, "fill"), (1, "line"), (2, "other")].iter() {
        let identifiers: Vec<&str> = names
            .iter()
            .copied()
            .filter(|x| classes.contains(x) && !aliased.contains(x) && rank(x) == *rank_value)
            .collect();
        let sorted = identifiers.windows(2).all(|x| x[0] <= x[1]);
        section.assert(
            sorted,
            format!("{} identifiers are sorted", label),
            format!("{} identifiers are not sorted", label),
        );
    }

    let expected: Vec<&str> = order.iter().map(|(key, _)| *key).collect();

    let matches = expected == names;
    section.assert(
        matches,
        "map order is fill, line, other with aliases after their identifier".to_string(),
        "map order differs from the manifest derivation".to_string(),
    );
    if !matches {
        section.info(format!("expected: {}", listing(expected.iter().copied())));
        section.info(format!("actual:   {}", listing(names.iter().copied())));
    }

    section
}

/// Checks that no manifest identifier is missing from the artifact and that every name maps to a codepoint.
pub fn check_integrity(extracted: &Extracted, reference_classes: &[&str]) -> Section {
    let mut section = Section::new("Integrity");
    let names: HashSet<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();

    section.info(format!("manifest glyphs: {}", reference_classes.len()));
    section.info(format!("map entries: {}", extracted.entries.len()));

    let missing: Vec<&str> = reference_classes
        .iter()
        .copied()
        .filter(|x| !names.contains(x))
        .collect();
    section.assert(
        missing.is_empty(),
        "no identifier is missing".to_string(),
        format!("missing identifiers: {}", listing(missing)),
    );

    let unmapped: Vec<&str> = extracted
        .entries
        .iter()
        .filter(|(_, value)| codepoint_digits(value).is_none())
        .map(|(name, _)| name.as_str())
        .collect();
    section.assert(
        unmapped.is_empty(),
        "every name maps to a codepoint".to_string(),
        format!("names without a codepoint: {}", listing(unmapped)),
    );

    let distinct: HashSet<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();
    section.assert(
        distinct.len() == extracted.entries.len(),
        "names are unique".to_string(),
        "the map literal repeats names".to_string(),
    );

    section
}

/// Checks that the artifact exports every accessor function.
pub fn check_functions(artifact: &str) -> Section {
    let mut section = Section::new("Functions");

    for name in ACCESSOR_NAMES.iter() {
        let exists = artifact.contains(&format!("export function {}(", name));
        section.assert(exists, format!("{} exists", name), format!("{} is missing", name));
    }

    section
}

/// Summarizes the fill/line pairing of the artifact's names.
pub fn check_pairs(extracted: &Extracted) -> Section {
    let mut section = Section::new("Pairs");
    let names = extracted.entries.iter().map(|(x, _)| x.as_str());

    let fill: BTreeSet<&str> = names.clone().filter(|x| rank(x) == 0).map(strip).collect();
    let line: BTreeSet<&str> = names.filter(|x| rank(x) == 1).map(strip).collect();

    let only_fill: Vec<&str> = fill.difference(&line).copied().collect();
    let only_line: Vec<&str> = line.difference(&fill).copied().collect();
    let paired = fill.intersection(&line).count();
    let total = fill.union(&line).count();
    let rate = if total == 0 {
        0.0
    } else {
        100.0 * paired as f64 / total as f64
    };

    if !only_fill.is_empty() {
        section.push(
            Outcome::Warn,
            format!("fill only: {} ({})", only_fill.len(), listing(only_fill.iter().copied())),
        );
    }
    if !only_line.is_empty() {
        section.push(
            Outcome::Warn,
            format!("line only: {} ({})", only_line.len(), listing(only_line.iter().copied())),
        );
    }
    section.info(format!("paired: {} ({:.1}%)", paired, rate));

    if !only_fill.is_empty() || !only_line.is_empty() {
        section.info("run `check_icon_pairs` for the detailed pairing report".to_string());
    }

    section
}

/// Lists sample names and the pairing of common base names.
pub fn check_samples(extracted: &Extracted) -> Section {
    let mut section = Section::new("Samples");
    let names: Vec<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();
    let fill: Vec<&str> = names.iter().copied().filter(|x| rank(x) == 0).sorted().collect();
    let line: Vec<&str> = names.iter().copied().filter(|x| rank(x) == 1).sorted().collect();

    section.info(format!("fill: {}", listing(fill.iter().copied())));
    section.info(format!("line: {}", listing(line.iter().copied())));

    for base in SAMPLE_BASES.iter() {
        let has_fill = fill.iter().any(|x| x.contains(base));
        let has_line = line.iter().any(|x| x.contains(base));

        match (has_fill, has_line) {
            (true, true) => section.info(format!("{}: fill and line", base)),
            (true, false) => section.push(Outcome::Warn, format!("{}: fill only", base)),
            (false, true) => section.push(Outcome::Warn, format!("{}: line only", base)),
            (false, false) => {}
        }
    }

    section
}

/// Checks that the structured mapping document lists the same entries as the artifact.
pub fn check_document(extracted: &Extracted, document: &str) -> Section {
    let mut section = Section::new("Document");

    let entries: Option<Vec<(String, String)>> = serde_json::from_str::<serde_json::Value>(document)
        .ok()
        .and_then(|x| x.get("entries").cloned())
        .and_then(|x| serde_json::from_value::<Vec<HashMap<String, String>>>(x).ok())
        .map(|entries| {
            entries
                .into_iter()
                .map(|mut x| {
                    let name = x.remove("name").unwrap_or_default();
                    let unicode = x.remove("unicode").unwrap_or_default();
                    (name, unicode)
                })
                .collect()
        });

    let entries = match entries {
        Some(entries) => entries,
        None => {
            section.push(Outcome::Fail, "the mapping document is unreadable".to_string());
            return section;
        }
    };

    let artifact: Vec<(&str, Option<&str>)> = extracted
        .entries
        .iter()
        .map(|(name, value)| (name.as_str(), codepoint_digits(value)))
        .collect();
    let document: Vec<(&str, Option<&str>)> = entries
        .iter()
        .map(|(name, unicode)| (name.as_str(), Some(unicode.as_str())))
        .collect();

    section.assert(
        artifact == document,
        "the mapping document matches the artifact".to_string(),
        format!(
            "the mapping document ({} entries) differs from the artifact ({} entries)",
            document.len(),
            artifact.len()
        ),
    );

    section
}

/// Runs every check on an artifact and its manifest.
///
/// `document` is the structured mapping document, if one was found.
pub fn check(artifact: &str, manifest: &str, document: Option<&str>) -> Result<Report> {
    let extracted = extract(artifact)?;
    let reference = Reference::from_json(manifest)?;
    let classes = reference.font_classes();
    let pairs: Vec<(&str, &str)> = reference
        .glyphs
        .iter()
        .filter_map(|x| Some((x.name.as_deref().unwrap_or(""), x.font_class.as_deref()?)))
        .collect();

    let missing_unicode = reference
        .glyphs
        .iter()
        .filter(|x| x.unicode.as_deref().map_or(true, str::is_empty))
        .count();
    if missing_unicode > 0 {
        log::warn!("{} manifest glyphs have no unicode value", missing_unicode);
    }

    let mut sections = vec![
        check_classification(&extracted, &pairs),
        check_sorting(&extracted, &pairs),
        check_integrity(&extracted, &classes),
        check_functions(artifact),
        check_pairs(&extracted),
        check_samples(&extracted),
    ];

    if let Some(document) = document {
        sections.push(check_document(&extracted, document));
    }

    Ok(Report { sections })
}

/// Reads the files named by `ctx` and runs every check.
///
/// # Errors
///
/// Returns an error if the artifact or the manifest is missing or unreadable, or if the artifact has no map literal.
pub fn run(ctx: &Context) -> Result<Report> {
    log::info!("read artifact {} ...", ctx.artifact_path.display());
    let artifact = read_input(&ctx.artifact_path)?;

    log::info!("read manifest {} ...", ctx.manifest_path.display());
    let manifest = read_input(&ctx.manifest_path)?;

    let document = match read_input(&ctx.document_path) {
        Ok(document) => Some(document),
        Err(Error::MissingInput { .. }) => {
            log::debug!("no mapping document at {}", ctx.document_path.display());
            None
        }
        Err(e) => return Err(e),
    };

    check(&artifact, &manifest, document.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::data::Source;
    use crate::emit::{self, document::Document, Provenance};
    use crate::map::build;

    const MANIFEST: &str = r#"{
        "name": "kit",
        "glyphs": [
            { "name": "home-fill", "font_class": "home-fill", "unicode": "e600" },
            { "name": "Home", "font_class": "home-line", "unicode": "e601" },
            { "name": "settings-line", "font_class": "settings-line", "unicode": "e602" },
            { "name": "close", "font_class": "close", "unicode": "e603" }
        ]
    }"#;

    fn generate(manifest: &str) -> (String, String) {
        let ctx = Context::default();
        let source = Source::from_json(manifest).unwrap();
        let mapping = build(&classify(&source.glyphs));
        let provenance = Provenance::new(&source, &ctx, &mapping, "2026-10-19 12:00:00");
        let artifact = emit::compile(&mapping.names, &provenance);
        let document = Document::new(&mapping.names, &provenance).to_json();
        (artifact, document)
    }

    fn outcomes(section: &Section) -> Vec<Outcome> {
        section.lines.iter().map(|x| x.outcome).collect()
    }

    #[test]
    fn test_extract() {
        let (artifact, _) = generate(MANIFEST);
        let extracted = extract(&artifact).unwrap();

        let names: Vec<&str> = extracted.entries.iter().map(|(x, _)| x.as_str()).collect();
        assert_eq!(names, ["home-fill", "home-line", "Home", "settings-line", "close"]);
        assert_eq!(extracted.entries[0].1, "\\ue600");
        assert_eq!(extracted.header_counts, Some([1, 2, 1]));
    }

    #[test]
    fn test_extract_escaped_names() {
        let artifact = "export const ICON_UNICODE_MAP: UTSJSONObject = {\n  'it\\'s': '\\ue600',\n  'a\\\\b': '\\u{1f600}'\n}\n";
        let extracted = extract(artifact).unwrap();

        assert_eq!(
            extracted.entries,
            [
                ("it's".to_string(), "\\ue600".to_string()),
                ("a\\b".to_string(), "\\u{1f600}".to_string()),
            ]
        );
        assert_eq!(extracted.header_counts, None);
    }

    #[test]
    fn test_extract_missing_literal() {
        assert!(matches!(
            extract("export function hasIcon() {}"),
            Err(Error::MissingMapLiteral)
        ));
    }

    #[test]
    fn test_codepoint_digits() {
        assert_eq!(codepoint_digits("\\ue600"), Some("e600"));
        assert_eq!(codepoint_digits("\\u{1f600}"), Some("1f600"));
        assert_eq!(codepoint_digits("\\u{0000e600}"), Some("0000e600"));
        assert_eq!(codepoint_digits("\\ue60"), None);
        assert_eq!(codepoint_digits(""), None);
    }

    #[test]
    fn test_generated_artifact_passes() {
        let (artifact, document) = generate(MANIFEST);
        let report = check(&artifact, MANIFEST, Some(&document)).unwrap();

        assert_eq!(report.failure_count(), 0, "{}", report);
        assert_eq!(report.sections.len(), 7);
        assert!(report.section("Document").is_some());
    }

    #[test]
    fn test_misordered_artifact_fails() {
        let (artifact, _) = generate(MANIFEST);
        let swapped = artifact
            .replace("  'home-fill': '\\ue600',\n", "")
            .replace("  'close': '\\ue603'\n}", "  'close': '\\ue603',\n  'home-fill': '\\ue600'\n}");
        let report = check(&swapped, MANIFEST, None).unwrap();

        let classification = report.section("Classification").unwrap();
        assert!(classification.failures().any(|x| x.text.contains("home-fill")));
        assert_eq!(report.section("Sorting").unwrap().failures().count(), 1);
        assert_eq!(report.section("Integrity").unwrap().failures().count(), 0);
    }

    #[test]
    fn test_missing_identifier_fails() {
        let (artifact, document) = generate(MANIFEST);
        let truncated = artifact.replace("  'settings-line': '\\ue602',\n", "");
        let report = check(&truncated, MANIFEST, Some(&document)).unwrap();

        let integrity = report.section("Integrity").unwrap();
        assert!(integrity.failures().any(|x| x.text.contains("settings-line")));
        assert_eq!(report.section("Document").unwrap().failures().count(), 1);
    }

    #[test]
    fn test_missing_function_fails() {
        let (artifact, _) = generate(MANIFEST);
        let stripped = artifact.replace("export function searchIcons(", "function searchIcons(");
        let functions = check_functions(&stripped);

        let failures: Vec<&str> = functions.failures().map(|x| x.text.as_str()).collect();
        assert_eq!(failures, ["searchIcons is missing"]);
    }

    #[test]
    fn test_pairs_section() {
        let (artifact, _) = generate(MANIFEST);
        let pairs = check_pairs(&extract(&artifact).unwrap());

        assert_eq!(outcomes(&pairs), [Outcome::Warn, Outcome::Info, Outcome::Info]);
        assert_eq!(pairs.lines[0].text, "line only: 1 (settings)");
        assert_eq!(pairs.lines[1].text, "paired: 1 (50.0%)");
    }

    #[test]
    fn test_samples_section() {
        let (artifact, _) = generate(MANIFEST);
        let samples = check_samples(&extract(&artifact).unwrap());

        assert_eq!(samples.lines[0].text, "fill: home-fill");
        assert_eq!(samples.lines[1].text, "line: home-line, settings-line");
        assert_eq!(samples.lines[2].text, "home: fill and line");
        assert_eq!(samples.lines.len(), 3);
    }

    #[test]
    fn test_check_requires_glyphs() {
        let (artifact, _) = generate(MANIFEST);
        assert!(matches!(
            check(&artifact, r#"{ "name": "kit" }"#, None),
            Err(Error::MissingGlyphs)
        ));
    }

    #[test]
    fn test_run_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(dir.path());
        assert!(matches!(run(&ctx), Err(Error::MissingInput { .. })));
    }

    #[test]
    fn test_run_after_generate() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(dir.path());
        std::fs::create_dir_all(ctx.manifest_path.parent().unwrap()).unwrap();
        std::fs::write(&ctx.manifest_path, MANIFEST).unwrap();

        emit::generate(&ctx, "2026-10-19 12:00:00").unwrap();
        let report = run(&ctx).unwrap();
        assert_eq!(report.failure_count(), 0, "{}", report);
        assert!(report.section("Document").is_some());

        std::fs::remove_file(&ctx.document_path).unwrap();
        let report = run(&ctx).unwrap();
        assert_eq!(report.failure_count(), 0, "{}", report);
        assert!(report.section("Document").is_none());
    }

    #[test]
    fn test_alias_of_later_identifier_passes() {
        let manifest = r#"{
            "glyphs": [
                { "name": "close", "font_class": "a-fill", "unicode": "e600" },
                { "name": "", "font_class": "b-line", "unicode": "e601" },
                { "name": "", "font_class": "close", "unicode": "e602" }
            ]
        }"#;
        let (artifact, document) = generate(manifest);
        let names: Vec<String> = extract(&artifact)
            .unwrap()
            .entries
            .into_iter()
            .map(|(x, _)| x)
            .collect();
        assert_eq!(names, ["a-fill", "close", "b-line"]);

        let report = check(&artifact, manifest, Some(&document)).unwrap();
        assert_eq!(report.failure_count(), 0, "{}", report);
    }

    #[test]
    fn test_alias_of_later_line_identifier_passes() {
        let manifest = r#"{
            "glyphs": [
                { "name": "zz-line", "font_class": "a-fill", "unicode": "e600" },
                { "name": "", "font_class": "b-line", "unicode": "e601" },
                { "name": "", "font_class": "zz-line", "unicode": "e602" }
            ]
        }"#;
        let (artifact, document) = generate(manifest);

        let report = check(&artifact, manifest, Some(&document)).unwrap();
        assert_eq!(report.failure_count(), 0, "{}", report);
    }

    #[test]
    fn test_padded_codepoint_passes() {
        let manifest = r#"{
            "glyphs": [
                { "name": "x", "font_class": "x", "unicode": "0000e600" },
                { "name": "y-fill", "font_class": "y-fill", "unicode": "1f600" }
            ]
        }"#;
        let (artifact, document) = generate(manifest);
        assert!(artifact.contains("  'x': '\\u{0000e600}'\n"));

        let report = check(&artifact, manifest, Some(&document)).unwrap();
        assert_eq!(report.failure_count(), 0, "{}", report);
    }
}

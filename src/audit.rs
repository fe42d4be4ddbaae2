//! # Pairing audit
//!
//! Checks which icons come in both a `-fill` and a `-line` variant.
//!
//! The audit only looks at names.
//! Names are classified again by their suffix, independent of any category recorded during generation, and reduced to their [base name](crate::classify::base_name).
//!
//! ```
//! # use iconmap::audit::audit;
//! let report = audit(&["home-fill", "home-line", "settings-line"]);
//! assert_eq!(report.paired, ["home"]);
//! assert_eq!(report.only_line, ["settings"]);
//! assert!(report.only_fill.is_empty());
//! assert_eq!(report.stats.pair_rate, 50.0);
//! ```

use crate::classify::{base_name, Category, FILL_SUFFIX, LINE_SUFFIX};
use crate::ctx::Context;
use crate::emit::document::Document;
use crate::error::{write_output, Result};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// The number of paired base names listed as examples in the console report.
const CONSOLE_PAIRED_EXAMPLES: usize = 10;

/// The pairing state of a set of icon names.
///
/// All lists are sorted ascending.
#[derive(Debug, PartialEq, Clone)]
pub struct PairingReport {
    /// Base names with both a fill and a line variant.
    pub paired: Vec<String>,
    /// Base names with only a fill variant.
    pub only_fill: Vec<String>,
    /// Base names with only a line variant.
    pub only_line: Vec<String>,
    /// Summary counts.
    pub stats: PairingStats,
}

/// The summary counts of a [`PairingReport`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PairingStats {
    /// The number of fill names.
    pub fill_count: usize,
    /// The number of line names.
    pub line_count: usize,
    /// The number of distinct base names of fill and line names.
    pub base_count: usize,
    /// The number of paired base names.
    pub paired_count: usize,
    /// The percentage of paired base names; `0` if there are no base names.
    pub pair_rate: f64,
}

/// Audits the pairing of icon names.
///
/// Names that are neither fill nor line are ignored.
pub fn audit<I>(names: I) -> PairingReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut fill_count = 0;
    let mut line_count = 0;
    let mut fill_bases = BTreeSet::new();
    let mut line_bases = BTreeSet::new();

    for name in names {
        let name = name.as_ref();

        match Category::of(name) {
            Category::Fill => {
                fill_count += 1;
                fill_bases.insert(base_name(name).to_string());
            }
            Category::Line => {
                line_count += 1;
                line_bases.insert(base_name(name).to_string());
            }
            Category::Other => {}
        }
    }

    let paired: Vec<String> = fill_bases.intersection(&line_bases).cloned().collect();
    let only_fill: Vec<String> = fill_bases.difference(&line_bases).cloned().collect();
    let only_line: Vec<String> = line_bases.difference(&fill_bases).cloned().collect();

    let base_count = paired.len() + only_fill.len() + only_line.len();
    let pair_rate = if base_count == 0 {
        0.0
    } else {
        100.0 * paired.len() as f64 / base_count as f64
    };

    log::debug!(
        "audited {} fill and {} line names: {} paired of {} base names",
        fill_count,
        line_count,
        paired.len(),
        base_count
    );

    PairingReport {
        stats: PairingStats {
            fill_count,
            line_count,
            base_count,
            paired_count: paired.len(),
            pair_rate,
        },
        paired,
        only_fill,
        only_line,
    }
}

impl PairingReport {
    /// Whether every base name is paired.
    pub fn is_complete(&self) -> bool {
        self.only_fill.is_empty() && self.only_line.is_empty()
    }

    /// The pair rate with one decimal, e.g. `50.0%`.
    pub fn pair_rate_text(&self) -> String {
        format!("{:.1}%", self.stats.pair_rate)
    }

    /// Returns the human report printed to the console.
    pub fn console(&self) -> Console<'_> {
        Console(self)
    }

    /// Returns the markdown report.
    ///
    /// Each list section is present even when empty.
    pub fn markdown(&self) -> Markdown<'_> {
        Markdown(self)
    }

    /// Writes the markdown report to `path`, creating missing parent directories.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::info!("write pairing report {} ...", path.display());
        write_output(path, &self.markdown().to_string())
    }
}

/// The console rendering of a [`PairingReport`].
#[derive(Debug, Clone, Copy)]
pub struct Console<'a>(&'a PairingReport);

impl fmt::Display for Console<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let stats = &report.stats;

        writeln!(f, "Statistics:")?;
        writeln!(f, "   Fill icons: {}", stats.fill_count)?;
        writeln!(f, "   Line icons: {}", stats.line_count)?;
        writeln!(f, "   Unique base names: {}", stats.base_count)?;
        writeln!(f)?;

        if !report.only_fill.is_empty() {
            writeln!(f, "Fill only ({}):", report.only_fill.len())?;
            for base in &report.only_fill {
                writeln!(f, "   {}{}", base, FILL_SUFFIX)?;
            }
            writeln!(f)?;
        }

        if !report.only_line.is_empty() {
            writeln!(f, "Line only ({}):", report.only_line.len())?;
            for base in &report.only_line {
                writeln!(f, "   {}{}", base, LINE_SUFFIX)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Paired ({}):", report.paired.len())?;
        if !report.paired.is_empty() {
            let more = if report.paired.len() > CONSOLE_PAIRED_EXAMPLES {
                "..."
            } else {
                ""
            };
            writeln!(
                f,
                "   Examples: {}{}",
                report.paired.iter().take(CONSOLE_PAIRED_EXAMPLES).join(", "),
                more
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Pairing analysis:")?;
        writeln!(f, "   Paired: {} base names", stats.paired_count)?;
        writeln!(f, "   Fill only: {} base names", report.only_fill.len())?;
        writeln!(f, "   Line only: {} base names", report.only_line.len())?;
        writeln!(f, "   Pair rate: {}", report.pair_rate_text())
    }
}

/// The markdown rendering of a [`PairingReport`].
#[derive(Debug, Clone, Copy)]
pub struct Markdown<'a>(&'a PairingReport);

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let stats = &report.stats;

        writeln!(f, "# Icon Pairing Report\n")?;
        writeln!(f, "## Overview\n")?;
        writeln!(f, "- Fill icons: {}", stats.fill_count)?;
        writeln!(f, "- Line icons: {}", stats.line_count)?;
        writeln!(f, "- Unique base names: {}", stats.base_count)?;
        writeln!(f, "- Paired: {}", stats.paired_count)?;
        writeln!(f, "- Pair rate: {}\n", report.pair_rate_text())?;

        let only_fill = report.only_fill.iter().map(|x| format!("{}{}", x, FILL_SUFFIX));
        markdown_section(f, "Fill Only", only_fill)?;

        let only_line = report.only_line.iter().map(|x| format!("{}{}", x, LINE_SUFFIX));
        markdown_section(f, "Line Only", only_line)?;

        let paired = report
            .paired
            .iter()
            .map(|x| format!("{0} ({0}{1} + {0}{2})", x, FILL_SUFFIX, LINE_SUFFIX));
        markdown_section(f, "Paired", paired)
    }
}

/// Writes a titled bullet list of a markdown report.
fn markdown_section<I>(f: &mut fmt::Formatter<'_>, title: &str, items: I) -> fmt::Result
where
    I: ExactSizeIterator<Item = String>,
{
    writeln!(f, "## {} ({})\n", title, items.len())?;

    if items.len() == 0 {
        writeln!(f, "_None._")?;
    }
    for item in items {
        writeln!(f, "- {}", item)?;
    }

    writeln!(f)
}

/// Audits the structured document of `ctx` and writes the markdown report.
///
/// # Errors
///
/// Returns [`Error::MissingInput`](crate::Error::MissingInput) if the document has not been generated yet, or an error if it is malformed or the report can not be written.
pub fn run(ctx: &Context) -> Result<PairingReport> {
    let names = Document::read(&ctx.document_path)?.names()?;
    let report = audit(names.names());
    report.write(&ctx.report_path)?;
    Ok(report)
}

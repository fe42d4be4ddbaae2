//! The context with which the icon tools run.

use std::path::{Path, PathBuf};

/// The manifest location relative to the project root.
const MANIFEST_PATH: &str = "uni_modules/kit-ui/components/k-icon/fonts/k-icon.json";
/// The generated artifact location relative to the project root.
const ARTIFACT_PATH: &str = "uni_modules/kit-ui/components/k-icon/fonts/k-icon.uts";
/// The structured mapping document location relative to the project root.
const DOCUMENT_PATH: &str = "uni_modules/kit-ui/components/k-icon/fonts/k-icon.map.json";
/// The pairing report location relative to the project root.
const REPORT_PATH: &str = "scripts/icon-pair-report.md";

/// A context defines the files the tools read and write, and the fallbacks used for absent manifest metadata.
///
/// The tools take no arguments; they always run with [`Context::default`], which resolves every path against the current working directory.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Context {
    /// The icon font manifest (`iconfont.json` layout).
    pub manifest_path: PathBuf,
    /// The generated source artifact holding `ICON_UNICODE_MAP` and its accessors.
    pub artifact_path: PathBuf,
    /// The structured mapping document written next to the artifact.
    pub document_path: PathBuf,
    /// The markdown pairing report.
    pub report_path: PathBuf,
    /// Used in the provenance header when the manifest has no `name`.
    pub default_name: String,
    /// Used in the provenance header when the manifest has no `description`.
    pub default_description: String,
    /// Used when the manifest has no `font_family`.
    pub default_font_family: String,
    /// Used when the manifest has no `css_prefix_text`.
    pub default_css_prefix: String,
    /// The font file named in the provenance header.
    pub font_file: String,
}

impl Context {
    /// Creates a context whose paths are resolved against `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();

        Context {
            manifest_path: root.join(MANIFEST_PATH),
            artifact_path: root.join(ARTIFACT_PATH),
            document_path: root.join(DOCUMENT_PATH),
            report_path: root.join(REPORT_PATH),
            default_name: "k-icon".to_string(),
            default_description: "Icon unicode mapping generated from iconfont.json".to_string(),
            default_font_family: "iconfont".to_string(),
            default_css_prefix: "kit-".to_string(),
            font_file: "iconfont.ttf".to_string(),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new("")
    }
}

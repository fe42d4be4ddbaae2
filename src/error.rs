//! Errors that abort a tool run.
//!
//! Data-quality findings (unpaired icons, alias collisions, failed harness assertions) are not errors.
//! They are reported by the tools and never change the exit status.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A fatal error of the icon pipeline.
#[derive(Debug)]
pub enum Error {
    /// An input file does not exist.
    MissingInput {
        /// The path of the missing file.
        path: PathBuf,
    },
    /// An input file exists but can not be read.
    Read {
        /// The path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The manifest is not valid JSON or does not have the expected structure.
    Manifest(serde_json::Error),
    /// The manifest has no `glyphs` array.
    MissingGlyphs,
    /// A glyph has an empty `font_class`.
    EmptyIdentifier {
        /// The position of the glyph in the `glyphs` array.
        index: usize,
    },
    /// A glyph's `unicode` is not the hexadecimal value of a Unicode scalar.
    InvalidCodepoint {
        /// The `font_class` of the glyph.
        identifier: String,
        /// The rejected `unicode` text.
        codepoint: String,
    },
    /// The generated artifact contains no `ICON_UNICODE_MAP` literal.
    MissingMapLiteral,
    /// The structured mapping document can not be parsed.
    Document(serde_json::Error),
    /// An output file can not be written.
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path } => write!(f, "input file does not exist: {}", path.display()),
            Self::Read { path, .. } => write!(f, "can not read {}", path.display()),
            Self::Manifest(_) => write!(f, "the manifest is not a valid icon font manifest"),
            Self::MissingGlyphs => write!(f, "the manifest has no `glyphs` array"),
            Self::EmptyIdentifier { index } => {
                write!(f, "glyph #{} has an empty `font_class`", index)
            }
            Self::InvalidCodepoint {
                identifier,
                codepoint,
            } => write!(
                f,
                "glyph '{}' has an invalid unicode value '{}'",
                identifier, codepoint
            ),
            Self::MissingMapLiteral => write!(f, "the artifact contains no ICON_UNICODE_MAP"),
            Self::Document(_) => write!(f, "the mapping document is malformed"),
            Self::Write { path, .. } => write!(f, "can not write {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Manifest(source) | Self::Document(source) => Some(source),
            _ => None,
        }
    }
}

/// A result whose error is an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Reads a UTF-8 file, mapping a missing file to [`Error::MissingInput`].
pub(crate) fn read_input(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Writes `contents` to `path`, creating missing parent directories.
pub(crate) fn write_output(path: &std::path::Path, contents: &str) -> Result<()> {
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|x| !x.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(wrap)?;
    }

    std::fs::write(path, contents).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match read_input(&path) {
            Err(Error::MissingInput { path: missing }) => assert_eq!(missing, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts").join("nested").join("k-icon.uts");

        write_output(&path, "content").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let result = write_output(&blocker.join("k-icon.uts"), "content");

        assert!(matches!(result, Err(Error::Write { .. })));
    }
}

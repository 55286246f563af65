//! Error types for respec-core.

use std::path::{Path, PathBuf};

use crate::validate::Violation;

/// Errors that can occur while loading, converting, or configuring records.
///
/// Schema problems in a successfully parsed record are *not* errors; they
/// are reported as [`Violation`]s by [`crate::validate`]. An `Error` means
/// the input could not be turned into a record at all.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Syntax error in a JavaScript or JSON configuration literal
    #[error("Parse error at {line}:{column}: {message}")]
    Parse {
        /// 1-based line of the offending token
        line: usize,
        /// 1-based column of the offending token
        column: usize,
        /// What went wrong
        message: String,
    },

    /// The same key appears twice in one object
    #[error("Duplicate key '{key}' in {path} at {line}:{column}")]
    DuplicateKey {
        /// The repeated key
        key: String,
        /// Dotted path of the object holding the key (`$` for the root)
        path: String,
        /// 1-based line of the second occurrence
        line: usize,
        /// 1-based column of the second occurrence
        column: usize,
    },

    /// The document parsed but does not have the record's structure
    #[error(
        "Record has {} structural problem(s), first: {}",
        .violations.len(),
        first_violation(.violations)
    )]
    Shape {
        /// Every structural problem found
        violations: Vec<Violation>,
    },

    /// I/O error, optionally tied to a file
    #[error("I/O error{}: {source}", path_suffix(.path))]
    Io {
        /// Underlying error
        #[source]
        source: std::io::Error,
        /// File involved, if known
        path: Option<PathBuf>,
    },

    /// JSON conversion error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Format could not be determined from the path or content
    #[error("Cannot determine record format for '{0}'")]
    UnknownFormat(String),

    /// Settings or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` alias for respec-core operations.
pub type Result<T> = std::result::Result<T, Error>;

fn first_violation(violations: &[Violation]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates a parse error at the given position.
    pub fn parse<S: Into<String>>(line: usize, column: usize, message: S) -> Self {
        Error::Parse {
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Returns whether this error came from a duplicate key in the input.
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            Error::DuplicateKey { .. } => true,
            Error::TomlParse(e) => e.message().contains("duplicate key"),
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source, path: None }
    }
}

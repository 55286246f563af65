#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! respec Core Library
//!
//! Typed configuration records for the spec-document generator, with a
//! loader for the formats maintainers write them in and an advisory
//! validator.

pub mod error;
pub mod literal;
pub mod loader;
pub mod settings;
pub mod shape;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};
pub use loader::{Format, Inspection, LoadedRecord, inspect, load_path, load_str, to_string};
pub use settings::ValidatorSettings;
pub use shape::check_shape;
pub use types::{BibliographicEntry, ConfigurationRecord, Editor, GithubInfo, SpecStatus};
pub use validate::{ValidationReport, Validator, Violation, ViolationKind, validate};

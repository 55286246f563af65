//! # respec-cli
//!
//! Command-line tool for spec-generator configuration records:
//! - validate records against the schema
//! - convert between JavaScript, JSON, and TOML
//! - read single values by dotted key
//! - manage validator settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod handlers;

pub use cli::{Cli, Command, ReportFormat, SettingsAction};

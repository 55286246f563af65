//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use respec_core::Format;
use std::path::PathBuf;

/// Validate and convert spec-generator configuration records
#[derive(Parser, Debug)]
#[command(name = "respec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Validator settings file [default: $RESPEC_SETTINGS, then the config directory]
    #[arg(long, global = true)]
    pub settings: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check records against the schema
    Validate {
        /// Record files (.js, .json, or .toml)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Rewrite a record in another format
    Convert {
        /// Record file to read
        file: PathBuf,

        /// Target format: js, json, or toml
        #[arg(long)]
        to: Format,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variable name for JavaScript output
        #[arg(long = "var")]
        binding: Option<String>,
    },

    /// Print one value by dotted key, e.g. `editors.0.name`
    Get {
        /// Record file to read
        file: PathBuf,

        /// Dotted key; array elements are addressed by index
        key: String,
    },

    /// Manage validator settings
    Settings {
        /// Settings operation
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Subcommands of `respec settings`.
#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show where the settings file is looked up
    Path,

    /// Write a settings file with default values
    Init {
        /// Path to create (defaults to the resolved location)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the settings in effect
    Show,
}

/// How `validate` prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per violation
    Text,
    /// A JSON array, one object per file
    Json,
}

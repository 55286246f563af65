//! Handler functions for CLI commands.
//!
//! Each handler writes its normal output to the `out` writer it is given,
//! so tests can capture it. Diagnostics go through `tracing`.

use respec_core::loader::{self, save_path};
use respec_core::{Error, Format, Result, Validator, ValidatorSettings, Violation};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Command, ReportFormat, SettingsAction};

// ============================================================================
// Command dispatch
// ============================================================================

/// Runs a parsed command. Returns `false` when validation found problems.
pub fn run(command: Command, settings_path: Option<&str>, out: &mut dyn Write) -> Result<bool> {
    match command {
        Command::Validate { files, format } => {
            let settings = ValidatorSettings::load(settings_path)?;
            cmd_validate(&files, format, &Validator::new(settings), out)
        }
        Command::Convert {
            file,
            to,
            output,
            binding,
        } => cmd_convert(&file, to, output.as_deref(), binding.as_deref(), out).map(|_| true),
        Command::Get { file, key } => cmd_get(&file, &key, out).map(|_| true),
        Command::Settings { action } => match action {
            SettingsAction::Path => cmd_settings_path(settings_path, out).map(|_| true),
            SettingsAction::Init { file, force } => {
                let target = file.as_deref().or(settings_path);
                cmd_settings_init(target, force, out).map(|_| true)
            }
            SettingsAction::Show => cmd_settings_show(settings_path, out).map(|_| true),
        },
    }
}

// ============================================================================
// validate
// ============================================================================

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    violations: Vec<Violation>,
}

fn check_file(path: &Path, validator: &Validator) -> FileReport {
    let file = path.display().to_string();
    let inspected = std::fs::read_to_string(path)
        .map_err(|e| Error::io_with_path(e, path))
        .and_then(|content| {
            let format = Format::from_path(path).unwrap_or_else(|| Format::sniff(&content));
            loader::inspect(&content, format, validator)
        });

    match inspected {
        Ok(inspection) => FileReport {
            file,
            valid: inspection.report.is_valid(),
            error: None,
            violations: inspection.report.into_violations(),
        },
        Err(e) => {
            tracing::warn!(file = %file, error = %e, "could not load record");
            FileReport {
                file,
                valid: false,
                error: Some(e.to_string()),
                violations: Vec::new(),
            }
        }
    }
}

/// Validates every file and prints a report. Returns whether all passed.
pub fn cmd_validate(
    files: &[PathBuf],
    format: ReportFormat,
    validator: &Validator,
    out: &mut dyn Write,
) -> Result<bool> {
    let reports: Vec<FileReport> = files.iter().map(|f| check_file(f, validator)).collect();
    let all_valid = reports.iter().all(|r| r.valid);

    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
        }
        ReportFormat::Text => {
            for report in &reports {
                if let Some(error) = &report.error {
                    writeln!(out, "{}: error: {error}", report.file)?;
                } else if report.valid {
                    writeln!(out, "{}: ok", report.file)?;
                } else {
                    writeln!(
                        out,
                        "{}: {} violation(s)",
                        report.file,
                        report.violations.len()
                    )?;
                    for violation in &report.violations {
                        writeln!(out, "  {violation}")?;
                    }
                }
            }
        }
    }

    tracing::info!(files = reports.len(), all_valid, "validation finished");
    Ok(all_valid)
}

// ============================================================================
// convert
// ============================================================================

/// Rewrites a record in another format, to a file or to `out`.
pub fn cmd_convert(
    file: &Path,
    to: Format,
    output: Option<&Path>,
    binding: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let loaded = loader::load_path(file)?;
    let binding = binding.or(loaded.binding.as_deref());
    match output {
        Some(path) => {
            save_path(&loaded.record, path, to, binding)?;
            tracing::info!(
                from = %file.display(),
                to = %path.display(),
                format = %to,
                "converted record"
            );
        }
        None => {
            let text = loader::to_string(&loaded.record, to, binding)?;
            out.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

// ============================================================================
// get
// ============================================================================

/// Prints one value of a record by dotted key.
pub fn cmd_get(file: &Path, key: &str, out: &mut dyn Write) -> Result<()> {
    let loaded = loader::load_path(file)?;
    let value = serde_json::to_value(&loaded.record)?;
    match get_nested_value(&value, key) {
        Some(val) => {
            writeln!(out, "{}", format_value(val))?;
            Ok(())
        }
        None => Err(Error::config(format!("Key '{key}' not found in record"))),
    }
}

/// Navigates a dotted key path; numeric segments index into arrays.
pub fn get_nested_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in key.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Formats a value for display: strings bare, everything else as JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// ============================================================================
// settings
// ============================================================================

/// Shows the resolved settings path.
pub fn cmd_settings_path(explicit: Option<&str>, out: &mut dyn Write) -> Result<()> {
    match ValidatorSettings::resolve_path(explicit) {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            if !path.exists() {
                tracing::info!(
                    "settings file does not exist, run `respec settings init` to create it"
                );
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Writes a settings file with default values.
pub fn cmd_settings_init(file: Option<&str>, force: bool, out: &mut dyn Write) -> Result<()> {
    let path = ValidatorSettings::resolve_path(file)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Settings file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let text = ValidatorSettings::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Settings file created at {}", path.display())?;
    Ok(())
}

/// Prints the settings in effect as TOML.
pub fn cmd_settings_show(explicit: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let settings = ValidatorSettings::load(explicit)?;
    out.write_all(settings.to_toml_string()?.as_bytes())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

//! Loading and saving records in JavaScript, JSON, and TOML.
//!
//! Every format goes through the same pipeline:
//!
//! 1. parse to an untyped [`serde_json::Value`], rejecting duplicate keys
//! 2. [`check_shape`] the value
//! 3. deserialize into a [`ConfigurationRecord`]
//!
//! JavaScript and JSON are both read by the [`literal`] reader; TOML by the
//! `toml` crate, which rejects duplicate keys on its own.
//!
//! A member set to `null` reads the same as an absent one and is dropped
//! before step 3, since TOML has no way to write it back.

use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::literal::{self, DEFAULT_BINDING};
use crate::shape::check_shape;
use crate::types::ConfigurationRecord;
use crate::validate::{ValidationReport, Validator};

/// On-disk representation of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `var respecConfig = { ... };`
    Js,
    /// Plain JSON object
    Json,
    /// TOML document
    Toml,
}

impl Format {
    /// All formats, in the order they are tried when sniffing.
    pub const ALL: [Format; 3] = [Format::Js, Format::Json, Format::Toml];

    /// Detects the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "mjs" | "cjs" => Some(Format::Js),
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }

    /// Guesses the format from content.
    pub fn sniff(content: &str) -> Format {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('{') {
            Format::Json
        } else if ["var ", "let ", "const ", "export ", "//", "/*"]
            .iter()
            .any(|p| trimmed.starts_with(p))
        {
            Format::Js
        } else {
            Format::Toml
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Js => "js",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Format::Js),
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// A record together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedRecord {
    /// The typed record
    pub record: ConfigurationRecord,
    /// Format it was read from
    pub format: Format,
    /// Variable name in a JavaScript source, if any
    pub binding: Option<String>,
}

/// Result of [`inspect`]: the record if it could be built, and every
/// problem found on the way.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// `None` when the shape check failed
    pub loaded: Option<LoadedRecord>,
    /// Shape violations, or validation violations when the shape was clean
    pub report: ValidationReport,
}

/// Parses text to an untyped value, returning any JavaScript binding name.
pub fn parse_untyped(content: &str, format: Format) -> Result<(Value, Option<String>)> {
    match format {
        Format::Js | Format::Json => {
            let doc = literal::parse(content)?;
            Ok((doc.value, doc.binding))
        }
        Format::Toml => Ok((toml::from_str::<Value>(content)?, None)),
    }
}

/// Loads a record from text.
///
/// Structural problems come back as [`Error::Shape`] carrying every
/// offending path.
pub fn load_str(content: &str, format: Format) -> Result<LoadedRecord> {
    let (mut value, binding) = parse_untyped(content, format)?;
    let violations = check_shape(&value);
    if !violations.is_empty() {
        return Err(Error::Shape { violations });
    }
    strip_null_members(&mut value);
    let record: ConfigurationRecord = serde_json::from_value(value)?;
    tracing::debug!(%format, "loaded configuration record");
    Ok(LoadedRecord {
        record,
        format,
        binding,
    })
}

/// Loads a record from a file, detecting the format from its extension or,
/// failing that, its content.
pub fn load_path(path: &Path) -> Result<LoadedRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    let format = Format::from_path(path).unwrap_or_else(|| Format::sniff(&content));
    tracing::debug!(path = %path.display(), %format, "reading configuration record");
    load_str(&content, format)
}

/// Loads and validates in one step, folding shape problems into the report.
///
/// Only syntax errors, duplicate keys, and I/O failures are returned as
/// `Err`; everything else is a violation.
pub fn inspect(content: &str, format: Format, validator: &Validator) -> Result<Inspection> {
    match load_str(content, format) {
        Ok(loaded) => {
            let report = validator.validate(&loaded.record);
            Ok(Inspection {
                loaded: Some(loaded),
                report,
            })
        }
        Err(Error::Shape { violations }) => Ok(Inspection {
            loaded: None,
            report: ValidationReport::from(violations),
        }),
        Err(e) => Err(e),
    }
}

/// Serializes a record. `binding` names the variable in JavaScript output
/// and is ignored for the other formats.
pub fn to_string(
    record: &ConfigurationRecord,
    format: Format,
    binding: Option<&str>,
) -> Result<String> {
    match format {
        Format::Js => {
            let value = serde_json::to_value(record)?;
            literal::to_js_string(&value, binding.unwrap_or(DEFAULT_BINDING))
        }
        Format::Json => {
            let mut text = serde_json::to_string_pretty(record)?;
            text.push('\n');
            Ok(text)
        }
        Format::Toml => {
            let mut value = serde_json::to_value(record)?;
            strip_null_members(&mut value);
            let value = toml::Value::try_from(value)?;
            Ok(toml::to_string_pretty(&value)?)
        }
    }
}

/// Drops object members whose value is `null`, at any depth. Array items
/// are left alone; [`Validator`] reports those.
fn strip_null_members(value: &mut Value) {
    match value {
        Value::Object(members) => {
            members.retain(|_, v| !v.is_null());
            members.values_mut().for_each(strip_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_null_members),
        _ => {}
    }
}

/// Writes a record to a file in the given format.
pub fn save_path(
    record: &ConfigurationRecord,
    path: &Path,
    format: Format,
    binding: Option<&str>,
) -> Result<()> {
    let text = to_string(record, format, binding)?;
    std::fs::write(path, text).map_err(|e| Error::io_with_path(e, path))?;
    tracing::debug!(path = %path.display(), %format, "wrote configuration record");
    Ok(())
}

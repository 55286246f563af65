//! Validator settings.
//!
//! Which statuses demand editors, whether unknown status codes or plain
//! `http` URLs are acceptable: these are assumptions about the generator,
//! not facts the record can tell us, so they live in a small TOML file.
//!
//! ```toml
//! publishable_statuses = ["ED", "WD", "CG-DRAFT"]
//! allow_unknown_status = false
//! require_https = true
//! lowercase_tokens = true
//! ```
//!
//! The file is looked up in this order:
//!
//! 1. an explicit path (the CLI's `--settings` flag)
//! 2. the `RESPEC_SETTINGS` environment variable
//! 3. `<platform config dir>/respec/settings.toml`
//!
//! A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::SpecStatus;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV_VAR: &str = "RESPEC_SETTINGS";

/// Directory name under the platform config directory.
pub const PROJECT_NAME: &str = "respec";

/// Rules the validator applies where the generator's behavior is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    /// Status codes that require at least one editor. `None` uses the
    /// built-in classification from [`SpecStatus::is_publishable`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable_statuses: Option<Vec<String>>,

    /// Accept status codes this crate does not know.
    pub allow_unknown_status: bool,

    /// Reject URLs that do not use https.
    pub require_https: bool,

    /// Require cross-reference tokens to be lowercase.
    pub lowercase_tokens: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            publishable_statuses: None,
            allow_unknown_status: false,
            require_https: false,
            lowercase_tokens: true,
        }
    }
}

impl ValidatorSettings {
    /// Returns whether `status` requires editors under these settings.
    pub fn is_publishable(&self, status: &SpecStatus) -> bool {
        match &self.publishable_statuses {
            Some(codes) => codes.iter().any(|c| c == status.as_str()),
            None => status.is_publishable(),
        }
    }

    /// Parses settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the settings as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads settings from the resolved location, falling back to defaults
    /// when no file exists there.
    ///
    /// Only a path passed in `explicit` must exist; a stale
    /// `RESPEC_SETTINGS` or an absent default file means defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_resolved(explicit.is_some(), Self::resolve_path(explicit))
    }

    fn load_resolved(explicit: bool, path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no config directory on this platform, using default settings");
            return Ok(Self::default());
        };
        if !path.exists() {
            if explicit {
                return Err(Error::config(format!(
                    "Settings file does not exist at {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "settings file absent, using defaults");
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Loads settings from a specific file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let settings = Self::from_toml_str(&content).map_err(|e| {
            Error::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded validator settings");
        Ok(settings)
    }

    /// Resolves where the settings file lives: `explicit`, then
    /// `RESPEC_SETTINGS`, then [`default_path`](Self::default_path).
    pub fn resolve_path(explicit: Option<&str>) -> Option<PathBuf> {
        let from_env = std::env::var(SETTINGS_ENV_VAR).ok();
        Self::resolve_with(explicit, from_env.as_deref())
    }

    fn resolve_with(explicit: Option<&str>, from_env: Option<&str>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(PathBuf::from(p));
        }
        if let Some(p) = from_env.filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(p));
        }
        Self::default_path()
    }

    /// The platform default settings path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("settings.toml"))
    }
}

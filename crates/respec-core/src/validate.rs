//! Schema validation for configuration records.
//!
//! Validation is advisory: it never fails, it returns every problem it
//! finds as a [`Violation`] so a maintainer can fix them all in one pass
//! before handing the record to the generator.
//!
//! ```
//! use respec_core::{ConfigurationRecord, SpecStatus, ViolationKind};
//!
//! let record = ConfigurationRecord::new().with_status(SpecStatus::CommunityGroupDraft);
//! let report = respec_core::validate(&record);
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.violations()[0].path, "editors");
//! assert_eq!(report.violations()[0].kind, ViolationKind::MissingField);
//! ```

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::settings::ValidatorSettings;
use crate::types::{BibliographicEntry, ConfigurationRecord, Editor, ExtraFields, GithubInfo};

/// Category of a schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required member is absent
    MissingField,
    /// A member has the wrong JSON type
    WrongType {
        /// Type the schema expects
        expected: &'static str,
    },
    /// A string or collection is present but empty
    EmptyValue,
    /// A URL is not an absolute URL with a host
    MalformedUrl,
    /// A URL does not use https while the settings require it
    InsecureUrl,
    /// An email address is not of the form `local@domain`
    MalformedEmail,
    /// A cross-reference token is not a plausible identifier
    InvalidToken,
    /// A cross-reference token is listed more than once
    DuplicateToken,
    /// Two bibliography keys collide
    DuplicateKey,
    /// The status code is not one the generator knows
    UnknownStatus,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingField => f.write_str("missing field"),
            ViolationKind::WrongType { expected } => write!(f, "wrong type (expected {expected})"),
            ViolationKind::EmptyValue => f.write_str("empty value"),
            ViolationKind::MalformedUrl => f.write_str("malformed URL"),
            ViolationKind::InsecureUrl => f.write_str("insecure URL"),
            ViolationKind::MalformedEmail => f.write_str("malformed email"),
            ViolationKind::InvalidToken => f.write_str("invalid token"),
            ViolationKind::DuplicateToken => f.write_str("duplicate token"),
            ViolationKind::DuplicateKey => f.write_str("duplicate key"),
            ViolationKind::UnknownStatus => f.write_str("unknown status"),
        }
    }
}

/// One schema problem, located by a path such as `editors[0].email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Location of the offending member
    pub path: String,
    /// What kind of problem it is
    pub kind: ViolationKind,
    /// Human-readable detail
    pub message: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new<P, M>(path: P, kind: ViolationKind, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// Returns whether this violation concerns `field` or something nested
    /// inside it.
    pub fn concerns(&self, field: &str) -> bool {
        match self.path.strip_prefix(field) {
            Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
            None => false,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.path, self.kind, self.message)
    }
}

/// Outcome of validating one record. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns whether no violations were found.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns whether the report is empty.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in the order they were found.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations concerning `field` or its children.
    pub fn concerning<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.concerns(field))
    }

    /// Takes ownership of the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn push<P: Into<String>, M: Into<String>>(&mut self, path: P, kind: ViolationKind, message: M) {
        self.violations.push(Violation::new(path, kind, message));
    }
}

impl From<Vec<Violation>> for ValidationReport {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Validates a record with the default rules.
pub fn validate(record: &ConfigurationRecord) -> ValidationReport {
    Validator::default().validate(record)
}

/// Record validator parameterized by [`ValidatorSettings`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    settings: ValidatorSettings,
}

impl Validator {
    /// Creates a validator with the given rules.
    pub fn new(settings: ValidatorSettings) -> Self {
        Self { settings }
    }

    /// The rules in effect.
    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Checks a record against the schema. Never mutates its input.
    pub fn validate(&self, record: &ConfigurationRecord) -> ValidationReport {
        let mut report = ValidationReport::default();

        if let Some(group) = &record.group {
            check_text(&mut report, "group", group);
        }
        self.check_status(&mut report, record);
        if let Some(url) = &record.latest_version {
            self.check_url(&mut report, "latestVersion", url);
        }
        if let Some(github) = &record.github {
            self.check_github(&mut report, github);
        }
        self.check_editors(&mut report, record);
        if let Some(xref) = &record.xref {
            self.check_xref(&mut report, xref);
        }
        if let Some(prefix) = &record.subject_prefix {
            check_text(&mut report, "subjectPrefix", prefix);
        }
        if let Some(biblio) = &record.local_biblio {
            self.check_biblio(&mut report, biblio);
        }
        check_extra(&mut report, "", &record.extra);

        tracing::debug!(violations = report.len(), "validated configuration record");
        report
    }

    fn check_status(&self, report: &mut ValidationReport, record: &ConfigurationRecord) {
        let Some(status) = &record.spec_status else {
            return;
        };
        if status.as_str().trim().is_empty() {
            report.push("specStatus", ViolationKind::EmptyValue, "status code is empty");
        } else if !status.is_known() && !self.settings.allow_unknown_status {
            report.push(
                "specStatus",
                ViolationKind::UnknownStatus,
                format!("'{status}' is not a known status code"),
            );
        }
    }

    fn check_github(&self, report: &mut ValidationReport, github: &GithubInfo) {
        if let Some(url) = &github.repo_url {
            self.check_url(report, "github.repoURL", url);
        }
        if let Some(branch) = &github.branch {
            if check_text(report, "github.branch", branch)
                && branch.chars().any(char::is_whitespace)
            {
                report.push(
                    "github.branch",
                    ViolationKind::InvalidToken,
                    format!("branch '{branch}' contains whitespace"),
                );
            }
        }
        check_extra(report, "github", &github.extra);
    }

    fn check_editors(&self, report: &mut ValidationReport, record: &ConfigurationRecord) {
        let publishable = record
            .spec_status
            .as_ref()
            .is_some_and(|s| self.settings.is_publishable(s));

        match &record.editors {
            None if publishable => report.push(
                "editors",
                ViolationKind::MissingField,
                "a publishable draft must credit at least one editor",
            ),
            None => {}
            Some(editors) if editors.is_empty() => report.push(
                "editors",
                ViolationKind::EmptyValue,
                "editor list is empty",
            ),
            Some(editors) => {
                for (i, editor) in editors.iter().enumerate() {
                    self.check_editor(report, &format!("editors[{i}]"), editor);
                }
            }
        }
    }

    fn check_editor(&self, report: &mut ValidationReport, path: &str, editor: &Editor) {
        check_text(report, format!("{path}.name"), &editor.name);
        if let Some(email) = &editor.email {
            let email_path = format!("{path}.email");
            if check_text(report, &email_path, email) && !is_plausible_email(email) {
                report.push(
                    email_path,
                    ViolationKind::MalformedEmail,
                    format!("'{email}' is not an email address"),
                );
            }
        }
        if let Some(company) = &editor.company {
            check_text(report, format!("{path}.company"), company);
        }
        if let Some(url) = &editor.company_url {
            self.check_url(report, &format!("{path}.companyURL"), url);
        }
        if let Some(url) = &editor.url {
            self.check_url(report, &format!("{path}.url"), url);
        }
        check_extra(report, path, &editor.extra);
    }

    fn check_xref(&self, report: &mut ValidationReport, xref: &[String]) {
        if xref.is_empty() {
            report.push("xref", ViolationKind::EmptyValue, "cross-reference list is empty");
            return;
        }
        let mut seen = HashSet::new();
        for (i, token) in xref.iter().enumerate() {
            let path = format!("xref[{i}]");
            if token.is_empty() {
                report.push(path, ViolationKind::EmptyValue, "cross-reference token is empty");
            } else if !is_plausible_token(token, self.settings.lowercase_tokens) {
                report.push(
                    path,
                    ViolationKind::InvalidToken,
                    format!("'{token}' is not a specification short name"),
                );
            } else if !seen.insert(token.as_str()) {
                report.push(
                    path,
                    ViolationKind::DuplicateToken,
                    format!("'{token}' is listed more than once"),
                );
            }
        }
    }

    fn check_biblio(
        &self,
        report: &mut ValidationReport,
        biblio: &BTreeMap<String, BibliographicEntry>,
    ) {
        if biblio.is_empty() {
            report.push(
                "localBiblio",
                ViolationKind::EmptyValue,
                "bibliography has no entries",
            );
            return;
        }

        // The generator resolves citations case-insensitively.
        let mut folded: BTreeMap<String, &str> = BTreeMap::new();
        for (key, entry) in biblio {
            let path = format!("localBiblio.{key}");
            if key.trim().is_empty() {
                report.push(&path, ViolationKind::EmptyValue, "bibliography key is empty");
            } else if let Some(first) = folded.insert(key.to_lowercase(), key) {
                report.push(
                    &path,
                    ViolationKind::DuplicateKey,
                    format!("key '{key}' collides with '{first}'"),
                );
            }
            self.check_biblio_entry(report, &path, entry);
        }
    }

    fn check_biblio_entry(
        &self,
        report: &mut ValidationReport,
        path: &str,
        entry: &BibliographicEntry,
    ) {
        match (&entry.title, &entry.alias_of) {
            (None, None) => report.push(
                format!("{path}.title"),
                ViolationKind::MissingField,
                "entry needs a title unless it is an alias",
            ),
            (Some(title), _) => {
                check_text(report, format!("{path}.title"), title);
            }
            (None, Some(_)) => {}
        }
        if let Some(alias) = &entry.alias_of {
            check_text(report, format!("{path}.aliasOf"), alias);
        }
        if let Some(href) = &entry.href {
            self.check_url(report, &format!("{path}.href"), href);
        }
        for (field, names) in [("editors", &entry.editors), ("authors", &entry.authors)] {
            let Some(names) = names else { continue };
            if names.is_empty() {
                report.push(
                    format!("{path}.{field}"),
                    ViolationKind::EmptyValue,
                    format!("{field} list is empty"),
                );
            }
            for (i, name) in names.iter().enumerate() {
                check_text(report, format!("{path}.{field}[{i}]"), name);
            }
        }
        for (field, value) in [
            ("publisher", &entry.publisher),
            ("date", &entry.date),
            ("status", &entry.status),
        ] {
            if let Some(value) = value {
                check_text(report, format!("{path}.{field}"), value);
            }
        }
        check_extra(report, path, &entry.extra);
    }

    fn check_url(&self, report: &mut ValidationReport, path: &str, raw: &str) {
        if !check_text(report, path, raw) {
            return;
        }
        match url::Url::parse(raw) {
            Ok(parsed) if parsed.has_host() => {
                if self.settings.require_https && parsed.scheme() != "https" {
                    report.push(
                        path,
                        ViolationKind::InsecureUrl,
                        format!("'{raw}' does not use https"),
                    );
                }
            }
            Ok(_) => report.push(
                path,
                ViolationKind::MalformedUrl,
                format!("'{raw}' has no host"),
            ),
            Err(e) => report.push(
                path,
                ViolationKind::MalformedUrl,
                format!("'{raw}' is not an absolute URL: {e}"),
            ),
        }
    }
}

/// Reports an empty string and returns whether the value is non-empty.
fn check_text<P: Into<String>>(report: &mut ValidationReport, path: P, value: &str) -> bool {
    if value.trim().is_empty() {
        report.push(path, ViolationKind::EmptyValue, "value is empty");
        false
    } else {
        true
    }
}

/// Reports every `null` inside unmodelled members. TOML cannot hold one, so
/// such a record would not survive conversion.
fn check_extra(report: &mut ValidationReport, parent: &str, extra: &ExtraFields) {
    for (key, value) in extra {
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };
        check_not_null(report, path, value);
    }
}

fn check_not_null(report: &mut ValidationReport, path: String, value: &Value) {
    match value {
        Value::Null => report.push(
            path,
            ViolationKind::WrongType {
                expected: "non-null value",
            },
            "null cannot be written to every format",
        ),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                check_not_null(report, format!("{path}[{i}]"), item);
            }
        }
        Value::Object(members) => {
            for (key, member) in members {
                check_not_null(report, format!("{path}.{key}"), member);
            }
        }
        _ => {}
    }
}

/// Returns whether `token` looks like a specification short name.
pub fn is_plausible_token(token: &str, lowercase_only: bool) -> bool {
    let allowed = |c: char| {
        c.is_ascii_digit()
            || c.is_ascii_lowercase()
            || (!lowercase_only && c.is_ascii_uppercase())
    };
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if allowed(first) => chars.all(|c| allowed(c) || matches!(c, '-' | '.' | '_')),
        _ => false,
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

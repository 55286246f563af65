//! The configuration record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{BibliographicEntry, Editor, ExtraFields, GithubInfo, SpecStatus};

/// Declarative metadata handed to the document generator at build time.
///
/// Every member is optional. Field names serialize exactly as the generator
/// expects them (`specStatus`, `latestVersion`, `subjectPrefix`,
/// `localBiblio`); anything else the record carries lands in
/// [`extra`](Self::extra) and is written back unchanged.
///
/// # Examples
///
/// ```
/// use respec_core::{ConfigurationRecord, Editor, SpecStatus};
///
/// let record = ConfigurationRecord::new()
///     .with_status(SpecStatus::CommunityGroupDraft)
///     .with_editor(Editor::new("Elad Alon"))
///     .with_xref("html");
///
/// assert!(respec_core::validate(&record).is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecord {
    /// Authoring working or community group, e.g. `cg/sccg`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Document status code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_status: Option<SpecStatus>,

    /// Canonical published URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,

    /// Source repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubInfo>,

    /// Credited editors, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editors: Option<Vec<Editor>>,

    /// Short names of specifications to cross-reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<Vec<String>>,

    /// Prefix for notification subject lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_prefix: Option<String>,

    /// Document-local bibliography, keyed by citation name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_biblio: Option<BTreeMap<String, BibliographicEntry>>,

    /// Top-level members not modeled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ConfigurationRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the authoring group.
    pub fn with_group<S: Into<String>>(mut self, group: S) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets the status code.
    pub fn with_status(mut self, status: SpecStatus) -> Self {
        self.spec_status = Some(status);
        self
    }

    /// Sets the canonical published URL.
    pub fn with_latest_version<S: Into<String>>(mut self, url: S) -> Self {
        self.latest_version = Some(url.into());
        self
    }

    /// Sets the source repository.
    pub fn with_github(mut self, github: GithubInfo) -> Self {
        self.github = Some(github);
        self
    }

    /// Appends an editor.
    pub fn with_editor(mut self, editor: Editor) -> Self {
        self.editors.get_or_insert_with(Vec::new).push(editor);
        self
    }

    /// Appends a cross-reference token.
    pub fn with_xref<S: Into<String>>(mut self, token: S) -> Self {
        self.xref.get_or_insert_with(Vec::new).push(token.into());
        self
    }

    /// Sets the notification subject prefix.
    pub fn with_subject_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.subject_prefix = Some(prefix.into());
        self
    }

    /// Adds or replaces a local bibliography entry.
    pub fn with_biblio<S: Into<String>>(mut self, key: S, entry: BibliographicEntry) -> Self {
        self.local_biblio
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), entry);
        self
    }

    /// Returns the editors, or an empty slice when none are set.
    pub fn editors(&self) -> &[Editor] {
        self.editors.as_deref().unwrap_or_default()
    }

    /// Returns the cross-reference tokens, or an empty slice when none are set.
    pub fn xref(&self) -> &[String] {
        self.xref.as_deref().unwrap_or_default()
    }
}

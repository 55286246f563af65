//! Local bibliography entries.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// A citation the document defines for itself, overriding or extending the
/// generator's shared bibliography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BibliographicEntry {
    /// Title of the cited work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Absolute URL of the cited work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Editors of the cited work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editors: Option<Vec<String>>,

    /// Authors of the cited work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    /// Publishing organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Publication date, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Maturity of the cited work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Key of another entry this one stands in for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<String>,

    /// Members not modeled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl BibliographicEntry {
    /// Creates an entry with the four commonly used fields.
    pub fn new<T, H, P>(title: T, href: H, editors: Vec<String>, publisher: P) -> Self
    where
        T: Into<String>,
        H: Into<String>,
        P: Into<String>,
    {
        Self {
            title: Some(title.into()),
            href: Some(href.into()),
            editors: Some(editors),
            publisher: Some(publisher.into()),
            ..Self::default()
        }
    }

    /// Creates an entry that redirects to another key.
    pub fn alias<S: Into<String>>(target: S) -> Self {
        Self {
            alias_of: Some(target.into()),
            ..Self::default()
        }
    }
}

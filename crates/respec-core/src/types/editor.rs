//! Credited editors.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// One credited editor or author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    /// Display name
    pub name: String,

    /// Contact address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Affiliation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Affiliation home page
    #[serde(rename = "companyURL", skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,

    /// Personal home page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Numeric W3C account identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w3cid: Option<u64>,

    /// Members not modeled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Editor {
    /// Creates an editor with only a name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the contact address.
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the affiliation.
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the W3C account identifier.
    pub fn with_w3cid(mut self, w3cid: u64) -> Self {
        self.w3cid = Some(w3cid);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder() {
        let editor = Editor::new("Elad Alon")
            .with_email("eladalon@google.com")
            .with_company("Google")
            .with_w3cid(118124);
        assert_eq!(editor.name, "Elad Alon");
        assert_eq!(editor.w3cid, Some(118124));
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let value = serde_json::to_value(Editor::new("Ada")).unwrap();
        assert_eq!(value, json!({"name": "Ada"}));
    }

    #[test]
    fn test_company_url_name() {
        let editor: Editor = serde_json::from_value(json!({
            "name": "Ada",
            "companyURL": "https://example.org/"
        }))
        .unwrap();
        assert_eq!(editor.company_url.as_deref(), Some("https://example.org/"));
    }
}

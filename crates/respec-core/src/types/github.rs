//! Source repository settings.

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Source repository used for "edit on GitHub" and issue links.
///
/// The generator also accepts a bare repository URL in place of the
/// object; such shorthand loads as a `GithubInfo` with only `repo_url` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "GithubRepr")]
pub struct GithubInfo {
    /// Absolute URL of the repository
    #[serde(rename = "repoURL", skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Branch the document is built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Members not modeled here
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl GithubInfo {
    /// Creates repository settings for a URL and branch.
    pub fn new<U: Into<String>, B: Into<String>>(repo_url: U, branch: B) -> Self {
        Self {
            repo_url: Some(repo_url.into()),
            branch: Some(branch.into()),
            extra: ExtraFields::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GithubRepr {
    Shorthand(String),
    Full {
        #[serde(rename = "repoURL", default)]
        repo_url: Option<String>,
        #[serde(default)]
        branch: Option<String>,
        #[serde(flatten)]
        extra: ExtraFields,
    },
}

impl From<GithubRepr> for GithubInfo {
    fn from(repr: GithubRepr) -> Self {
        match repr {
            GithubRepr::Shorthand(url) => GithubInfo {
                repo_url: Some(url),
                branch: None,
                extra: ExtraFields::new(),
            },
            GithubRepr::Full {
                repo_url,
                branch,
                extra,
            } => GithubInfo {
                repo_url,
                branch,
                extra,
            },
        }
    }
}

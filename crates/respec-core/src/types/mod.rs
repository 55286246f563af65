//! Typed model of a configuration record.

mod biblio;
mod editor;
mod github;
mod proptests;
mod record;
mod status;

pub use biblio::BibliographicEntry;
pub use editor::Editor;
pub use github::GithubInfo;
pub use record::ConfigurationRecord;
pub use status::SpecStatus;

/// Extra members a record carries that this crate does not model.
///
/// Kept verbatim so that a load/save round trip is lossless.
pub type ExtraFields = std::collections::BTreeMap<String, serde_json::Value>;

//! Document status codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status code selecting the generator's boilerplate and publication rules.
///
/// Codes the generator is known to understand get their own variant; any
/// other string is kept verbatim in [`SpecStatus::Other`] so that a record
/// never loses information on a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpecStatus {
    /// Editor's Draft
    EditorsDraft,
    /// First Public Working Draft
    FirstPublicWorkingDraft,
    /// Working Draft
    WorkingDraft,
    /// Candidate Recommendation Snapshot
    CandidateRecommendation,
    /// Candidate Recommendation Draft
    CandidateRecommendationDraft,
    /// Proposed Recommendation
    ProposedRecommendation,
    /// Recommendation
    Recommendation,
    /// Rescinded Recommendation
    Rescinded,
    /// Discontinued Draft
    Discontinued,
    /// Group Note
    Note,
    /// Draft Note
    DraftNote,
    /// Statement
    Statement,
    /// Community Group Draft Report
    CommunityGroupDraft,
    /// Community Group Final Report
    CommunityGroupFinal,
    /// Business Group Draft Report
    BusinessGroupDraft,
    /// Business Group Final Report
    BusinessGroupFinal,
    /// Member Submission
    MemberSubmission,
    /// Member-only document
    MemberOnly,
    /// Unofficial draft
    Unofficial,
    /// Bare document without status boilerplate
    Base,
    /// Living web specification
    Webspec,
    /// Any code this crate does not know about
    Other(String),
}

impl SpecStatus {
    /// Every known code, in the order the generator documents them.
    pub const KNOWN: &'static [&'static str] = &[
        "ED",
        "FPWD",
        "WD",
        "CR",
        "CRD",
        "PR",
        "REC",
        "RSCND",
        "DISC",
        "NOTE",
        "DNOTE",
        "STMT",
        "CG-DRAFT",
        "CG-FINAL",
        "BG-DRAFT",
        "BG-FINAL",
        "Member-SUBM",
        "MO",
        "unofficial",
        "base",
        "webspec",
    ];

    /// Returns the status code as written in the record.
    pub fn as_str(&self) -> &str {
        match self {
            SpecStatus::EditorsDraft => "ED",
            SpecStatus::FirstPublicWorkingDraft => "FPWD",
            SpecStatus::WorkingDraft => "WD",
            SpecStatus::CandidateRecommendation => "CR",
            SpecStatus::CandidateRecommendationDraft => "CRD",
            SpecStatus::ProposedRecommendation => "PR",
            SpecStatus::Recommendation => "REC",
            SpecStatus::Rescinded => "RSCND",
            SpecStatus::Discontinued => "DISC",
            SpecStatus::Note => "NOTE",
            SpecStatus::DraftNote => "DNOTE",
            SpecStatus::Statement => "STMT",
            SpecStatus::CommunityGroupDraft => "CG-DRAFT",
            SpecStatus::CommunityGroupFinal => "CG-FINAL",
            SpecStatus::BusinessGroupDraft => "BG-DRAFT",
            SpecStatus::BusinessGroupFinal => "BG-FINAL",
            SpecStatus::MemberSubmission => "Member-SUBM",
            SpecStatus::MemberOnly => "MO",
            SpecStatus::Unofficial => "unofficial",
            SpecStatus::Base => "base",
            SpecStatus::Webspec => "webspec",
            SpecStatus::Other(s) => s,
        }
    }

    /// Returns whether the code is one the generator understands.
    pub fn is_known(&self) -> bool {
        !matches!(self, SpecStatus::Other(_))
    }

    /// Returns whether documents with this status are publishable drafts
    /// that must credit at least one editor.
    ///
    /// Unknown codes are treated as not publishable; the validator reports
    /// them separately.
    pub fn is_publishable(&self) -> bool {
        !matches!(
            self,
            SpecStatus::Unofficial
                | SpecStatus::Base
                | SpecStatus::Webspec
                | SpecStatus::MemberOnly
                | SpecStatus::MemberSubmission
                | SpecStatus::Other(_)
        )
    }
}

impl From<&str> for SpecStatus {
    fn from(s: &str) -> Self {
        match s {
            "ED" => SpecStatus::EditorsDraft,
            "FPWD" => SpecStatus::FirstPublicWorkingDraft,
            "WD" => SpecStatus::WorkingDraft,
            "CR" => SpecStatus::CandidateRecommendation,
            "CRD" => SpecStatus::CandidateRecommendationDraft,
            "PR" => SpecStatus::ProposedRecommendation,
            "REC" => SpecStatus::Recommendation,
            "RSCND" => SpecStatus::Rescinded,
            "DISC" => SpecStatus::Discontinued,
            "NOTE" => SpecStatus::Note,
            "DNOTE" => SpecStatus::DraftNote,
            "STMT" => SpecStatus::Statement,
            "CG-DRAFT" => SpecStatus::CommunityGroupDraft,
            "CG-FINAL" => SpecStatus::CommunityGroupFinal,
            "BG-DRAFT" => SpecStatus::BusinessGroupDraft,
            "BG-FINAL" => SpecStatus::BusinessGroupFinal,
            "Member-SUBM" => SpecStatus::MemberSubmission,
            "MO" => SpecStatus::MemberOnly,
            "unofficial" => SpecStatus::Unofficial,
            "base" => SpecStatus::Base,
            "webspec" => SpecStatus::Webspec,
            other => SpecStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for SpecStatus {
    fn from(s: String) -> Self {
        match SpecStatus::from(s.as_str()) {
            SpecStatus::Other(_) => SpecStatus::Other(s),
            known => known,
        }
    }
}

impl From<SpecStatus> for String {
    fn from(status: SpecStatus) -> Self {
        match status {
            SpecStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SpecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

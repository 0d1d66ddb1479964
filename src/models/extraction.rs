//! Output of the pattern extractor

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub project_key: String,
    pub base_url: String,
    pub ticket_id: String,
    pub rule: ExtractionRule,
}

/// The rule of the extraction cascade that produced a result, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRule {
    /// `/browse/KEY-123`
    BrowsePath,
    /// `/owner/repo/issues/123`
    RepositoryIssue,
    /// `?uri=INC123`
    UriQuery,
    /// `/context/PREFIX-123`
    DashDelimited,
    /// `/context/PREFIX_123`
    UnderscoreDelimited,
    /// `/context/PREFIX.123`
    DotDelimited,
    /// `/context/PREFIX123`
    Concatenated,
    /// `/path/to/123`
    NumericPath,
    /// Any `AB-123` or `AB123` run anywhere in the URL text
    Fallback,
}

impl ExtractionResult {
    pub fn new(
        rule: ExtractionRule,
        project_key: impl Into<String>,
        base_url: impl Into<String>,
        ticket_id: impl Into<String>,
    ) -> Self {
        Self {
            project_key: project_key.into(),
            base_url: base_url.into(),
            ticket_id: ticket_id.into(),
            rule,
        }
    }

    /// The URL this result reconstructs (base URL + identifier).
    pub fn reconstructed_url(&self) -> String {
        format!("{}{}", self.base_url, self.ticket_id)
    }
}

impl std::fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionRule::BrowsePath => write!(f, "browse path"),
            ExtractionRule::RepositoryIssue => write!(f, "repository issue"),
            ExtractionRule::UriQuery => write!(f, "uri query parameter"),
            ExtractionRule::DashDelimited => write!(f, "dash delimited"),
            ExtractionRule::UnderscoreDelimited => write!(f, "underscore delimited"),
            ExtractionRule::DotDelimited => write!(f, "dot delimited"),
            ExtractionRule::Concatenated => write!(f, "concatenated"),
            ExtractionRule::NumericPath => write!(f, "numeric path"),
            ExtractionRule::Fallback => write!(f, "fallback"),
        }
    }
}

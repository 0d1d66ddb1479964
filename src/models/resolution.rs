//! Output of the identifier resolver

use super::Pattern;

/// How the resolver decided which pattern the input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// `KEY-123`
    Dashed,
    /// `KEY123`
    Concatenated,
    /// Bare number against the selected pattern
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub pattern: &'a Pattern,
    pub ticket_id: String,
    pub kind: MatchKind,
}

impl Resolution<'_> {
    pub fn url(&self) -> String {
        self.pattern.url_for(&self.ticket_id)
    }
}

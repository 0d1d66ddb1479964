//! Error taxonomy shared by the extractor, resolver and pattern store
//!
//! Every variant is recoverable by the user; callers report it and keep
//! their previous state.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid URL: '{0}' is not an absolute URL")]
    InvalidUrl(String),

    #[error("No identifier pattern found in '{0}'")]
    NoMatch(String),

    #[error("Please enter a ticket number")]
    EmptyInput,

    #[error("Please select a pattern first or enter a full ticket ID (e.g., PROJ-123 or PROJ123)")]
    NoPatternSelected,

    #[error("Invalid ticket number: '{0}' contains no digits")]
    InvalidTicketNumber(String),

    #[error("Pattern \"{0}\" already exists")]
    DuplicateKey(String),

    #[error("Pattern key '{0}' should only contain letters and numbers")]
    InvalidKey(String),

    #[error("Base URL '{0}' does not form a valid URL")]
    InvalidBaseUrl(String),

    #[error("Display name cannot be empty")]
    EmptyDisplayName,

    #[error("No pattern with key '{0}'")]
    UnknownPattern(String),

    #[error("Invalid settings file format: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;

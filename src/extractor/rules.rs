//! Tracker-convention rules and the raw-text fallback

use super::UrlParts;
use crate::models::{ExtractionResult, ExtractionRule};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // /browse/PROJECT-123
    static ref BROWSE_PATH: Regex = Regex::new(r"(?i-u)/browse/([A-Z0-9]+-[0-9]+)").unwrap();

    // /owner/repo/issues/123
    static ref REPOSITORY_ISSUE: Regex = Regex::new(r"/([^/]+)/([^/]+)/issues/([0-9]+)").unwrap();

    // uri=INC0012345 as a query parameter
    static ref URI_QUERY: Regex = Regex::new(r"(?i-u)(?:^|&)uri=([A-Z]+)([0-9]+)").unwrap();

    // Anything that looks like AB-123 or AB123
    static ref FALLBACK: Regex = Regex::new(r"(?i-u)([A-Z0-9]{2,})-?([0-9]+)").unwrap();
}

pub fn browse_path(parts: &UrlParts) -> Option<ExtractionResult> {
    let caps = BROWSE_PATH.captures(&parts.path)?;
    let ticket_id = caps.get(1)?.as_str();
    let project_key = ticket_id.split('-').next()?.to_uppercase();

    Some(ExtractionResult::new(
        ExtractionRule::BrowsePath,
        project_key,
        format!("{}/browse/", parts.origin),
        ticket_id,
    ))
}

pub fn repository_issue(parts: &UrlParts) -> Option<ExtractionResult> {
    let caps = REPOSITORY_ISSUE.captures(&parts.path)?;
    let owner = caps.get(1)?.as_str();
    let repo = caps.get(2)?.as_str();
    let number = caps.get(3)?.as_str();

    Some(ExtractionResult::new(
        ExtractionRule::RepositoryIssue,
        format!("{}-{}", owner.to_uppercase(), repo.to_uppercase()),
        format!("{}/{}/{}/issues/", parts.origin, owner, repo),
        number,
    ))
}

pub fn uri_query(parts: &UrlParts) -> Option<ExtractionResult> {
    let query = parts.query.as_deref()?;
    let caps = URI_QUERY.captures(query)?;
    let prefix = caps.get(1)?.as_str();
    let number = caps.get(2)?.as_str();

    Some(ExtractionResult::new(
        ExtractionRule::UriQuery,
        prefix.to_uppercase(),
        format!("{}{}?uri=", parts.origin, parts.path),
        format!("{}{}", prefix, number),
    ))
}

pub fn fallback(parts: &UrlParts) -> Option<ExtractionResult> {
    let caps = FALLBACK.captures(parts.raw)?;
    let fragment = caps.get(0)?;
    let prefix = caps.get(1)?.as_str();
    let number = caps.get(2)?.as_str();

    Some(ExtractionResult::new(
        ExtractionRule::Fallback,
        prefix.to_uppercase(),
        &parts.raw[..fragment.start()],
        format!("{}-{}", prefix, number),
    ))
}

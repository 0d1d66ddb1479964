//! Pattern extraction from example URLs
//!
//! Rules run in a fixed priority order and the first one that matches wins:
//! well-known tracker conventions first, then increasingly permissive path
//! heuristics, then a search over the raw URL text.

pub mod rules;
pub mod contextual;

use crate::error::{Error, Result};
use crate::models::ExtractionResult;
use log::debug;
use url::Url;

/// The pieces of a parsed URL the rules look at.
#[derive(Debug, Clone)]
pub struct UrlParts<'a> {
    /// `scheme://host[:port]`
    pub origin: String,
    /// First label of the hostname with a leading `www.` removed.
    pub host_label: String,
    pub path: String,
    pub query: Option<String>,
    /// The input text as given, used by the fallback rule.
    pub raw: &'a str,
}

impl<'a> UrlParts<'a> {
    pub fn new(url: &Url, raw: &'a str) -> Self {
        let hostname = url.host_str().unwrap_or("");
        let host = match url.port() {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.to_string(),
        };

        let host_label = hostname
            .strip_prefix("www.")
            .unwrap_or(hostname)
            .split('.')
            .next()
            .unwrap_or("")
            .to_string();

        Self {
            origin: format!("{}://{}", url.scheme(), host),
            host_label,
            path: url.path().to_string(),
            query: url.query().filter(|q| !q.is_empty()).map(str::to_string),
            raw,
        }
    }
}

/// Infer a pattern key, base URL and identifier from an example URL.
pub fn extract(raw_url: &str) -> Result<ExtractionResult> {
    let raw_url = raw_url.trim();
    let url = Url::parse(raw_url).map_err(|_| Error::InvalidUrl(raw_url.to_string()))?;
    let parts = UrlParts::new(&url, raw_url);

    let result = rules::browse_path(&parts)
        .or_else(|| rules::repository_issue(&parts))
        .or_else(|| rules::uri_query(&parts))
        .or_else(|| contextual::extract_contextual(&parts))
        .or_else(|| rules::fallback(&parts));

    match result {
        Some(result) => {
            debug!(
                "Extracted {} via {} rule (base: {})",
                result.project_key, result.rule, result.base_url
            );
            Ok(result)
        }
        None => {
            debug!("No extraction rule matched {}", raw_url);
            Err(Error::NoMatch(raw_url.to_string()))
        }
    }
}

//! Extraction cascade tests against realistic tracker URLs

use pretty_assertions::assert_eq;
use url_opener::{extract, Error, ExtractionResult, ExtractionRule};

fn expected(rule: ExtractionRule, key: &str, base: &str, ticket: &str) -> ExtractionResult {
    ExtractionResult::new(rule, key, base, ticket)
}

#[test]
fn test_browse_urls_for_many_hosts() {
    for host in ["h", "jira.example.com", "issues.acme.io:8443"] {
        let url = format!("https://{}/browse/KEY-123", host);
        assert_eq!(
            extract(&url).unwrap(),
            expected(
                ExtractionRule::BrowsePath,
                "KEY",
                &format!("https://{}/browse/", host),
                "KEY-123"
            )
        );
    }
}

#[test]
fn test_issue_urls() {
    assert_eq!(
        extract("https://h/o/r/issues/42").unwrap(),
        expected(ExtractionRule::RepositoryIssue, "O-R", "https://h/o/r/issues/", "42")
    );
}

#[test]
fn test_service_desk_url() {
    assert_eq!(
        extract("https://acme.service-now.com/nav_to.do?uri=INC0012345").unwrap(),
        expected(
            ExtractionRule::UriQuery,
            "INC",
            "https://acme.service-now.com/nav_to.do?uri=",
            "INC0012345"
        )
    );
}

#[test]
fn test_reconstructs_input_url() {
    let urls = [
        "https://jira.example.com/browse/OPS-17",
        "https://github.com/rust-lang/rust/issues/1",
        "https://www.test1.com/projects/BUG-77",
        "https://wiki.example.com/pages/DOC_42",
        "https://app.example.com/cases/CS1234",
        "https://www.example.com/path/to/tickets/1234",
    ];

    for url in urls {
        let result = extract(url).unwrap();
        assert_eq!(result.reconstructed_url(), url, "rule {}", result.rule);
    }
}

#[test]
fn test_same_input_same_rule() {
    let urls = [
        "https://jira.example.com/browse/OPS-17",
        "https://docs.example.com/spec/RFC.9110",
        "https://example.com/?ref=PROJ-99",
    ];

    for url in urls {
        let first = extract(url).unwrap();
        for _ in 0..3 {
            assert_eq!(extract(url).unwrap(), first);
        }
    }
}

#[test]
fn test_failures() {
    assert!(matches!(extract(""), Err(Error::InvalidUrl(_))));
    assert!(matches!(extract("jira/browse/ABC-1"), Err(Error::InvalidUrl(_))));
    assert!(matches!(extract("https://example.com/"), Err(Error::NoMatch(_))));
}

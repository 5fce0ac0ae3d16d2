// src/icons/codepoints.rs
// =============================================================================
// The flat-file source: MaterialIcons-Regular.codepoints.
//
// The file has one "<name> <hex codepoint>" pair per line:
//
//   10k e951
//   10mp e95c
//   home e88a
//
// We only want the names. One GET, no tree walk.
// =============================================================================

use crate::error::{ListError, Stage};
use crate::github::GithubClient;

/// Extracts icon names from codepoints text, sorted ascending.
///
/// Blank lines are skipped and surrounding whitespace is ignored; the first
/// whitespace-separated token of each line is the name.
pub fn parse_codepoints(text: &str) -> Vec<String> {
    let mut names: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect();

    names.sort();
    names.dedup();
    names
}

pub async fn fetch_codepoints(client: &GithubClient) -> Result<Vec<String>, ListError> {
    let url = client.config().codepoints_url()?;
    let text = client.get_text(Stage::Codepoints, url).await?;

    let names = parse_codepoints(&text);
    tracing::info!(count = names.len(), "parsed codepoints file");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_skips_blanks_and_sorts() {
        let text = "home 1f000\n\nsearch 1f001\n  menu 1f002  \n";
        assert_eq!(parse_codepoints(text), vec!["home", "menu", "search"]);
    }

    #[test]
    fn test_parse_handles_crlf_and_tabs() {
        let text = "zoom_in\te8ff\r\n10k e951\r\n   \r\n";
        assert_eq!(parse_codepoints(text), vec!["10k", "zoom_in"]);
    }

    #[test]
    fn test_parse_drops_duplicate_names() {
        let text = "star e838\nstar f0ec\n";
        assert_eq!(parse_codepoints(text), vec!["star"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_codepoints("").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_reads_raw_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(
                "/google/material-design-icons/master/font/MaterialIcons-Regular.codepoints",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_string("search e8b6\nhome e88a\n"))
            .expect(1)
            .mount(&server)
            .await;

        let config = ApiConfig::default().with_raw_base(&server.uri()).unwrap();
        let client = GithubClient::new(config).unwrap();
        assert_eq!(fetch_codepoints(&client).await.unwrap(), vec!["home", "search"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_names_codepoints_stage() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = ApiConfig::default().with_raw_base(&server.uri()).unwrap();
        let client = GithubClient::new(config).unwrap();
        let err = fetch_codepoints(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch codepoints file: HTTP 404 Not Found");
    }
}

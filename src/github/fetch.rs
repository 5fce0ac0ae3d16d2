// src/github/fetch.rs
// =============================================================================
// Request plumbing shared by every GitHub call we make.
//
// Every request carries:
//   - User-Agent: milist/<version>  (the API rejects requests without one)
//   - Accept: application/vnd.github+json
//   - Authorization: Bearer <token>  (only when a token is configured)
//
// Failures are mapped into ListError here, so the tree walk and the
// codepoints parser only ever see one error type:
//   - non-2xx status      -> ListError::Stage (names the stage + status)
//   - reqwest::Error      -> ListError::Transport (original message kept)
// =============================================================================

use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ListError, Stage};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Thin wrapper around a reqwest Client that knows our headers and config
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    config: ApiConfig,
}

impl GithubClient {
    pub fn new(config: ApiConfig) -> Result<Self, ListError> {
        // No explicit timeout: we rely on the transport defaults
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // Attaches the fixed headers and, if we have one, the bearer token
    fn request(&self, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, GITHUB_ACCEPT);

        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GETs `url` and deserializes the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        stage: Stage,
        url: Url,
    ) -> Result<T, ListError> {
        let response = self.send(stage, url).await?;
        Ok(response.json::<T>().await?)
    }

    /// GETs `url` and returns the body as text
    pub async fn get_text(&self, stage: Stage, url: Url) -> Result<String, ListError> {
        let response = self.send(stage, url).await?;
        Ok(response.text().await?)
    }

    async fn send(&self, stage: Stage, url: Url) -> Result<Response, ListError> {
        tracing::debug!(%stage, %url, "GET");

        let response = self.request(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let rate_limited = is_rate_limited(&response);
            tracing::debug!(%stage, %status, rate_limited, "request failed");
            return Err(ListError::stage(stage, status, rate_limited));
        }

        Ok(response)
    }
}

// GitHub answers 403 (sometimes 429) with x-ratelimit-remaining: 0 once the
// hourly quota is gone
fn is_rate_limited(response: &Response) -> bool {
    let status = response.status().as_u16();
    if status != 403 && status != 429 {
        return false;
    }
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why one Client?
//    - reqwest::Client keeps a connection pool; the whole fetch chain goes to
//      the same host, so reusing it saves a TLS handshake per call
//    - Cloning a Client is cheap (it's an Arc inside)
//
// 2. Why is `stage` passed into every call?
//    - So a failure can say *which* step of the chain broke
//      ("Failed to fetch commit: HTTP 502") instead of just a status code
//
// 3. What does the `?` on reqwest calls do here?
//    - ListError has #[from] reqwest::Error, so `?` wraps DNS failures,
//      resets and JSON decode errors into ListError::Transport automatically
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> GithubClient {
        let config = ApiConfig::default()
            .with_api_base(&server.uri())
            .unwrap()
            .with_token(token.map(str::to_string));
        GithubClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_fixed_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("accept", GITHUB_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let url = client.config().api_base.join("ping").unwrap();
        let body = client.get_text(Stage::Codepoints, url).await.unwrap();
        assert_eq!(body, "pong");

        let requests = server.received_requests().await.unwrap();
        let agent = requests[0].headers.get("user-agent").unwrap();
        assert!(agent.to_str().unwrap().starts_with("milist/"));
    }

    #[tokio::test]
    async fn test_non_success_maps_to_stage_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let url = client.config().api_base.join("anything").unwrap();
        let err = client.get_text(Stage::Commit, url).await.unwrap_err();
        match err {
            ListError::Stage { stage, status, .. } => {
                assert_eq!(stage, Stage::Commit);
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("expected stage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_adds_hint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403).insert_header("x-ratelimit-remaining", "0"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let url = client.config().api_base.join("limited").unwrap();
        let err = client.get_text(Stage::Repository, url).await.unwrap_err();
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let url = client.config().api_base.join("broken").unwrap();
        let err = client
            .get_json::<serde_json::Value>(Stage::Repository, url)
            .await
            .unwrap_err();
        assert!(matches!(err, ListError::Transport(_)));
        assert!(err.to_string().starts_with("Failed to fetch Material Icons: "));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1
        let config = ApiConfig::default().with_api_base("http://127.0.0.1:1").unwrap();
        let client = GithubClient::new(config).unwrap();
        let url = client.config().repo_endpoint(["ping"]).unwrap();
        let err = client.get_text(Stage::Repository, url).await.unwrap_err();
        assert!(matches!(err, ListError::Transport(_)));
    }
}

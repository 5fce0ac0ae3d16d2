// src/config.rs
// =============================================================================
// Where icon names come from and how we identify ourselves.
//
// The defaults point at the real GitHub hosts and the
// google/material-design-icons repository. Tests swap the hosts for a local
// mock server with with_api_base() / with_raw_base().
//
// The bearer token is read from the environment exactly once (from_env) and
// then carried inside ApiConfig, so nothing below this layer looks at
// process-global state.
// =============================================================================

use url::Url;

/// Environment variable holding the optional GitHub token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_API_BASE: &str = "https://api.github.com/";
const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com/";
const DEFAULT_OWNER: &str = "google";
const DEFAULT_REPO: &str = "material-design-icons";
const DEFAULT_CODEPOINTS_PATH: &str = "master/font/MaterialIcons-Regular.codepoints";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// REST API host (repository, refs, commits, trees)
    pub api_base: Url,
    /// Raw content host (codepoints file)
    pub raw_base: Url,
    pub owner: String,
    pub repo: String,
    /// Path of the codepoints file below <owner>/<repo>/ on the raw host,
    /// starting with the branch name
    pub codepoints_path: String,
    /// Sent as "Authorization: Bearer <token>" when present
    pub token: Option<String>,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Both constants are known-good absolute URLs
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is valid"),
            raw_base: Url::parse(DEFAULT_RAW_BASE).expect("default raw base is valid"),
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            codepoints_path: DEFAULT_CODEPOINTS_PATH.to_string(),
            token: None,
            user_agent: format!("milist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Default configuration plus the token from GITHUB_TOKEN, if set
    pub fn from_env() -> Self {
        Self::default().with_token(std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Sets the token; empty or whitespace-only values count as no token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn with_api_base(mut self, base: &str) -> Result<Self, url::ParseError> {
        self.api_base = parse_base(base)?;
        Ok(self)
    }

    pub fn with_raw_base(mut self, base: &str) -> Result<Self, url::ParseError> {
        self.raw_base = parse_base(base)?;
        Ok(self)
    }

    /// URL of an endpoint below /repos/<owner>/<repo>
    ///
    /// Each segment is percent-encoded on its own, so values coming back from
    /// the API (branch names may contain '#', '?' or '%') stay inside the path.
    /// No segments gives the repository metadata endpoint itself.
    pub fn repo_endpoint<I>(&self, segments: I) -> Result<Url, url::ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.api_base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
            path.pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.repo.as_str()])
                .extend(segments);
        }
        Ok(url)
    }

    /// URL of the raw codepoints file
    pub fn codepoints_url(&self) -> Result<Url, url::ParseError> {
        self.raw_base.join(&format!(
            "{}/{}/{}",
            self.owner, self.repo, self.codepoints_path
        ))
    }
}

// Url::join drops the last path segment unless the base ends with '/', which
// would lose e.g. the "/api/v3" prefix of an Enterprise host
fn parse_base(base: &str) -> Result<Url, url::ParseError> {
    if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{}/", base))
    }
}

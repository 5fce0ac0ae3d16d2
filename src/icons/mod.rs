// src/icons/mod.rs
// =============================================================================
// The resolver entry point: source selector in, sorted icon names out.
//
// Two strategies behind one call:
// - android / ios / web -> github::list_directory_names("symbols/<source>")
// - code                -> codepoints::fetch_codepoints()
//
// IconLister holds nothing but the configured client, so several lists can
// be resolved at the same time without any coordination.
// =============================================================================

mod codepoints;
mod source;

pub use source::Source;

use crate::config::ApiConfig;
use crate::error::ListError;
use crate::github::{self, GithubClient};

#[derive(Debug, Clone)]
pub struct IconLister {
    client: GithubClient,
}

impl IconLister {
    pub fn new(config: ApiConfig) -> Result<Self, ListError> {
        Ok(Self {
            client: GithubClient::new(config)?,
        })
    }

    /// Validates `source`, then resolves it.
    ///
    /// An unknown source fails right away without touching the network.
    pub async fn list(&self, source: &str) -> Result<Vec<String>, ListError> {
        let source: Source = source.parse()?;
        self.list_source(source).await
    }

    /// Resolves an already-validated source. The result is sorted ascending
    /// and has no duplicates.
    pub async fn list_source(&self, source: Source) -> Result<Vec<String>, ListError> {
        tracing::debug!(%source, "resolving icon names");

        match source.tree_path() {
            Some(path) => github::list_directory_names(&self.client, &path).await,
            None => codepoints::fetch_codepoints(&self.client).await,
        }
    }
}

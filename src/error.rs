// src/error.rs
// =============================================================================
// Error types for icon resolution.
//
// Every failure the resolver can produce falls into one of these kinds:
// - InvalidSource: the selector is not android/ios/web/code (no network used)
// - Stage: one API call came back with a non-success status
// - NotFound: a path segment is missing from a tree listing
// - Truncated: the API cut a tree listing short
// - Transport: anything lower level (DNS, connection reset, bad JSON, ...)
//
// main.rs turns any of these into "Error: <message>" and exit code 1.
// =============================================================================

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The step of the fetch chain a request belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Repository metadata (default branch)
    Repository,
    /// Branch name -> tip commit
    BranchRef,
    /// Commit -> root tree
    Commit,
    /// Tree listing while descending into the named segment
    Tree(String),
    /// Final listing of the target directory
    Listing,
    /// Raw codepoints file
    Codepoints,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Repository => write!(f, "repository metadata"),
            Stage::BranchRef => write!(f, "branch reference"),
            Stage::Commit => write!(f, "commit"),
            Stage::Tree(segment) => write!(f, "tree while looking up '{}'", segment),
            Stage::Listing => write!(f, "icon directory listing"),
            Stage::Codepoints => write!(f, "codepoints file"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid source: {0}. Must be one of: android, ios, web, code")]
    InvalidSource(String),

    #[error("Failed to fetch {stage}: HTTP {status}{hint}")]
    Stage {
        stage: Stage,
        status: StatusCode,
        /// Extra advice appended to the message, empty when there is none
        hint: String,
    },

    #[error("Path '{path}' not found at branch '{branch}'")]
    NotFound { path: String, branch: String },

    #[error("Truncated response while fetching {stage}")]
    Truncated { stage: Stage },

    #[error("Failed to fetch Material Icons: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ListError {
    /// Builds a stage failure, adding a hint when GitHub says the rate limit is used up
    pub fn stage(stage: Stage, status: StatusCode, rate_limited: bool) -> Self {
        let hint = if rate_limited {
            " (GitHub API rate limit exceeded; set GITHUB_TOKEN to raise it)".to_string()
        } else {
            String::new()
        };
        ListError::Stage { stage, status, hint }
    }
}

// src/github/mod.rs
// =============================================================================
// Everything that talks to GitHub.
//
// - fetch: the shared client (headers, bearer token, status -> error mapping)
// - tree:  the segment-by-segment tree walk that lists a directory
// =============================================================================

mod fetch;
mod tree;

pub use fetch::GithubClient;
pub use tree::list_directory_names;

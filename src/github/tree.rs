// src/github/tree.rs
// =============================================================================
// Finds a directory inside a large repository and lists its subdirectories.
//
// Why not GET /git/trees/<branch>?recursive=1 ?
// - material-design-icons is huge; the recursive endpoint silently
//   truncates its result above a size limit, so we would lose icons
//
// Instead we walk down one level at a time:
//
//   repository  -> default_branch
//   branch ref  -> commit sha
//   commit      -> root tree sha
//   tree(sha)   -> entry "symbols" (type tree) -> its sha
//   tree(sha)   -> entry "web"     (type tree) -> its sha
//   tree(sha)   -> every entry of type tree = one icon
//
// Each call needs the sha from the previous one, so they run one after
// another. The only state carried through the loop is the current tree sha.
// =============================================================================

use serde::Deserialize;

use crate::error::{ListError, Stage};
use super::fetch::GithubClient;

// Just the fields we need from each API payload

#[derive(Debug, Deserialize)]
struct Repository {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct GitCommit {
    tree: GitObject,
}

/// Kind of a tree entry as reported by the git trees API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    /// Submodules show up as "commit"; anything unknown lands here too
    #[serde(other)]
    Other,
}

/// One entry in a single (non-recursive) tree listing
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    /// Name of this entry within its parent
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub sha: String,
}

#[derive(Debug, Deserialize)]
struct GitTree {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

impl GitTree {
    fn find_directory(&self, name: &str) -> Option<&TreeEntry> {
        self.tree
            .iter()
            .find(|entry| entry.kind == EntryKind::Tree && entry.path == name)
    }

    fn directory_names(self) -> Vec<String> {
        self.tree
            .into_iter()
            .filter(|entry| entry.kind == EntryKind::Tree)
            .map(|entry| entry.path)
            .collect()
    }
}

/// Lists the names of the immediate subdirectories of `path` on the
/// repository's default branch, sorted ascending.
///
/// Issues `3 + number of path segments` calls to locate the directory, then
/// one more for the final listing. Stops at the first failure.
///
/// A listing the API reports as `truncated` fails with
/// [`ListError::Truncated`] instead of returning a partial icon list.
pub async fn list_directory_names(
    client: &GithubClient,
    path: &str,
) -> Result<Vec<String>, ListError> {
    let config = client.config();

    let repository: Repository = client
        .get_json(Stage::Repository, config.repo_endpoint(std::iter::empty::<&str>())?)
        .await?;
    let branch = repository.default_branch;
    tracing::debug!(%branch, "resolved default branch");

    // '/' separates ref components (heads/feature/x); each component is
    // encoded on its own
    let ref_segments = ["git", "ref", "heads"].into_iter().chain(branch.split('/'));
    let ref_url = config.repo_endpoint(ref_segments)?;
    let reference: GitRef = client.get_json(Stage::BranchRef, ref_url).await?;

    let commit_url = config.repo_endpoint(["git", "commits", reference.object.sha.as_str()])?;
    let commit: GitCommit = client.get_json(Stage::Commit, commit_url).await?;

    let mut tree_sha = commit.tree.sha;

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let listing = fetch_tree(client, Stage::Tree(segment.to_string()), &tree_sha).await?;

        tree_sha = match listing.find_directory(segment) {
            Some(entry) => entry.sha.clone(),
            None => {
                return Err(ListError::NotFound {
                    path: path.to_string(),
                    branch,
                })
            }
        };
    }

    let listing = fetch_tree(client, Stage::Listing, &tree_sha).await?;
    let mut names = listing.directory_names();
    names.sort();
    names.dedup();

    tracing::info!(%path, %branch, count = names.len(), "listed directories");
    Ok(names)
}

async fn fetch_tree(client: &GithubClient, stage: Stage, sha: &str) -> Result<GitTree, ListError> {
    let url = client.config().repo_endpoint(["git", "trees", sha])?;
    let listing: GitTree = client.get_json(stage.clone(), url).await?;

    if listing.truncated {
        tracing::warn!(%stage, %sha, "tree listing was truncated by the API");
        return Err(ListError::Truncated { stage });
    }

    Ok(listing)
}

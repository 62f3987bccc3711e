// Rust guideline compliant 2026-10-14

//! Last-commit lookup for the "last updated" line.

use chrono::{DateTime, Utc};
use git2::Repository;
use serde::Serialize;
use std::path::Path;

/// Metadata of the most recent commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitInfo {
    /// Full commit hash.
    pub sha: String,
    /// First line of the commit message.
    pub message: String,
    /// Commit time.
    pub date: DateTime<Utc>,
    /// Web link to the commit when a repository URL is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CommitInfo {
    /// Returns the abbreviated hash.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..self.sha.len().min(7)]
    }
}

/// Looks up the HEAD commit of the repository containing `root`.
///
/// Returns `None` when `root` is not inside a Git repository or HEAD has no
/// commits yet. The lookup is cosmetic, so failures are only logged.
pub fn last_commit(root: &Path, repository_url: Option<&str>) -> Option<CommitInfo> {
    let repo = match Repository::discover(root) {
        Ok(repo) => repo,
        Err(err) => {
            tracing::debug!(root = %root.display(), "No git repository: {}", err.message());
            return None;
        }
    };
    let commit = match repo.head().and_then(|head| head.peel_to_commit()) {
        Ok(commit) => commit,
        Err(err) => {
            tracing::debug!("No HEAD commit: {}", err.message());
            return None;
        }
    };

    let sha = commit.id().to_string();
    let url = repository_url
        .map(|base| base.trim().trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .map(|base| format!("{}/commit/{}", base, sha));

    Some(CommitInfo {
        message: commit.summary().unwrap_or_default().to_string(),
        date: DateTime::from_timestamp(commit.time().seconds(), 0)?,
        sha,
        url,
    })
}

//! Hosted git-forge services
//!
//! Pull request operations used by the publisher. GitHub is the only backend.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::PullRequest;
use async_trait::async_trait;

/// Forge service trait for the PR operations a release needs
#[async_trait]
pub trait ForgeService: Send + Sync {
    /// Find an existing open PR for a head branch
    async fn find_existing_pr(&self, head_branch: &str) -> Result<Option<PullRequest>>;

    /// Default branch of the repository (PR base)
    async fn default_branch(&self) -> Result<String>;

    /// Create a new PR
    async fn create_pr(&self, head: &str, base: &str, title: &str, body: &str)
    -> Result<PullRequest>;
}

//! Git operations over a [`CommandRunner`]

use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};
use tracing::info;

/// Remote name used for clone and push
pub const ORIGIN: &str = "origin";

/// List tag references of a remote repository (`git ls-remote --tags`)
pub async fn ls_remote_tags(runner: &dyn CommandRunner, url: &str, cwd: &Path) -> Result<String> {
    let output = runner
        .run_checked("git", &["ls-remote", "--tags", url], cwd)
        .await?;
    Ok(output.stdout)
}

/// A local clone, addressed by path
///
/// Commands run with the clone as their working directory; the process
/// working directory is never changed.
pub struct GitRepo<'a> {
    runner: &'a dyn CommandRunner,
    path: PathBuf,
}

impl<'a> GitRepo<'a> {
    /// Wrap an existing checkout
    pub fn open(runner: &'a dyn CommandRunner, path: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            path: path.into(),
        }
    }

    /// Clone `url` into `parent/dir_name`
    pub async fn clone_into(
        runner: &'a dyn CommandRunner,
        url: &str,
        parent: &Path,
        dir_name: &str,
    ) -> Result<Self> {
        info!(url, dir = dir_name, "cloning");
        runner
            .run_checked("git", &["clone", url, dir_name], parent)
            .await?;
        Ok(Self::open(runner, parent.join(dir_name)))
    }

    /// Path of the checkout
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        self.runner.run_checked("git", args, &self.path).await
    }

    /// Set repository-local commit identity
    pub async fn set_identity(&self, email: &str, name: &str) -> Result<()> {
        self.git(&["config", "user.email", email]).await?;
        self.git(&["config", "user.name", name]).await?;
        Ok(())
    }

    /// Create a branch and switch to it; fails if it already exists
    pub async fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.git(&["checkout", "-b", branch]).await?;
        Ok(())
    }

    /// Point a remote at a new URL
    pub async fn set_remote_url(&self, remote: &str, url: &str) -> Result<()> {
        self.git(&["remote", "set-url", remote, url]).await?;
        Ok(())
    }

    /// Stage every change in the worktree
    pub async fn add_all(&self) -> Result<()> {
        self.git(&["add", "-A"]).await?;
        Ok(())
    }

    /// Remove a path from the index, keeping the file on disk
    pub async fn unstage(&self, path: &str) -> Result<()> {
        self.git(&["reset", "--", path]).await?;
        Ok(())
    }

    /// Commit staged changes
    pub async fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "-m", message]).await?;
        Ok(())
    }

    /// Push a branch and set its upstream
    pub async fn push(&self, remote: &str, branch: &str) -> Result<()> {
        info!(remote, branch, "pushing");
        self.git(&["push", "-u", remote, branch]).await?;
        Ok(())
    }
}

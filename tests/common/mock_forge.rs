//! Mock forge service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tap_release::error::{Error, Result};
use tap_release::forge::ForgeService;
use tap_release::types::{PullRequest, RepoSlug};

/// Call record for `create_pr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Forge mock with call tracking and error injection
pub struct MockForge {
    repo: RepoSlug,
    default_branch: String,
    next_pr_number: AtomicU64,
    existing_pr: Mutex<Option<PullRequest>>,
    find_pr_calls: Mutex<Vec<String>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    error_on_create_pr: Mutex<Option<String>>,
}

impl MockForge {
    /// Create a mock for `repo` whose default branch is `main`
    pub fn new(repo: RepoSlug) -> Self {
        Self {
            repo,
            default_branch: "main".to_string(),
            next_pr_number: AtomicU64::new(1),
            existing_pr: Mutex::new(None),
            find_pr_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_create_pr: Mutex::new(None),
        }
    }

    /// Make `find_existing_pr` report an open PR
    pub fn set_existing_pr(&self, pr: PullRequest) {
        *self.existing_pr.lock().unwrap() = Some(pr);
    }

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// All branches `find_existing_pr` was called with
    pub fn find_pr_calls(&self) -> Vec<String> {
        self.find_pr_calls.lock().unwrap().clone()
    }

    /// All `create_pr` calls
    pub fn create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForgeService for MockForge {
    async fn find_existing_pr(&self, head_branch: &str) -> Result<Option<PullRequest>> {
        self.find_pr_calls
            .lock()
            .unwrap()
            .push(head_branch.to_string());
        Ok(self.existing_pr.lock().unwrap().clone())
    }

    async fn default_branch(&self) -> Result<String> {
        Ok(self.default_branch.clone())
    }

    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });

        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/{}/pull/{number}", self.repo),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }
}

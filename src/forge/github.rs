//! GitHub forge service implementation

use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::types::{PullRequest, RepoSlug};
use async_trait::async_trait;
use octocrab::Octocrab;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    repo: RepoSlug,
}

impl GitHubService {
    /// Create a new GitHub service authenticated with a bearer token
    pub fn new(token: &str, repo: RepoSlug) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, repo })
    }
}

fn to_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        html_url: pr
            .html_url
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        base_ref: pr.base.ref_field.clone(),
        head_ref: pr.head.ref_field.clone(),
        title: pr.title.as_deref().unwrap_or_default().to_string(),
    }
}

#[async_trait]
impl ForgeService for GitHubService {
    async fn find_existing_pr(&self, head_branch: &str) -> Result<Option<PullRequest>> {
        let head = format!("{}:{}", &self.repo.owner, head_branch);

        let prs = self
            .client
            .pulls(&self.repo.owner, &self.repo.name)
            .list()
            .head(head)
            .state(octocrab::params::State::Open)
            .send()
            .await?;

        Ok(prs.items.first().map(to_pull_request))
    }

    async fn default_branch(&self) -> Result<String> {
        let repo = self
            .client
            .repos(&self.repo.owner, &self.repo.name)
            .get()
            .await?;

        repo.default_branch
            .ok_or_else(|| Error::GitHubApi(format!("{} has no default branch", self.repo)))
    }

    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(&self.repo.owner, &self.repo.name)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(to_pull_request(&pr))
    }
}

//! Release execution
//!
//! Runs the planned release one stage at a time: clone, branch, generate,
//! push, open PR. The first failing stage aborts the run; nothing already
//! done (a pushed branch, written files) is rolled back.

use crate::config::ReleaseConfig;
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::formula::{ARCHIVE_FILE, generate_formula};
use crate::git::{GitRepo, ORIGIN};
use crate::process::CommandRunner;
use crate::release::{Phase, ProgressCallback, ReleaseContext, ReleasePlan};
use crate::types::{FormulaDescriptor, PullRequest};
use reqwest::Client;
use tracing::info;

/// Result of a completed release
#[derive(Debug, Clone)]
pub struct ReleaseResult {
    /// Released tag
    pub tag: String,
    /// Pushed branch
    pub branch: String,
    /// Rendered formulas
    pub formulas: Vec<FormulaDescriptor>,
    /// Opened pull request
    pub pull_request: PullRequest,
}

/// External collaborators of a release
pub struct ReleaseServices<'a> {
    /// Process runner for git
    pub runner: &'a dyn CommandRunner,
    /// HTTP client for archive downloads
    pub http: &'a Client,
    /// Forge for PR operations
    pub forge: &'a dyn ForgeService,
    /// Progress sink
    pub progress: &'a dyn ProgressCallback,
}

/// Execute a release plan
pub async fn execute_release(
    plan: &ReleasePlan,
    ctx: &ReleaseContext,
    services: &ReleaseServices<'_>,
) -> Result<ReleaseResult> {
    match run_stages(plan, ctx, services).await {
        Ok(result) => Ok(result),
        Err(e) => {
            services.progress.on_error(&e).await;
            Err(e)
        }
    }
}

async fn run_stages(
    plan: &ReleasePlan,
    ctx: &ReleaseContext,
    services: &ReleaseServices<'_>,
) -> Result<ReleaseResult> {
    let progress = services.progress;
    let config = &ctx.config;

    progress.on_phase(Phase::Staging).await;
    let repo = stage(services.runner, ctx).await?;

    progress.on_phase(Phase::Branching).await;
    repo.checkout_new_branch(&plan.branch).await?;
    progress
        .on_message(&format!("Switched to new branch {}", plan.branch))
        .await;

    progress.on_phase(Phase::Generating).await;
    let mut formulas = Vec::with_capacity(plan.formulas.len());
    for target in &plan.formulas {
        let descriptor = generate_formula(services.http, target, repo.path()).await?;
        progress.on_formula_written(&descriptor).await;
        formulas.push(descriptor);
    }

    progress.on_phase(Phase::Publishing).await;
    publish(&repo, config, plan).await?;

    progress.on_phase(Phase::OpeningPr).await;
    let pull_request = open_pull_request(services.forge, plan).await?;
    progress.on_pr_created(&pull_request).await;

    progress.on_phase(Phase::Complete).await;

    Ok(ReleaseResult {
        tag: plan.tag.clone(),
        branch: plan.branch.clone(),
        formulas,
        pull_request,
    })
}

/// Clone the tap into the context's workdir and set local commit identity
pub async fn stage<'a>(
    runner: &'a dyn CommandRunner,
    ctx: &ReleaseContext,
) -> Result<GitRepo<'a>> {
    let config = &ctx.config;
    let repo = GitRepo::clone_into(
        runner,
        &config.target_repo.https_url(),
        &ctx.workdir,
        &config.target_repo.name,
    )
    .await?;
    repo.set_identity(&config.git_email, &config.git_name).await?;
    Ok(repo)
}

/// Commit the generated formulas and push the release branch
///
/// The downloaded archive is explicitly unstaged so it never lands in the
/// commit.
pub async fn publish(repo: &GitRepo<'_>, config: &ReleaseConfig, plan: &ReleasePlan) -> Result<()> {
    repo.set_remote_url(ORIGIN, &config.target_repo.authenticated_url(&config.token))
        .await?;
    repo.add_all().await?;
    repo.unstage(ARCHIVE_FILE).await?;
    repo.commit(&plan.commit_message).await?;
    repo.push(ORIGIN, &plan.branch).await?;
    Ok(())
}

/// Open the release PR against the default branch
///
/// An already open PR for the branch is an error rather than a duplicate.
pub async fn open_pull_request(forge: &dyn ForgeService, plan: &ReleasePlan) -> Result<PullRequest> {
    if let Some(existing) = forge.find_existing_pr(&plan.branch).await? {
        return Err(Error::PullRequestExists {
            branch: plan.branch.clone(),
            url: existing.html_url,
        });
    }

    let base = forge.default_branch().await?;
    let pr = forge
        .create_pr(&plan.branch, &base, &plan.pr_title, &plan.pr_body)
        .await?;
    info!(number = pr.number, url = %pr.html_url, "pull request opened");
    Ok(pr)
}

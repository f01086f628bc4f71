//! Release command - publish versioned formulas for the latest tag

use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, spinner_style};
use anstream::{print, println};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tap_release::config::ReleaseConfig;
use tap_release::error::Result;
use tap_release::forge::GitHubService;
use tap_release::formula::http_client;
use tap_release::process::TokioCommandRunner;
use tap_release::release::{
    Phase, ProgressCallback, ReleaseContext, ReleasePlan, ReleaseServices, create_release_plan,
    execute_release, render_dry_run,
};

/// Run the release command
pub async fn run_release(path: &Path, dry_run: bool) -> Result<()> {
    // Configuration is validated before anything touches git or the network
    let config = ReleaseConfig::from_env()?;
    let ctx = ReleaseContext::new(config, path);
    let runner = TokioCommandRunner;
    let progress = CliProgress;

    progress.on_phase(Phase::Resolving).await;
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("git ls-remote {}", ctx.config.upstream_repo));
    spinner.enable_steady_tick(Duration::from_millis(80));
    let plan = create_release_plan(&ctx, &runner).await;
    spinner.finish_and_clear();
    let plan = plan?;
    progress.on_tag_resolved(&plan.tag).await;

    if dry_run {
        report_dry_run(&plan, &ctx);
        return Ok(());
    }

    let forge = GitHubService::new(&ctx.config.token, ctx.config.target_repo.clone())?;
    let http = http_client();
    let services = ReleaseServices {
        runner: &runner,
        http: &http,
        forge: &forge,
        progress: &progress,
    };

    let result = execute_release(&plan, &ctx, &services).await?;

    println!();
    println!(
        "Released {} with {} formula{}",
        result.tag.accent(),
        result.formulas.len(),
        if result.formulas.len() == 1 { "" } else { "s" }
    );

    Ok(())
}

/// Print what a release would do
fn report_dry_run(plan: &ReleasePlan, ctx: &ReleaseContext) {
    println!("{}", "Dry run - no changes will be made".warn().for_stdout());
    print!("{}", render_dry_run(plan, ctx));
}

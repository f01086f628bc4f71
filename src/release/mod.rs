//! Release pipeline
//!
//! Two phases:
//! 1. Planning - resolve the upstream tag and derive branch and file names
//! 2. Execution - clone, branch, generate formulas, push, open the PR

mod execute;
mod plan;
mod progress;

pub use execute::{
    ReleaseResult, ReleaseServices, execute_release, open_pull_request, publish, stage,
};
pub use plan::{
    ReleaseContext, ReleasePlan, branch_name, create_release_plan, render_dry_run,
};
pub use progress::{NoopProgress, Phase, ProgressCallback};

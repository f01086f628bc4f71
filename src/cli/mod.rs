//! CLI commands
//!
//! Command implementations for the `tap-release` binary.

mod auth;
mod progress;
mod release;
mod report;
mod style;

pub use auth::{AuthAction, run_auth};
pub use release::run_release;
pub use report::run_report;

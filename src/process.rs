//! External process execution
//!
//! Every shell-out goes through [`CommandRunner`] so call sites always see a
//! structured [`CommandOutput`] and tests can substitute a recording runner.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, -1 when terminated by a signal
    pub code: i32,
    /// Captured stdout (lossy UTF-8)
    pub stdout: String,
    /// Captured stderr (lossy UTF-8)
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status 0
    pub const fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program args...` in `cwd` and capture its output
    ///
    /// Only spawn failures are errors here; a non-zero exit is reported
    /// through [`CommandOutput::code`].
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;

    /// Run and turn a non-zero exit into [`Error::Command`]
    async fn run_checked(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput> {
        let output = self.run(program, args, cwd).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(Error::Command {
                command: display_command(program, args),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            })
        }
    }
}

/// Runner backed by `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        debug!(command = %display_command(program, args), cwd = %cwd.display(), "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .await?;

        let result = CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(code = result.code, "finished");
        Ok(result)
    }
}

/// Render a command line for logs and errors, masking URL credentials
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|a| redact(a)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn redact(arg: &str) -> String {
    match url::Url::parse(arg) {
        Ok(mut url) if !url.username().is_empty() || url.password().is_some() => {
            let _ = url.set_username("***");
            let _ = url.set_password(None);
            url.to_string()
        }
        _ => arg.to_string(),
    }
}

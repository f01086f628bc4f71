//! Recording command runner

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tap_release::error::Result;
use tap_release::process::{CommandOutput, CommandRunner};

/// One recorded invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Call {
    /// `program arg1 arg2 ...`
    pub fn line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Runner that never spawns anything
///
/// Every call succeeds with empty output unless a scripted response matches
/// the start of its command line.
#[derive(Default)]
pub struct MockRunner {
    responses: Mutex<Vec<(String, CommandOutput)>>,
    calls: Mutex<Vec<Call>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `stdout` to commands starting with `prefix`
    pub fn respond(&self, prefix: &str, stdout: &str) {
        self.responses.lock().unwrap().push((
            prefix.to_string(),
            CommandOutput {
                code: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ));
    }

    /// Fail commands starting with `prefix`
    pub fn fail(&self, prefix: &str, code: i32, stderr: &str) {
        self.responses.lock().unwrap().push((
            prefix.to_string(),
            CommandOutput {
                code,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        ));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded command lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.calls().iter().map(Call::line).collect()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        let call = Call {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            cwd: cwd.to_path_buf(),
        };
        let line = call.line();
        self.calls.lock().unwrap().push(call);

        let responses = self.responses.lock().unwrap();
        Ok(responses
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_default())
    }
}

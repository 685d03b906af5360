//! External command execution
//!
//! Every subprocess the scaffolder starts goes through [`CommandRunner`], so
//! the pipeline can be exercised with a recording runner instead of real
//! `git` and package manager processes.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tokio::process::Command;
use tracing::debug;

/// A command to run: program, arguments, working directory, extra environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<Utf8PathBuf>,
    env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Create a command for `program` with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the caller's working directory
    pub fn current_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Set an environment variable for the child process
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Utf8Path> {
        self.cwd.as_deref()
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.env
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a command that exited with code 0
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a command that exited with `code`
    pub fn failure(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Text worth showing on failure: stderr, or stdout when stderr is empty
    pub fn diagnostic(&self) -> &str {
        if self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `spec` and capture its output
    ///
    /// Returns Err only when the process could not be started; a non-zero
    /// exit is reported through [`CommandOutput::code`].
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput>;
}

/// Run `spec` and turn a non-zero exit into [`Error::CommandFailed`]
pub async fn run_checked(runner: &dyn CommandRunner, spec: &CommandSpec) -> Result<CommandOutput> {
    debug!("Running: {}", spec);
    let output = runner.run(spec).await?;

    if !output.is_success() {
        debug!("Command exited with {:?}: {}", output.code, spec);
        return Err(Error::command_failed(spec.to_string(), output.diagnostic()));
    }

    Ok(output)
}

/// [`CommandRunner`] backed by real child processes
///
/// Output is captured rather than inherited, so nothing the child prints
/// interferes with progress spinners.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        let mut cmd = Command::new(spec.program());
        cmd.args(spec.arguments()).stdin(std::process::Stdio::null());

        if let Some(dir) = spec.cwd() {
            cmd.current_dir(dir);
        }
        for (key, value) in spec.envs() {
            cmd.env(key, value);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::process_execution(format!("{}: {}", spec, e)))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display() {
        let spec = CommandSpec::new("git").args(["commit", "-m", "feat: init"]);
        assert_eq!(spec.to_string(), "git commit -m \"feat: init\"");

        let spec = CommandSpec::new("pnpm").arg("install");
        assert_eq!(spec.to_string(), "pnpm install");
    }

    #[test]
    fn test_command_spec_builder() {
        let spec = CommandSpec::new("git")
            .arg("init")
            .current_dir("/tmp/demo")
            .env("GIT_AUTHOR_NAME", "Dev");
        assert_eq!(spec.program(), "git");
        assert_eq!(spec.arguments(), ["init"]);
        assert_eq!(spec.cwd(), Some(Utf8Path::new("/tmp/demo")));
        assert_eq!(spec.envs(), [("GIT_AUTHOR_NAME".to_string(), "Dev".to_string())]);
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let output = CommandOutput::failure(128, "some stdout", "fatal: not found");
        assert_eq!(output.diagnostic(), "fatal: not found");

        let output = CommandOutput::failure(1, "ERR_PNPM_NO_LOCKFILE", "");
        assert_eq!(output.diagnostic(), "ERR_PNPM_NO_LOCKFILE");
    }

    #[test]
    fn test_signal_termination_is_failure() {
        let output = CommandOutput {
            code: None,
            ..Default::default()
        };
        assert!(!output.is_success());
    }

    #[tokio::test]
    async fn test_process_runner_missing_program() {
        let spec = CommandSpec::new("sprout-definitely-not-a-real-binary");
        let result = ProcessRunner.run(&spec).await;
        assert!(matches!(result, Err(Error::ProcessExecution(_))));
    }
}

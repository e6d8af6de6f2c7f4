// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::{Config, PushStrategy};
use crate::domain::PlannedCommit;
use crate::error::{Error, Result};

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Abstraction over external command invocation so the gating logic can be
/// tested without a real repository.
#[allow(async_fn_in_trait)] // executors are generic over concrete runners
pub trait CommandRunner {
    /// Run a program with arguments, capturing output.
    async fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput>;

    /// Run a command line through the platform shell.
    async fn run_shell(&self, command: &str) -> std::io::Result<CommandOutput>;
}

/// Production runner backed by `tokio::process::Command`.
pub struct ProcessRunner {
    work_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn run_shell(&self, command: &str) -> std::io::Result<CommandOutput> {
        #[cfg(unix)]
        let (shell, flag) = ("sh", "-c");
        #[cfg(windows)]
        let (shell, flag) = ("cmd", "/C");

        self.run(shell, &[flag, command]).await
    }
}

/// Outcome of one executor run.
///
/// Per-suggestion commit failures are recorded here, never raised as errors:
/// partial success is normal. A test or build failure only gates the push.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Headers of commits that were created.
    pub committed: Vec<String>,
    /// Headers of suggestions whose commit command failed.
    pub failed: Vec<String>,
    /// None when the test gate is disabled or never reached.
    pub tests_passed: Option<bool>,
    /// None when the build gate is disabled or never reached.
    pub build_passed: Option<bool>,
    pub pushed: bool,
    pub branch: Option<String>,
}

/// Sequentially stages and commits each suggestion, then runs the configured
/// test and build gates, then pushes.
///
/// Nothing is retried and nothing is rolled back; commits made before a
/// failed gate stay in place.
pub struct CommitExecutor<'a, R> {
    runner: &'a R,
    config: &'a Config,
    cancel: CancellationToken,
}

impl<'a, R: CommandRunner> CommitExecutor<'a, R> {
    pub fn new(runner: &'a R, config: &'a Config, cancel: CancellationToken) -> Self {
        Self {
            runner,
            config,
            cancel,
        }
    }

    pub async fn execute(&self, plan: &[PlannedCommit]) -> Result<RunReport> {
        let mut report = RunReport::default();

        for planned in plan {
            if self.cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            self.commit_one(planned, &mut report).await;
        }

        if report.committed.is_empty() {
            return Ok(report);
        }

        if self.config.auto_commit.require_tests {
            debug!(command = %self.config.test_command, "running test gate");
            let passed = self.gate(&self.config.test_command).await;
            report.tests_passed = Some(passed);
            if !passed {
                return Ok(report);
            }
        }

        if self.config.auto_commit.require_build {
            debug!(command = %self.config.build_command, "running build gate");
            let passed = self.gate(&self.config.build_command).await;
            report.build_passed = Some(passed);
            if !passed {
                return Ok(report);
            }
        }

        if self.config.push_strategy == PushStrategy::AfterSuccessfulBuild {
            self.push(&mut report).await;
        }

        Ok(report)
    }

    /// Stage and commit one suggestion. Staging failures are best-effort;
    /// a failed commit is recorded and the run moves on.
    async fn commit_one(&self, planned: &PlannedCommit, report: &mut RunReport) {
        for file in &planned.suggestion.files {
            let path = file.path_str();
            match self.runner.run("git", &["add", "--", &path]).await {
                Ok(out) if !out.success => {
                    warn!(path = %path, stderr = %out.stderr.trim(), "failed to stage file");
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "failed to stage file");
                }
                Ok(_) => {}
            }
        }

        let message = &planned.message;
        let mut args: Vec<&str> = vec!["commit", "-m", message.header.as_str()];
        if !message.body.is_empty() {
            args.push("-m");
            args.push(message.body.as_str());
        }
        if !message.footer.is_empty() {
            args.push("-m");
            args.push(message.footer.as_str());
        }

        match self.runner.run("git", &args).await {
            Ok(out) if out.success => {
                debug!(header = %message.header, "commit created");
                report.committed.push(message.header.clone());
            }
            Ok(out) => {
                warn!(header = %message.header, stderr = %out.stderr.trim(), "commit failed");
                report.failed.push(message.header.clone());
            }
            Err(e) => {
                warn!(header = %message.header, error = %e, "commit failed");
                report.failed.push(message.header.clone());
            }
        }
    }

    async fn gate(&self, command: &str) -> bool {
        match self.runner.run_shell(command).await {
            Ok(out) => {
                if !out.success {
                    warn!(command, stderr = %out.stderr.trim(), "gate command failed");
                }
                out.success
            }
            Err(e) => {
                warn!(command, error = %e, "gate command could not run");
                false
            }
        }
    }

    /// Resolve the current branch and push. Failures are logged; commits
    /// stay in place for a manual push.
    async fn push(&self, report: &mut RunReport) {
        let branch = match self
            .runner
            .run("git", &["rev-parse", "--abbrev-ref", "HEAD"])
            .await
        {
            Ok(out) if out.success => out.stdout.trim().to_string(),
            Ok(out) => {
                warn!(stderr = %out.stderr.trim(), "could not resolve current branch");
                return;
            }
            Err(e) => {
                warn!(error = %e, "could not resolve current branch");
                return;
            }
        };

        match self.runner.run("git", &["push", "origin", &branch]).await {
            Ok(out) if out.success => {
                report.pushed = true;
                report.branch = Some(branch);
            }
            Ok(out) => {
                warn!(branch = %branch, stderr = %out.stderr.trim(), "push failed");
                report.branch = Some(branch);
            }
            Err(e) => {
                warn!(branch = %branch, error = %e, "push failed");
                report.branch = Some(branch);
            }
        }
    }
}

// SPDX-License-Identifier: MIT

use std::io::IsTerminal;

use console::style;
use dialoguer::Confirm;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::{Config, PushStrategy};
use crate::domain::{ChangeStatus, CommitPlan, PlannedCommit};
use crate::error::{Error, Result};
use crate::services::classifier::Classifier;
use crate::services::executor::{CommitExecutor, ProcessRunner, RunReport};
use crate::services::git::GitService;
use crate::services::message::MessageSynthesizer;
use crate::services::planner::CommitPlanner;

pub struct App {
    cli: Cli,
    cancel_token: CancellationToken,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Setup Ctrl+C handler with CancellationToken
        let cancel = self.cancel_token.clone();
        tokio::spawn(async move {
            signal::ctrl_c().await.ok();
            cancel.cancel();
        });

        match &self.cli.command {
            Some(Commands::Init) => self.init(),
            Some(Commands::Config) => self.show_config(),
            Some(Commands::Completions { shell }) => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "autocommit", &mut std::io::stdout());
                Ok(())
            }
            Some(Commands::Analyze { json }) => self.analyze(*json).await,
            None => self.auto_commit().await,
        }
    }

    fn setup(&self) -> Result<(GitService, Config)> {
        let git = GitService::discover()?;
        git.check_state()?;
        let config = Config::load(&self.cli, git.work_dir())?;
        debug!(
            max_files_per_commit = config.chunking.max_files_per_commit,
            groups = config.chunking.logical_groups.len(),
            push_strategy = %config.push_strategy,
            "config loaded"
        );
        Ok((git, config))
    }

    /// Enumerate, classify, plan, and synthesize messages. Pure apart from
    /// the status enumeration; running it twice on the same tree yields the
    /// same plan.
    async fn build_plan(&self, git: &GitService, config: &Config) -> Result<CommitPlan> {
        let files = git.changed_files().await;
        if files.is_empty() {
            return Ok(CommitPlan {
                suggestions: Vec::new(),
            });
        }

        let classifier = Classifier::new(&config.chunking.logical_groups)?;
        let buckets = classifier.classify(files);
        debug!(categories = buckets.len(), "files classified");

        let planner = CommitPlanner::new(&config.chunking, &config.commit_conventions);
        let suggestions = planner.plan(&buckets);

        let synthesizer = MessageSynthesizer::new(&config.commit_template);
        let suggestions = suggestions
            .into_iter()
            .map(|suggestion| {
                let message = synthesizer.synthesize(&suggestion);
                PlannedCommit {
                    suggestion,
                    message,
                }
            })
            .collect();

        Ok(CommitPlan { suggestions })
    }

    async fn analyze(&self, json: bool) -> Result<()> {
        let (git, config) = self.setup()?;
        let plan = self.build_plan(&git, &config).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(());
        }

        if plan.is_empty() {
            self.print_info("Working tree clean, nothing to commit");
            return Ok(());
        }

        Self::display_plan(&plan);
        Ok(())
    }

    async fn auto_commit(&self) -> Result<()> {
        let (git, config) = self.setup()?;

        self.print_status("Analyzing working-tree changes...");
        let plan = self.build_plan(&git, &config).await?;

        if plan.is_empty() {
            self.print_info("Working tree clean, nothing to commit");
            return Ok(());
        }

        Self::display_plan(&plan);

        if self.cli.dry_run {
            return Ok(());
        }

        if self.cli.interactive && !self.confirm_plan(&plan)? {
            return Err(Error::Cancelled);
        }

        if self.cancel_token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let runner = ProcessRunner::new(git.work_dir());
        let executor = CommitExecutor::new(&runner, &config, self.cancel_token.clone());
        let report = executor.execute(&plan.suggestions).await?;

        self.report_outcome(&config, &report);
        Ok(())
    }

    fn confirm_plan(&self, plan: &CommitPlan) -> Result<bool> {
        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            self.print_warning("Not a terminal; proceeding without confirmation.");
            return Ok(true);
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Create {} commits?", plan.suggestions.len()))
            .default(true)
            .interact()?;
        Ok(confirmed)
    }

    fn report_outcome(&self, config: &Config, report: &RunReport) {
        for header in &report.committed {
            eprintln!("{} {}", style("✓").green().bold(), header);
        }
        for header in &report.failed {
            eprintln!("{} {} (commit failed)", style("✗").red().bold(), header);
        }

        if report.committed.is_empty() {
            self.print_warning("No commits were created.");
            return;
        }

        if report.tests_passed == Some(false) {
            self.print_warning("Tests failed. Commits created but not pushed.");
            self.print_info("Push manually once tests pass: git push");
            return;
        }
        if report.build_passed == Some(false) {
            self.print_warning("Build failed. Commits created but not pushed.");
            self.print_info("Push manually once the build passes: git push");
            return;
        }

        if report.pushed {
            let branch = report.branch.as_deref().unwrap_or("HEAD");
            eprintln!(
                "{} Pushed {} commits to origin/{}",
                style("✓").green().bold(),
                report.committed.len(),
                branch
            );
        } else if config.push_strategy == PushStrategy::AfterSuccessfulBuild {
            self.print_warning("Push failed. Push manually: git push");
        } else {
            self.print_info(&format!(
                "{} commits created (push_strategy = manual)",
                report.committed.len()
            ));
        }
    }

    fn display_plan(plan: &CommitPlan) {
        eprintln!();
        eprintln!(
            "{} {} commit suggestions:",
            style("→").cyan(),
            plan.suggestions.len()
        );
        eprintln!();

        for (i, planned) in plan.suggestions.iter().enumerate() {
            let s = &planned.suggestion;
            let file_count = s.files.len();
            let files_label = if file_count == 1 { "file" } else { "files" };

            eprintln!(
                "  Commit {}/{}: {}  [{} {}]",
                i + 1,
                plan.suggestions.len(),
                style(&planned.message.header).green(),
                file_count,
                files_label,
            );

            for file in &s.files {
                let marker = match file.status {
                    ChangeStatus::Added => "[+]",
                    ChangeStatus::Untracked => "[?]",
                    ChangeStatus::Modified => "[M]",
                    ChangeStatus::Renamed => "[R]",
                    ChangeStatus::Deleted => "[-]",
                };
                eprintln!("    {} {}", marker, file.path_str());
            }
            eprintln!();
        }
    }

    fn init(&self) -> Result<()> {
        let git = GitService::discover()?;
        let path = Config::create_default(git.work_dir())?;
        println!("Created config: {}", path.display());
        Ok(())
    }

    fn show_config(&self) -> Result<()> {
        let (_git, config) = self.setup()?;

        println!("Test command: {}", config.test_command);
        println!("Build command: {}", config.build_command);
        println!("Push strategy: {}", config.push_strategy);
        println!("Require tests: {}", config.auto_commit.require_tests);
        println!("Require build: {}", config.auto_commit.require_build);
        println!(
            "Max files per commit: {}",
            config.chunking.max_files_per_commit
        );
        println!();
        println!("Logical groups:");
        for group in &config.chunking.logical_groups {
            println!("  {}: {}", group.name, group.patterns.join(", "));
        }
        println!();
        println!("Scopes: {}", config.commit_conventions.scopes.join(", "));
        if !config.commit_template.footer.is_empty() {
            println!("Footer: {}", config.commit_template.footer);
        }
        Ok(())
    }

    // ─── Output Helpers ───

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

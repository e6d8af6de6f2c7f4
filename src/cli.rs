// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "autocommit")]
#[command(version)]
#[command(about = "Categorize changes and create conventional commits", long_about = None)]
pub struct Cli {
    /// Confirm the commit plan before executing it
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the commit plan without touching the repository
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path (default: .autocommit.toml in the repo root)
    #[arg(short, long, env = "AUTOCOMMIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the categorized commit plan without committing
    Analyze {
        /// Emit the plan as JSON instead of human-readable output
        #[arg(long)]
        json: bool,
    },
    /// Create a starter config file in the repository root
    Init,
    /// Show the resolved configuration
    Config,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

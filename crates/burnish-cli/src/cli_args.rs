use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "burnish", version, about = "Token-stream lint and auto-fix for PHP")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Config file (default: .burnish/burnish.json in the working directory)
    #[arg(long, global = true, env = "BURNISH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report violations without changing files
    Check {
        /// Files or directories (default: current directory)
        paths: Vec<PathBuf>,
        /// Drop a violation code entirely (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
    },

    /// Apply fixes until every file stabilizes
    Fix {
        /// Files or directories (default: current directory)
        paths: Vec<PathBuf>,
        /// Upper bound on passes per file
        #[arg(long)]
        max_passes: Option<u32>,
        /// Compute fixes without writing files
        #[arg(long)]
        dry_run: bool,
        /// Drop a violation code entirely (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
    },
}

//! burnish CLI: token-stream lint and auto-fix for PHP sources.
//!
//! `burnish check` reports violations; `burnish fix` applies fixes pass by
//! pass until each file stabilizes. See `burnish --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};
use commands::RunOptions;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let exit_code = match cli.command {
        Commands::Check { paths, suppress } => commands::check::run(RunOptions {
            json: cli.json,
            config: cli.config,
            paths,
            suppress,
        }),
        Commands::Fix {
            paths,
            max_passes,
            dry_run,
            suppress,
        } => commands::fix::run(
            RunOptions {
                json: cli.json,
                config: cli.config,
                paths,
                suppress,
            },
            max_passes,
            dry_run,
        ),
    };

    std::process::exit(exit_code);
}

//! assetline CLI - incremental asset bundling pipeline
//!
//! Usage: assetline <COMMAND>
//!
//! Commands:
//!   build     Run the configured pipeline once
//!   sync      Mirror a directory
//!   filter    Partition a tree by module shape
//!   prune     List unreachable modules
//!   classify  Print wrapped/plain per file

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            config,
            no_tree_shaking,
            source_maps,
        } => commands::build::cmd_build(
            &config,
            no_tree_shaking,
            source_maps,
            cli.json,
            cli.verbose,
        ),
        Commands::Sync {
            input,
            output,
            strategy,
        } => commands::sync::cmd_sync(&input, &output, strategy, cli.json, cli.verbose),
        Commands::Filter {
            input,
            output,
            include,
            scope,
        } => commands::filter::cmd_filter(&input, &output, include, &scope, cli.json, cli.verbose),
        Commands::Prune {
            input,
            name,
            entries,
        } => commands::prune::cmd_prune(&input, &name, entries, cli.json),
        Commands::Classify { files } => commands::classify::cmd_classify(&files, cli.json),
    }
}

/// Logs go to stderr so stdout stays parseable; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

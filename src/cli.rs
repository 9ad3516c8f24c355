use std::path::PathBuf;

use assetline::config::CONFIG_FILE_NAME;
use assetline::domain::value_objects::LinkPreference;
use clap::{Parser, Subcommand};

/// assetline - incremental asset bundling pipeline
#[derive(Parser, Debug)]
#[command(name = "assetline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout (for CI)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured pipeline once
    Build {
        /// Path to the config file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,

        /// Disable dead-module pruning regardless of config
        #[arg(long)]
        no_tree_shaking: bool,

        /// Emit a source map next to every bundle
        #[arg(long)]
        source_maps: bool,
    },

    /// Mirror a directory (symlinks when possible, copies otherwise)
    Sync {
        input: PathBuf,
        output: PathBuf,

        /// auto, symlink or copy
        #[arg(long, default_value = "auto")]
        strategy: LinkPreference,
    },

    /// Write the wrapped or non-wrapped partition of a tree
    Filter {
        input: PathBuf,
        output: PathBuf,

        /// Keep only wrapped modules (default drops them)
        #[arg(long)]
        include: bool,

        /// Globs to classify; other files pass through
        #[arg(long)]
        scope: Vec<String>,
    },

    /// List modules unreachable from the entry points
    Prune {
        input: PathBuf,

        /// Package name; its modules are always live
        #[arg(long)]
        name: String,

        /// Additional entry point module
        #[arg(long = "entry")]
        entries: Vec<String>,
    },

    /// Print whether each file is a wrapped module
    Classify {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

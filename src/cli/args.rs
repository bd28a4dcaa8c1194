//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Organizational hierarchy manager: move employees with their teams, undo and redo
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory searched for .orgtree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the hierarchy as a tree
    Show {
        /// Hierarchy file (default: configured `hierarchy`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Validate a hierarchy file
    Check {
        /// Hierarchy file (default: configured `hierarchy`)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Apply move/undo/redo operations and print the result
    Run {
        /// Hierarchy file (default: configured `hierarchy`)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Read operations from a script file
        #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "operations")]
        script: Option<PathBuf>,

        /// Also print the remaining undo and redo entries
        #[arg(long)]
        history: bool,

        /// Operations: move:<employee>:<supervisor>, <employee>-><supervisor>, undo, redo
        operations: Vec<String>,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

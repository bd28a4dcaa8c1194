//! Command dispatch

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{
    load_hierarchy, load_org_tree, parse_script, run_script, ApplicationError, IoResultExt,
    Operation,
};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{HistoryEntry, OrgTree};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let local_dir = cli.config_dir.clone().or_else(|| env::current_dir().ok());
    let settings = Settings::load(local_dir.as_deref())?;

    match &cli.command {
        Some(Commands::Show { file }) => cmd_show(&settings, file.as_deref()),
        Some(Commands::Check { file }) => cmd_check(&settings, file.as_deref()),
        Some(Commands::Run {
            file,
            script,
            history,
            operations,
        }) => cmd_run(
            &settings,
            file.as_deref(),
            script.as_deref(),
            operations,
            *history,
        ),
        Some(Commands::Config) => cmd_config(&settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| CliError::Usage(e.to_string()))?;
            Ok(())
        }
    }
}

/// Explicit file argument, falling back to the configured hierarchy.
fn resolve_hierarchy(settings: &Settings, file: Option<&Path>) -> CliResult<PathBuf> {
    file.map(Path::to_path_buf)
        .or_else(|| settings.hierarchy.clone())
        .ok_or_else(|| {
            CliError::Usage(
                "no hierarchy file given and none configured (set `hierarchy` or ORGTREE_HIERARCHY)"
                    .into(),
            )
        })
}

#[instrument(level = "debug", skip(settings))]
fn cmd_show(settings: &Settings, file: Option<&Path>) -> CliResult<()> {
    let path = resolve_hierarchy(settings, file)?;
    let org = load_org_tree(&path, settings.history_limit)?;
    output::info(&org.to_tree_string());
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_check(settings: &Settings, file: Option<&Path>) -> CliResult<()> {
    let path = resolve_hierarchy(settings, file)?;
    let root = load_hierarchy(&path)?;
    let org = OrgTree::new(root).map_err(ApplicationError::from)?;
    output::success(&format!(
        "{}: {} employees, depth {}",
        path.display(),
        org.len(),
        org.depth()
    ));
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn cmd_run(
    settings: &Settings,
    file: Option<&Path>,
    script: Option<&Path>,
    operations: &[String],
    show_history: bool,
) -> CliResult<()> {
    let path = resolve_hierarchy(settings, file)?;
    let ops: Vec<Operation> = match script {
        Some(script) => {
            let text = fs::read_to_string(script).with_path_context(script)?;
            parse_script(&text)?
        }
        None => parse_script(&operations.join(" "))?,
    };
    if ops.is_empty() {
        return Err(CliError::InvalidArgs("no operations given".into()));
    }
    debug!("operations: {}", ops.iter().join(" "));

    let mut org = load_org_tree(&path, settings.history_limit)?;
    run_script(&mut org, &ops)?;

    output::info(&org.to_tree_string());
    if show_history {
        print_history("undo", org.history().undo_entries());
        print_history("redo", org.history().redo_entries());
    }
    Ok(())
}

fn print_history(label: &str, entries: &[HistoryEntry]) {
    output::header(&format!("{} ({})", label, entries.len()));
    // Newest first, the order they would be applied in
    for entry in entries.iter().rev() {
        output::detail(entry);
    }
}

fn cmd_config(settings: &Settings) -> CliResult<()> {
    if let Some(path) = global_config_path() {
        output::header(&format!("# global config: {}", path.display()));
    }
    output::info(&settings.to_toml()?);
    Ok(())
}

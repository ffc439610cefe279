use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{explore, Narrator, Termination};
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::Settings;
use crate::domain::MansionBuilder;
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::default().with_overrides(&cli.overrides())?;
    if !settings.color {
        output::disable_colors();
    }

    match &cli.command {
        None | Some(Commands::Play) => _play(&settings),
        Some(Commands::Map) => _map(&settings),
        Some(Commands::Settings) => _settings(&settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

#[instrument(skip(settings))]
fn _play(settings: &Settings) -> CliResult<()> {
    let mut tree = MansionBuilder::new(settings.language).build()?;

    let result = explore(
        &tree,
        io::stdin().lock(),
        io::stdout().lock(),
        settings.explore_options(),
    );
    // Teardown happens on every path, including I/O failures
    let released = tree.destroy();
    debug!(released, "mansion torn down");

    let report = result?;
    match report.termination {
        Termination::InputClosed => output::warning("input closed before the exploration ended"),
        Termination::VisitLogFull => output::warning(&format!(
            "visit log reached its limit of {} rooms",
            report.visited.capacity()
        )),
        Termination::EmptyMap | Termination::ReachedLeaf | Termination::PlayerQuit => {}
    }
    output::info(Narrator::new(settings.language).farewell());
    Ok(())
}

#[instrument(skip(settings))]
fn _map(settings: &Settings) -> CliResult<()> {
    let mut tree = MansionBuilder::new(settings.language).build()?;
    output::header(&format!(
        "Mansion: {} rooms, depth {}",
        tree.len(),
        tree.depth()
    ));
    output::info(&tree.to_tree_string());
    tree.destroy();
    Ok(())
}

#[instrument(skip(settings))]
fn _settings(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

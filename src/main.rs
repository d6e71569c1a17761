//! Entry point: parse CLI and dispatch to command handlers.

use std::io;

use clap::Parser;
use fpl_entry::{
    cli::{Commands, Fpl, GetCmd},
    commands::{
        entry_data::{handle_league, handle_phase, handle_profile},
        history_data::handle_history,
    },
    core::Config,
    logging::setup_logging,
    HttpFetcher, Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Fpl::parse();
    setup_logging(app.verbose);

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(&config)?;
    let mut out = io::stdout().lock();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Profile { manager } => {
                let manager_id = config.resolve_manager_id(manager.manager_id)?;
                handle_profile(&fetcher, manager_id, &mut out)?
            }

            GetCmd::League { manager, index } => {
                let manager_id = config.resolve_manager_id(manager.manager_id)?;
                handle_league(&fetcher, manager_id, index, &mut out)?
            }

            GetCmd::Phase {
                manager,
                league,
                index,
            } => {
                let manager_id = config.resolve_manager_id(manager.manager_id)?;
                handle_phase(&fetcher, manager_id, league, index, &mut out)?
            }

            GetCmd::History { manager, gameweek } => {
                let manager_id = config.resolve_manager_id(manager.manager_id)?;
                handle_history(&fetcher, manager_id, gameweek, &mut out)?
            }
        },
    }

    Ok(())
}

//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Gameweek, ManagerId};

/// Manager selection shared between commands
#[derive(Debug, Args)]
pub struct ManagerArgs {
    /// Manager ID (or set `FPL_MANAGER_ID` env var).
    #[clap(long, short)]
    pub manager_id: Option<ManagerId>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Fetch a manager's profile, including their classic leagues.
    Profile {
        #[clap(flatten)]
        manager: ManagerArgs,
    },

    /// Fetch one of the manager's classic leagues by position (0-based).
    League {
        #[clap(flatten)]
        manager: ManagerArgs,

        /// Position in the manager's classic league list.
        #[clap(long, short, default_value_t = 0)]
        index: usize,
    },

    /// Fetch one active phase of one of the manager's classic leagues.
    Phase {
        #[clap(flatten)]
        manager: ManagerArgs,

        /// Position of the classic league (0-based).
        #[clap(long, short, default_value_t = 0)]
        league: usize,

        /// Position of the active phase within that league (0-based).
        #[clap(long, short, default_value_t = 0)]
        index: usize,
    },

    /// Fetch the manager's record for a single gameweek.
    History {
        #[clap(flatten)]
        manager: ManagerArgs,

        /// Gameweek number (1-based).
        #[clap(long, short, default_value_t = Gameweek::default())]
        gameweek: Gameweek,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-entry", about = "Fantasy Premier League manager data CLI")]
pub struct Fpl {
    /// Log requests and parsing at debug level.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Fantasy Premier League API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

//! Fantasy Premier League entry client
//!
//! A read-only Rust library for the public Fantasy Premier League API: given a manager
//! ID it fetches the manager's profile and season history and exposes them as validated,
//! navigable snapshots.
//!
//! ## Features
//!
//! - **Manager Profiles**: identity, region, scores and transfer state from `/api/entry/{id}/`
//! - **Classic Leagues**: bounds-checked access to every classic league the manager is in
//! - **Active Phases**: bounds-checked access to each league's scoring windows
//! - **Gameweek History**: one gameweek record selected from `/api/entry/{id}/history/`
//! - **Pluggable Transport**: everything goes through the [`fpl::Fetcher`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_entry::{core::Config, fpl::{HistoryLog, HttpFetcher, ManagerProfile}};
//!
//! # fn example() -> fpl_entry::Result<()> {
//! let fetcher = HttpFetcher::new(&Config::default())?;
//!
//! let profile = ManagerProfile::fetch(&fetcher, 7612489)?;
//! let league = profile.classic_league(0)?;
//! let phase = league.active_phase(0)?;
//! println!("{} is ranked {} in phase {}", league.name, phase.rank, phase.phase);
//!
//! let history = HistoryLog::fetch(&fetcher, 7612489, 1)?;
//! println!("Gameweek 1: {} points", history.record().points);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your manager ID to avoid passing it to every command:
//! ```bash
//! export FPL_MANAGER_ID=7612489
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod logging;

// Re-export commonly used types
pub use cli::types::{Gameweek, ManagerId};
pub use error::{FplError, Result};
pub use fpl::{
    ActivePhase, ClassicLeague, Fetcher, GameweekRecord, HistoryLog, HttpFetcher,
    ManagerProfile, RawResponse,
};

//! Profile, classic league and active phase commands

use std::io::Write;

use tracing::info;

use super::emit_json;
use crate::{fpl::Fetcher, ManagerId, ManagerProfile, Result};

/// Handle `get profile`
pub fn handle_profile<F, W>(fetcher: &F, manager_id: ManagerId, out: &mut W) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let profile = ManagerProfile::fetch_for(fetcher, manager_id)?;
    info!(
        %manager_id,
        team = profile.name(),
        classic_leagues = profile.number_of_classic_leagues(),
        "profile loaded"
    );
    emit_json(out, &profile)
}

/// Handle `get league`
pub fn handle_league<F, W>(
    fetcher: &F,
    manager_id: ManagerId,
    index: usize,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let profile = ManagerProfile::fetch_for(fetcher, manager_id)?;
    let league = profile.classic_league(index)?;
    emit_json(out, league)
}

/// Handle `get phase`
pub fn handle_phase<F, W>(
    fetcher: &F,
    manager_id: ManagerId,
    league: usize,
    index: usize,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let profile = ManagerProfile::fetch_for(fetcher, manager_id)?;
    let phase = profile.classic_league(league)?.active_phase(index)?;
    emit_json(out, phase)
}

//! Gameweek history command

use std::io::Write;

use super::emit_json;
use crate::{fpl::Fetcher, Gameweek, HistoryLog, ManagerId, Result};

/// Handle `get history`: print the selected gameweek's record.
pub fn handle_history<F, W>(
    fetcher: &F,
    manager_id: ManagerId,
    gameweek: Gameweek,
    out: &mut W,
) -> Result<()>
where
    F: Fetcher + ?Sized,
    W: Write,
{
    let history = HistoryLog::fetch_for(fetcher, manager_id, gameweek)?;
    emit_json(out, history.record())
}

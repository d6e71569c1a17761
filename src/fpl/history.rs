//! Per-gameweek history (`/api/entry/{id}/history/`).

use serde::Serialize;
use tracing::debug;

use crate::{
    error::{FplError, Result},
    fpl::{
        http::{fetch_json, history_path, Fetcher},
        types::{ChipPlay, GameweekRecord, HistoryPayload, PastSeason},
    },
    Gameweek, ManagerId,
};


/// A manager's season history with one gameweek selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryLog {
    manager_id: ManagerId,
    gameweek: Gameweek,
    history: HistoryPayload,
}

impl HistoryLog {
    /// Validate both inputs, fetch the history and select `gameweek`.
    ///
    /// `gameweek < 1` is [`FplError::InvalidGameweek`] and is reported before any request
    /// is made. A gameweek the manager has not reached yet is
    /// [`FplError::GameweekUnavailable`].
    pub fn fetch<F>(fetcher: &F, manager_id: i64, gameweek: i64) -> Result<Self>
    where
        F: Fetcher + ?Sized,
    {
        let manager_id = ManagerId::new(manager_id)?;
        let gameweek = Gameweek::new(gameweek)?;
        Self::fetch_for(fetcher, manager_id, gameweek)
    }

    /// Same as [`HistoryLog::fetch`] for already validated inputs.
    pub fn fetch_for<F: Fetcher + ?Sized>(
        fetcher: &F,
        manager_id: ManagerId,
        gameweek: Gameweek,
    ) -> Result<Self> {
        let history: HistoryPayload = fetch_json(fetcher, &history_path(manager_id))?;
        Self::from_payload(manager_id, gameweek, history)
    }

    fn from_payload(
        manager_id: ManagerId,
        gameweek: Gameweek,
        history: HistoryPayload,
    ) -> Result<Self> {
        let played = history.current.len();
        let record = history
            .current
            .get(gameweek.index())
            .ok_or(FplError::GameweekUnavailable {
                gameweek: gameweek.as_u64(),
                played,
            })?;

        if u64::from(record.event) != gameweek.as_u64() {
            return Err(FplError::malformed(format!(
                "history entry {} reports event {}",
                gameweek, record.event
            )));
        }

        debug!(%manager_id, %gameweek, played, "loaded manager history");
        Ok(Self {
            manager_id,
            gameweek,
            history,
        })
    }

    pub fn manager_id(&self) -> ManagerId {
        self.manager_id
    }

    pub fn gameweek(&self) -> Gameweek {
        self.gameweek
    }

    pub fn gameweeks_played(&self) -> usize {
        self.history.current.len()
    }

    /// The selected gameweek.
    pub fn record(&self) -> &GameweekRecord {
        &self.history.current[self.gameweek.index()]
    }

    /// Every gameweek played so far, in order.
    pub fn records(&self) -> &[GameweekRecord] {
        &self.history.current
    }

    pub fn past_seasons(&self) -> &[PastSeason] {
        &self.history.past
    }

    pub fn chips(&self) -> &[ChipPlay] {
        &self.history.chips
    }
}

//! A manager's profile (`/api/entry/{id}/`) and the classic leagues listed in it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    fpl::{
        http::{entry_path, fetch_json, Fetcher},
        league::select,
        types::{ClassicLeague, EntryPayload},
    },
    ManagerId, Result,
};


/// Snapshot of one manager's profile, taken by a single fetch.
///
/// The league list is fixed for the lifetime of the value; fetch again for fresh data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerProfile {
    manager_id: ManagerId,
    #[serde(flatten)]
    entry: EntryPayload,
}

impl ManagerProfile {
    /// Validate `manager_id`, fetch the profile and parse it.
    pub fn fetch<F: Fetcher + ?Sized>(fetcher: &F, manager_id: i64) -> Result<Self> {
        let manager_id = ManagerId::new(manager_id)?;
        Self::fetch_for(fetcher, manager_id)
    }

    /// Same as [`ManagerProfile::fetch`] for an already validated ID.
    pub fn fetch_for<F: Fetcher + ?Sized>(fetcher: &F, manager_id: ManagerId) -> Result<Self> {
        let entry: EntryPayload = fetch_json(fetcher, &entry_path(manager_id))?;

        if entry.id != u64::from(manager_id.as_u32()) {
            warn!(requested = %manager_id, returned = entry.id, "profile ID does not match request");
        }
        debug!(
            %manager_id,
            classic_leagues = entry.leagues.classic.len(),
            "loaded manager profile"
        );

        Ok(Self { manager_id, entry })
    }

    pub fn manager_id(&self) -> ManagerId {
        self.manager_id
    }

    pub fn id(&self) -> u64 {
        self.entry.id
    }

    pub fn joined_time(&self) -> DateTime<Utc> {
        self.entry.joined_time
    }

    pub fn started_event(&self) -> u32 {
        self.entry.started_event
    }

    pub fn player_first_name(&self) -> &str {
        &self.entry.player_first_name
    }

    pub fn player_last_name(&self) -> &str {
        &self.entry.player_last_name
    }

    pub fn player_region_id(&self) -> u32 {
        self.entry.player_region_id
    }

    pub fn player_region_name(&self) -> &str {
        &self.entry.player_region_name
    }

    pub fn player_region_iso_code_short(&self) -> &str {
        &self.entry.player_region_iso_code_short
    }

    pub fn player_region_iso_code_long(&self) -> Option<&str> {
        self.entry.player_region_iso_code_long.as_deref()
    }

    pub fn years_active(&self) -> u32 {
        self.entry.years_active
    }

    pub fn summary_overall_points(&self) -> i64 {
        self.entry.summary_overall_points
    }

    pub fn summary_overall_rank(&self) -> Option<u64> {
        self.entry.summary_overall_rank
    }

    pub fn summary_event_points(&self) -> i64 {
        self.entry.summary_event_points
    }

    pub fn summary_event_rank(&self) -> Option<u64> {
        self.entry.summary_event_rank
    }

    /// `None` before the season's first deadline.
    pub fn current_event(&self) -> Option<u32> {
        self.entry.current_event
    }

    /// Team name.
    pub fn name(&self) -> &str {
        &self.entry.name
    }

    pub fn name_change_blocked(&self) -> bool {
        self.entry.name_change_blocked
    }

    pub fn entered_events(&self) -> &[u32] {
        &self.entry.entered_events
    }

    pub fn kit(&self) -> Option<&str> {
        self.entry.kit.as_deref()
    }

    pub fn last_deadline_bank(&self) -> Option<u32> {
        self.entry.last_deadline_bank
    }

    pub fn last_deadline_value(&self) -> Option<u32> {
        self.entry.last_deadline_value
    }

    pub fn last_deadline_total_transfers(&self) -> u32 {
        self.entry.last_deadline_total_transfers
    }

    pub fn number_of_classic_leagues(&self) -> usize {
        self.entry.leagues.classic.len()
    }

    /// Classic leagues in the order the API listed them.
    pub fn classic_leagues(&self) -> &[ClassicLeague] {
        &self.entry.leagues.classic
    }

    /// The classic league at position `n`, valid for `0 <= n < number_of_classic_leagues()`.
    pub fn classic_league(&self, n: usize) -> Result<&ClassicLeague> {
        select("classic league", &self.entry.leagues.classic, n)
    }

    /// Name of the first classic league listed.
    ///
    /// Fails with [`crate::FplError::IndexOutOfRange`] when the manager is in no
    /// classic leagues. This is the one read that can fail after construction: a
    /// manager with no classic leagues is still a valid profile, so the empty case is
    /// reported here rather than by [`ManagerProfile::fetch`].
    pub fn favorite_team(&self) -> Result<&str> {
        self.classic_league(0).map(|league| league.name.as_str())
    }
}

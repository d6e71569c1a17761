use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;


/// Timestamp layout used throughout the FPL payloads, e.g. `2024-08-13T17:29:36.412458Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Parse an FPL timestamp. Anything but the exact microsecond UTC layout is rejected.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)?;
    Ok(naive.and_utc())
}

fn de_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("bad timestamp {raw:?}: {e}")))
}

// Nullable fields still have to be present in the payload; `deserialize_with`
// switches off serde's implicit `None` for a missing `Option` key.

/// One scoring window (e.g. a month) inside a classic league.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActivePhase {
    pub phase: u32,
    pub rank: u64,
    pub last_rank: u64,
    pub rank_sort: u64,
    pub total: i64,
    pub league_id: u64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub rank_count: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub entry_percentile_rank: Option<u32>,
}

/// A classic (non-cup) league the manager belongs to, as listed in their profile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassicLeague {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub short_name: Option<String>,
    #[serde(deserialize_with = "de_timestamp")]
    pub created: DateTime<Utc>,
    pub closed: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub rank: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub max_entries: Option<u64>,
    pub league_type: String,
    pub scoring: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub admin_entry: Option<u64>,
    pub start_event: u32,
    pub entry_can_leave: bool,
    pub entry_can_admin: bool,
    pub entry_can_invite: bool,
    pub has_cup: bool,
    #[serde(deserialize_with = "Option::deserialize")]
    pub cup_league: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub cup_qualified: Option<bool>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub rank_count: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub entry_percentile_rank: Option<u32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub entry_rank: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub entry_last_rank: Option<u64>,
    pub(crate) active_phases: Vec<ActivePhase>,
}

/// The `leagues` object of an entry payload. Only classic leagues are modelled.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct EntryLeagues {
    pub classic: Vec<ClassicLeague>,
}

/// Root of `GET /api/entry/{id}/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct EntryPayload {
    pub id: u64,
    #[serde(deserialize_with = "de_timestamp")]
    pub joined_time: DateTime<Utc>,
    pub started_event: u32,
    pub player_first_name: String,
    pub player_last_name: String,
    pub player_region_id: u32,
    pub player_region_name: String,
    pub player_region_iso_code_short: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub player_region_iso_code_long: Option<String>,
    pub years_active: u32,
    pub summary_overall_points: i64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub summary_overall_rank: Option<u64>,
    pub summary_event_points: i64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub summary_event_rank: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub current_event: Option<u32>,
    pub leagues: EntryLeagues,
    pub name: String,
    pub name_change_blocked: bool,
    pub entered_events: Vec<u32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub kit: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_deadline_bank: Option<u32>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_deadline_value: Option<u32>,
    pub last_deadline_total_transfers: u32,
}

/// One gameweek of the manager's current-season history.
///
/// `bank` and `value` are in tenths of a million, as the API reports them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameweekRecord {
    pub event: u32,
    pub points: i64,
    pub total_points: i64,
    #[serde(deserialize_with = "Option::deserialize")]
    pub rank: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub rank_sort: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub overall_rank: Option<u64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub percentile_rank: Option<u32>,
    pub bank: u32,
    pub value: u32,
    pub event_transfers: u32,
    pub event_transfers_cost: u32,
    pub points_on_bench: i64,
}

/// Final standing from a previous season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PastSeason {
    pub season_name: String,
    pub total_points: i64,
    pub rank: u64,
}

/// A chip played during the current season.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChipPlay {
    pub name: String,
    #[serde(deserialize_with = "de_timestamp")]
    pub time: DateTime<Utc>,
    pub event: u32,
}

/// Root of `GET /api/entry/{id}/history/`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct HistoryPayload {
    pub current: Vec<GameweekRecord>,
    #[serde(default)]
    pub past: Vec<PastSeason>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

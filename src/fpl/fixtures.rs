//! JSON fixtures and an in-memory fetcher shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::{
    error::Result,
    fpl::http::{Fetcher, RawResponse},
};

pub const MANAGER: i64 = 7612489;

pub fn phase_json(phase: u32, league_id: u64) -> Value {
    json!({
        "phase": phase,
        "rank": 12,
        "last_rank": 15,
        "rank_sort": 12,
        "total": 240 + phase,
        "league_id": league_id,
        "rank_count": 40,
        "entry_percentile_rank": 30
    })
}

pub fn league_json(id: u64, name: &str, phases: u32) -> Value {
    let active_phases: Vec<Value> = (1..=phases).map(|p| phase_json(p, id)).collect();
    json!({
        "id": id,
        "name": name,
        "short_name": null,
        "created": "2024-08-13T17:30:12.345678Z",
        "closed": false,
        "rank": null,
        "max_entries": null,
        "league_type": "x",
        "scoring": "c",
        "admin_entry": 7612489,
        "start_event": 1,
        "entry_can_leave": true,
        "entry_can_admin": true,
        "entry_can_invite": true,
        "has_cup": true,
        "cup_league": null,
        "cup_qualified": null,
        "rank_count": 40,
        "entry_percentile_rank": 30,
        "active_phases": active_phases,
        "entry_rank": 12,
        "entry_last_rank": 15
    })
}

pub fn entry_json(id: i64, leagues: Vec<Value>) -> Value {
    json!({
        "id": id,
        "joined_time": "2024-08-13T17:29:36.412458Z",
        "started_event": 1,
        "favourite_team": 14,
        "player_first_name": "Ricky",
        "player_last_name": "Kimani",
        "player_region_id": 112,
        "player_region_name": "Kenya",
        "player_region_iso_code_short": "KE",
        "player_region_iso_code_long": "KEN",
        "years_active": 3,
        "summary_overall_points": 612,
        "summary_overall_rank": 1203456,
        "summary_event_points": 58,
        "summary_event_rank": 2345678,
        "current_event": 10,
        "leagues": {
            "classic": leagues,
            "h2h": [],
            "cup": { "matches": [], "status": {}, "cup_league": null },
            "cup_matches": []
        },
        "name": "Kimani XI",
        "name_change_blocked": false,
        "entered_events": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        "kit": null,
        "last_deadline_bank": 15,
        "last_deadline_value": 1012,
        "last_deadline_total_transfers": 9
    })
}

pub fn gameweek_json(event: u32) -> Value {
    let total_points: u32 = (1..=event).map(|e| 50 + e).sum();
    json!({
        "event": event,
        "points": 50 + event,
        "total_points": total_points,
        "rank": 1000000 + event,
        "rank_sort": 1000000 + event,
        "overall_rank": 2000000 - event,
        "percentile_rank": 20,
        "bank": 5,
        "value": 1000 + event,
        "event_transfers": 1,
        "event_transfers_cost": 0,
        "points_on_bench": 4
    })
}

pub fn history_json(played: u32) -> Value {
    let current: Vec<Value> = (1..=played).map(gameweek_json).collect();
    json!({
        "current": current,
        "past": [
            { "season_name": "2023/24", "total_points": 2201, "rank": 845123 }
        ],
        "chips": [
            { "name": "wildcard", "time": "2024-09-27T18:02:11.120044Z", "event": 6 }
        ]
    })
}

/// Serves canned responses by path and records every path it was asked for.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, RawResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: &str, body: &Value) -> Self {
        self.with_response(path, RawResponse::new(200, body.to_string()))
    }

    pub fn with_response(mut self, path: &str, response: RawResponse) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for StubFetcher {
    fn fetch(&self, path: &str) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(path.to_string());
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, "{\"detail\":\"Not found.\"}")))
    }
}

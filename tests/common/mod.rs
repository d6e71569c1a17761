//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use fpl_entry::{Fetcher, RawResponse, Result};
use serde_json::{json, Value};

pub fn league(id: u64, name: &str, phases: u32) -> Value {
    let active_phases: Vec<Value> = (1..=phases)
        .map(|phase| {
            json!({
                "phase": phase,
                "rank": 3,
                "last_rank": 4,
                "rank_sort": 3,
                "total": 100 * phase,
                "league_id": id,
                "rank_count": null,
                "entry_percentile_rank": null
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "short_name": "league",
        "created": "2024-07-20T11:04:55.172301Z",
        "closed": false,
        "rank": null,
        "max_entries": null,
        "league_type": "s",
        "scoring": "c",
        "admin_entry": null,
        "start_event": 1,
        "entry_can_leave": false,
        "entry_can_admin": false,
        "entry_can_invite": false,
        "has_cup": false,
        "cup_league": null,
        "cup_qualified": null,
        "rank_count": 9876543,
        "entry_percentile_rank": 45,
        "active_phases": active_phases,
        "entry_rank": 1203456,
        "entry_last_rank": 1300000
    })
}

pub fn entry(id: i64, leagues: Vec<Value>) -> Value {
    json!({
        "id": id,
        "joined_time": "2024-08-01T08:15:00.000000Z",
        "started_event": 1,
        "favourite_team": null,
        "player_first_name": "Test",
        "player_last_name": "Manager",
        "player_region_id": 241,
        "player_region_name": "England",
        "player_region_iso_code_short": "EN",
        "player_region_iso_code_long": "ENG",
        "years_active": 1,
        "summary_overall_points": 540,
        "summary_overall_rank": 1203456,
        "summary_event_points": 47,
        "summary_event_rank": 3000000,
        "current_event": 10,
        "leagues": { "classic": leagues, "h2h": [], "cup_matches": [] },
        "name": "Test XI",
        "name_change_blocked": false,
        "entered_events": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        "kit": null,
        "last_deadline_bank": 0,
        "last_deadline_value": 1000,
        "last_deadline_total_transfers": 4
    })
}

pub fn history(played: u32) -> Value {
    let current: Vec<Value> = (1..=played)
        .map(|event| {
            json!({
                "event": event,
                "points": 54,
                "total_points": 54 * event,
                "rank": null,
                "rank_sort": null,
                "overall_rank": 1203456,
                "percentile_rank": null,
                "bank": 3,
                "value": 1000,
                "event_transfers": 0,
                "event_transfers_cost": 0,
                "points_on_bench": 6
            })
        })
        .collect();
    json!({ "current": current, "past": [], "chips": [] })
}

/// Canned responses by path; counts requests.
#[derive(Default)]
pub struct FakeApi {
    routes: HashMap<String, RawResponse>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(path.to_string(), RawResponse::new(status, body));
        self
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.route(path, 200, body.to_string())
    }
}

impl Fetcher for FakeApi {
    fn fetch(&self, path: &str) -> Result<RawResponse> {
        self.requests.borrow_mut().push(path.to_string());
        Ok(self
            .routes
            .get(path)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, "")))
    }
}

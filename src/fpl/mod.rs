//! Fantasy Premier League data access: fetch, validate and navigate a manager's data.

pub mod entry;
pub mod history;
pub mod http;
pub mod league;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entry::ManagerProfile;
pub use history::HistoryLog;
pub use http::{Fetcher, HttpFetcher, RawResponse};
pub use types::{ActivePhase, ChipPlay, ClassicLeague, GameweekRecord, PastSeason};

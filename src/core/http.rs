//! HTTP utilities for FPL API communication

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

pub const USER_AGENT: &str = concat!("fpl-entry/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every FPL request. The API is public, so no cookies.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

//! Transport seam for the FPL API.
//!
//! The entity constructors only ever see a [`Fetcher`]: something that turns an API
//! path into a status code and a body. [`HttpFetcher`] is the reqwest-backed
//! implementation; tests substitute in-memory fetchers.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    core::{config::Config, http::default_headers, http::USER_AGENT},
    error::FplError,
    ManagerId, Result,
};


/// Public root of the Fantasy Premier League API.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com";

/// Status and body of a single GET, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one blocking GET for a path relative to the API root.
pub trait Fetcher {
    fn fetch(&self, path: &str) -> Result<RawResponse>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, path: &str) -> Result<RawResponse> {
        (**self).fetch(path)
    }
}

/// `/api/entry/{id}/`
pub fn entry_path(manager_id: ManagerId) -> String {
    format!("/api/entry/{manager_id}/")
}

/// `/api/entry/{id}/history/`
pub fn history_path(manager_id: ManagerId) -> String {
    format!("/api/entry/{manager_id}/history/")
}

/// Fetch `path` and deserialize the body into `T`.
///
/// Any status other than 200 is a [`FplError::Transport`]. A body that is not a JSON
/// object, or that does not match `T`, is a [`FplError::MalformedResponse`].
pub fn fetch_json<T, F>(fetcher: &F, path: &str) -> Result<T>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let response = fetcher.fetch(path)?;
    if response.status != 200 {
        warn!(path, status = response.status, "FPL API returned a non-success status");
        return Err(FplError::status(response.status));
    }

    let value: Value = serde_json::from_str(&response.body)
        .map_err(|e| FplError::malformed(format!("response is not JSON: {e}")))?;
    if !value.is_object() {
        return Err(FplError::malformed("expected a JSON object at the top level"));
    }

    debug!(path, bytes = response.body.len(), "parsed FPL response");
    Ok(serde_json::from_value(value)?)
}

/// Blocking reqwest client bound to an API root.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(FplError::unreachable)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<RawResponse> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(FplError::unreachable)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().map_err(FplError::unreachable)?;

        // Error bodies are never parsed, so only a success body has to be valid UTF-8.
        let body = if status == 200 {
            String::from_utf8(bytes.to_vec())
                .map_err(|e| FplError::malformed(format!("response is not UTF-8: {e}")))?
        } else {
            String::from_utf8_lossy(&bytes).into_owned()
        };

        Ok(RawResponse { status, body })
    }
}

//! Environment-driven configuration.
//!
//! Only the binary and [`crate::fpl::http::HttpFetcher`] read configuration; the entity
//! constructors never do.

use std::time::Duration;

use crate::{error::FplError, fpl::http::FPL_BASE_URL, ManagerId, Result};

pub const MANAGER_ID_ENV_VAR: &str = "FPL_MANAGER_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "FPL_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    /// Fallback manager for commands run without `--manager-id`.
    pub manager_id: Option<ManagerId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: FPL_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            manager_id: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back to defaults;
    /// set but unparseable keys are an error.
    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|s| !s.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|_| FplError::InvalidConfig {
                key: TIMEOUT_ENV_VAR.to_string(),
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(MANAGER_ID_ENV_VAR) {
            config.manager_id = Some(raw.parse::<ManagerId>()?);
        }

        Ok(config)
    }

    /// Prefer an explicit manager ID, otherwise fall back to `FPL_MANAGER_ID`.
    pub fn resolve_manager_id(&self, manager_id: Option<ManagerId>) -> Result<ManagerId> {
        manager_id
            .or(self.manager_id)
            .ok_or_else(|| FplError::MissingManagerId {
                env_var: MANAGER_ID_ENV_VAR.to_string(),
            })
    }
}

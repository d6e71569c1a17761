//! ID types for the Fantasy Premier League API.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for FPL manager (entry) IDs.
///
/// A manager ID is a positive integer of exactly seven decimal digits. Construction
/// is the only place that shape is checked, so every `ManagerId` in the program is valid.
///
/// # Examples
///
/// ```rust
/// use fpl_entry::ManagerId;
///
/// let manager_id = ManagerId::new(7612489).unwrap();
/// assert_eq!(manager_id.as_u32(), 7612489);
/// assert_eq!(manager_id.to_string(), "7612489");
/// assert!(ManagerId::new(123456).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ManagerId(u32);

impl ManagerId {
    pub const DIGITS: usize = 7;

    /// Validate `id` and wrap it.
    pub fn new(id: i64) -> Result<Self> {
        let rendered = id.to_string();
        if rendered.len() != Self::DIGITS || id <= 0 {
            return Err(FplError::InvalidIdentifier { value: rendered });
        }
        Ok(Self(id as u32))
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ManagerId {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let id = s.trim().parse::<i64>().map_err(|_| FplError::InvalidIdentifier {
            value: s.to_string(),
        })?;
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for ManagerId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        ManagerId::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Type-safe wrapper for gameweek numbers (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Gameweek(u64);

impl Gameweek {
    /// Reject anything below gameweek 1.
    ///
    /// This only checks the structural lower bound. There is no upper bound here: whether
    /// the manager has actually played that many gameweeks is only known once their
    /// history has been fetched.
    pub fn new(gameweek: i64) -> Result<Self> {
        u64::try_from(gameweek)
            .ok()
            .filter(|&g| g >= 1)
            .map(Self)
            .ok_or_else(|| FplError::InvalidGameweek {
                value: gameweek.to_string(),
            })
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Zero-based position of this gameweek in a history list. Saturates on targets
    /// where the gameweek does not fit in `usize`, which no list can reach anyway.
    pub fn index(&self) -> usize {
        usize::try_from(self.0 - 1).unwrap_or(usize::MAX)
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        let gameweek = s.trim().parse::<i64>().map_err(|_| FplError::InvalidGameweek {
            value: s.to_string(),
        })?;
        Self::new(gameweek)
    }
}

//! Error types for the FPL entry client

use std::fmt;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("Invalid manager ID {value}: a manager ID must be a 7-digit integer")]
    InvalidIdentifier { value: String },

    #[error("Invalid gameweek {value}: gameweek must be an integer greater than or equal to 1")]
    InvalidGameweek { value: String },

    /// The request did not produce a 200 response. `status` is `None` when no response
    /// arrived at all (connection refused, TLS failure, timeout, broken body).
    #[error("Failed to retrieve data. {detail}")]
    Transport { status: Option<u16>, detail: String },

    #[error("Invalid response format: {reason}")]
    MalformedResponse { reason: String },

    #[error("{what} index {index} is out of range: {}", describe_range(0, .len))]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Gameweek {gameweek} is not available: {}", describe_range(1, .played))]
    GameweekUnavailable { gameweek: u64, played: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manager ID not provided and {env_var} environment variable not set")]
    MissingManagerId { env_var: String },

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}

impl FplError {
    /// A response arrived with a non-success status.
    pub fn status(status: u16) -> Self {
        FplError::Transport {
            status: Some(status),
            detail: format!("Status code: {status}"),
        }
    }

    /// No usable response arrived.
    pub fn unreachable(cause: impl fmt::Display) -> Self {
        FplError::Transport {
            status: None,
            detail: cause.to_string(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        FplError::MalformedResponse {
            reason: reason.into(),
        }
    }
}

/// Render the inclusive range of valid positions for a list of `count` entries
/// whose first position is `first`.
fn describe_range(first: usize, count: &usize) -> String {
    let count = *count;
    if count == 0 {
        "no entries available".to_string()
    } else {
        format!("valid range is {}..{}", first, first + count - 1)
    }
}

impl From<serde_json::Error> for FplError {
    fn from(err: serde_json::Error) -> Self {
        FplError::malformed(err.to_string())
    }
}

impl From<chrono::ParseError> for FplError {
    fn from(err: chrono::ParseError) -> Self {
        FplError::malformed(format!("bad timestamp: {err}"))
    }
}

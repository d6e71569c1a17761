//! Core utilities for the FPL entry client
//!
//! - `config`: environment-driven settings for the binary and HTTP fetcher
//! - `http`: request headers shared by every API call

pub mod config;
pub mod http;

pub use config::Config;

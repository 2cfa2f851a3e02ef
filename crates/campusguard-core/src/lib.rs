//! CampusGuard Core — shared error type and server configuration.

pub mod config;
pub mod error;

pub use config::GuardConfig;
pub use error::{Error, Result};

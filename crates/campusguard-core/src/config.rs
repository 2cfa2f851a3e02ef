//! Server configuration from the environment.

use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Top-level CampusGuard configuration.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Interface to bind.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// JSON moderation policy. `None` means the built-in policy.
    pub policy_file: Option<PathBuf>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            policy_file: None,
        }
    }
}

impl GuardConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT value {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.into());

        let policy_file = lookup("CAMPUSGUARD_POLICY")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            policy_file,
        }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

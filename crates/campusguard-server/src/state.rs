//! Shared application state.

use campusguard_core::{GuardConfig, Result};
use campusguard_scan::{ModerationPolicy, Moderator};

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: GuardConfig,
    pub moderator: Moderator,
}

impl AppState {
    pub fn new(config: GuardConfig, policy: ModerationPolicy) -> Self {
        Self {
            config,
            moderator: Moderator::new(policy),
        }
    }

    /// Build state, loading the policy file named in the configuration.
    pub fn from_config(config: GuardConfig) -> Result<Self> {
        let policy = ModerationPolicy::load_or_default(config.policy_file.as_deref())?;
        Ok(Self::new(config, policy))
    }
}

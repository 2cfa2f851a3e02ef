//! Moderation policy — keyword tables, PII profile, thresholds and limits as data.
//!
//! A policy file is JSON. Every section is optional and falls back to the
//! built-in defaults:
//!
//! ```json
//! {
//!   "keywords": [{ "category": "self_harm", "terms": ["suicide"] }],
//!   "pii_profile": "full",
//!   "thresholds": { "auto_reject": 0.9, "auto_approve": 0.3, "max_keyword_matches": 3 },
//!   "limits": { "max_post_length": 1000, "max_comment_length": 500 }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use campusguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::keywords::KeywordTable;
use crate::pii::PiiProfile;
use crate::submission::ContentLimits;
use crate::verdict::Thresholds;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationPolicy {
    pub keywords: KeywordTable,
    pub pii_profile: PiiProfile,
    pub thresholds: Thresholds,
    pub limits: ContentLimits,
}

impl ModerationPolicy {
    /// Parse and validate a JSON policy document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let policy: ModerationPolicy = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid policy: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let policy = Self::from_json_str(&json)?;
        info!(
            "Loaded moderation policy from {} ({} terms, {:?} PII profile)",
            path.display(),
            policy.keywords.term_count(),
            policy.pii_profile
        );
        Ok(policy)
    }

    /// Load from `path` if given, otherwise use the built-in policy.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                info!("Using built-in moderation policy");
                Ok(Self::default())
            }
        }
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        for (name, value) in [("auto_reject", t.auto_reject), ("auto_approve", t.auto_approve)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if t.auto_approve > t.auto_reject {
            return Err(Error::Config(format!(
                "auto_approve ({}) must not exceed auto_reject ({})",
                t.auto_approve, t.auto_reject
            )));
        }
        if t.max_keyword_matches == 0 {
            return Err(Error::Config("max_keyword_matches must be at least 1".into()));
        }

        let mut seen = HashSet::new();
        for group in self.keywords.groups() {
            if !seen.insert(group.category) {
                return Err(Error::Config(format!(
                    "category {} is declared more than once",
                    group.category
                )));
            }
            if group.terms.iter().any(|term| term.trim().is_empty()) {
                return Err(Error::Config(format!(
                    "category {} contains an empty term",
                    group.category
                )));
            }
        }

        if self.limits.max_post_length == 0 || self.limits.max_comment_length == 0 {
            return Err(Error::Config("content limits must be positive".into()));
        }

        Ok(())
    }

    /// JSON summary of the active policy, without the term lists themselves.
    pub fn summary(&self) -> serde_json::Value {
        let categories: Vec<serde_json::Value> = self
            .keywords
            .groups()
            .iter()
            .map(|g| {
                serde_json::json!({
                    "category": g.category,
                    "terms": g.terms.len(),
                })
            })
            .collect();

        serde_json::json!({
            "categories": categories,
            "termCount": self.keywords.term_count(),
            "piiProfile": self.pii_profile,
            "piiTypes": self.pii_profile.types(),
            "thresholds": self.thresholds,
            "limits": self.limits,
        })
    }
}

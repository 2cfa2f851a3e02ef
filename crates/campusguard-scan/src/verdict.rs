//! Verdict resolution — a priority-ordered decision table over scan results.

use serde::{Deserialize, Serialize};

use crate::keywords::{Category, KeywordScanResult};
use crate::pii::PiiScanResult;

pub const DEFAULT_AUTO_REJECT: f64 = 0.9;
pub const DEFAULT_AUTO_APPROVE: f64 = 0.3;
pub const DEFAULT_MAX_KEYWORD_MATCHES: usize = 3;

/// Final moderation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Approved,
    Review,
    Flagged,
    Rejected,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationStatus::Approved => "approved",
            ModerationStatus::Review => "review",
            ModerationStatus::Flagged => "flagged",
            ModerationStatus::Rejected => "rejected",
        }
    }

    /// Status stored on the post/comment row. Anything that still needs a
    /// human stays pending.
    pub fn ai_scan_status(&self) -> AiScanStatus {
        match self {
            ModerationStatus::Approved => AiScanStatus::Approved,
            ModerationStatus::Rejected => AiScanStatus::Rejected,
            ModerationStatus::Review | ModerationStatus::Flagged => AiScanStatus::Pending,
        }
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted scan status of a post or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiScanStatus {
    Pending,
    Approved,
    Rejected,
}

/// Subset of a verdict that callers write alongside the content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub ai_scan_status: AiScanStatus,
    pub ai_scan_confidence: f64,
}

/// Moderation decision with its justification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationVerdict {
    pub status: ModerationStatus,
    pub reason: String,
    pub confidence: f64,
}

impl ModerationVerdict {
    fn new(status: ModerationStatus, reason: impl Into<String>, confidence: f64) -> Self {
        Self {
            status,
            reason: reason.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn scan_record(&self) -> ScanRecord {
        ScanRecord {
            ai_scan_status: self.status.ai_scan_status(),
            ai_scan_confidence: self.confidence,
        }
    }
}

/// Tunable cutoffs for the decision table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Keyword confidence at or above which content is rejected outright.
    pub auto_reject: f64,
    /// Keyword confidence at or above which content goes to human review.
    pub auto_approve: f64,
    /// Keyword hits at which confidence saturates at 1.0.
    pub max_keyword_matches: usize,
    /// Route self-harm matches to `flagged` instead of the confidence rules.
    pub escalate_self_harm: bool,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            auto_reject: DEFAULT_AUTO_REJECT,
            auto_approve: DEFAULT_AUTO_APPROVE,
            max_keyword_matches: DEFAULT_MAX_KEYWORD_MATCHES,
            escalate_self_harm: true,
        }
    }
}

impl Thresholds {
    /// Combine scan results into a verdict. First matching rule wins.
    pub fn resolve(&self, keywords: &KeywordScanResult, pii: &PiiScanResult) -> ModerationVerdict {
        if pii.has_pii {
            return ModerationVerdict::new(
                ModerationStatus::Rejected,
                "Contains personal information",
                1.0,
            );
        }

        if self.escalate_self_harm
            && keywords.flagged
            && keywords.category == Some(Category::SelfHarm)
        {
            return ModerationVerdict::new(
                ModerationStatus::Flagged,
                "Self-harm content detected",
                keywords.confidence,
            );
        }

        if keywords.confidence >= self.auto_reject {
            return ModerationVerdict::new(
                ModerationStatus::Rejected,
                format!("High confidence violation ({})", keywords.category_label()),
                keywords.confidence,
            );
        }

        if keywords.confidence >= self.auto_approve {
            return ModerationVerdict::new(
                ModerationStatus::Review,
                format!("Requires human review ({})", keywords.category_label()),
                keywords.confidence,
            );
        }

        ModerationVerdict::new(
            ModerationStatus::Approved,
            "No violations detected",
            1.0 - keywords.confidence,
        )
    }
}

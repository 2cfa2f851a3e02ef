//! Moderator — runs both scanners and the resolver under one policy.

use campusguard_core::Result;
use serde::Serialize;
use tracing::debug;

use crate::keywords::KeywordScanResult;
use crate::pii::{PiiDetector, PiiScanResult};
use crate::policy::ModerationPolicy;
use crate::submission::Submission;
use crate::verdict::{ModerationVerdict, ScanRecord};

/// Scan details returned to callers alongside the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationDetails {
    pub keywords_found: Vec<String>,
    pub category: String,
    pub has_pii: bool,
}

/// Wire shape of a moderation result: the verdict flattened with its details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationReport {
    #[serde(flatten)]
    pub verdict: ModerationVerdict,
    pub details: ModerationDetails,
}

/// Verdict plus the scan results it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationOutcome {
    pub verdict: ModerationVerdict,
    pub keywords: KeywordScanResult,
    pub pii: PiiScanResult,
}

impl ModerationOutcome {
    pub fn details(&self) -> ModerationDetails {
        ModerationDetails {
            keywords_found: self.keywords.matches.clone(),
            category: self.keywords.category_label().to_string(),
            has_pii: self.pii.has_pii,
        }
    }

    pub fn report(&self) -> ModerationReport {
        ModerationReport {
            verdict: self.verdict.clone(),
            details: self.details(),
        }
    }

    pub fn scan_record(&self) -> ScanRecord {
        self.verdict.scan_record()
    }
}

/// Shared, immutable moderation engine.
#[derive(Debug, Clone)]
pub struct Moderator {
    policy: ModerationPolicy,
    pii_detector: PiiDetector,
}

impl Moderator {
    pub fn new(policy: ModerationPolicy) -> Self {
        let pii_detector = PiiDetector::new(policy.pii_profile);
        Self {
            policy,
            pii_detector,
        }
    }

    pub fn policy(&self) -> &ModerationPolicy {
        &self.policy
    }

    pub fn scan_keywords(&self, text: &str) -> KeywordScanResult {
        self.policy
            .keywords
            .scan(text, self.policy.thresholds.max_keyword_matches)
    }

    pub fn scan_pii(&self, text: &str) -> PiiScanResult {
        self.pii_detector.scan(text)
    }

    pub fn resolve(&self, keywords: &KeywordScanResult, pii: &PiiScanResult) -> ModerationVerdict {
        self.policy.thresholds.resolve(keywords, pii)
    }

    /// Moderate validated content.
    pub fn moderate(&self, submission: &Submission) -> ModerationOutcome {
        debug!(content_type = ?submission.content_type(), "Moderating submission");
        self.moderate_text(submission.content())
    }

    /// Moderate raw text. The caller is responsible for length limits.
    pub fn moderate_text(&self, text: &str) -> ModerationOutcome {
        let keywords = self.scan_keywords(text);
        let pii = self.scan_pii(text);
        let verdict = self.resolve(&keywords, &pii);

        debug!(
            status = %verdict.status,
            category = keywords.category_label(),
            matches = keywords.match_count,
            pii_types = pii.types.len(),
            "Moderation verdict"
        );

        ModerationOutcome {
            verdict,
            keywords,
            pii,
        }
    }

    /// Validate a `{ content, type }` body against the policy limits, then moderate it.
    pub fn moderate_request(&self, body: &serde_json::Value) -> Result<ModerationOutcome> {
        let submission = Submission::from_json(body, &self.policy.limits)?;
        Ok(self.moderate(&submission))
    }
}

impl Default for Moderator {
    fn default() -> Self {
        Self::new(ModerationPolicy::default())
    }
}

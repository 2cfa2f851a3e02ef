//! PII detection using regex patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Types of PII that can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiType {
    Phone,
    Email,
    Ssn,
    CreditCard,
    Address,
    DormRoom,
}

impl PiiType {
    pub fn label(&self) -> &'static str {
        match self {
            PiiType::Phone => "phone",
            PiiType::Email => "email",
            PiiType::Ssn => "ssn",
            PiiType::CreditCard => "credit_card",
            PiiType::Address => "address",
            PiiType::DormRoom => "dorm_room",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            PiiType::Phone => &PHONE_RE,
            PiiType::Email => &EMAIL_RE,
            PiiType::Ssn => &SSN_RE,
            PiiType::CreditCard => &CC_RE,
            PiiType::Address => &ADDRESS_RE,
            PiiType::DormRoom => &DORM_RE,
        }
    }
}

/// Named selection of detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiProfile {
    /// Every detector. Catches street addresses and dorm rooms too.
    #[default]
    Full,
    /// Phone, email and SSN only. Fewer false positives, misses location leaks.
    Minimal,
}

impl PiiProfile {
    pub fn types(&self) -> &'static [PiiType] {
        match self {
            PiiProfile::Full => &[
                PiiType::Phone,
                PiiType::Email,
                PiiType::Ssn,
                PiiType::CreditCard,
                PiiType::Address,
                PiiType::DormRoom,
            ],
            PiiProfile::Minimal => &[PiiType::Phone, PiiType::Email, PiiType::Ssn],
        }
    }
}

/// Which PII types were found. Each type appears at most once, in detector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiiScanResult {
    #[serde(rename = "hasPII")]
    pub has_pii: bool,
    pub types: Vec<PiiType>,
}

impl PiiScanResult {
    pub fn none() -> Self {
        Self {
            has_pii: false,
            types: Vec::new(),
        }
    }

    pub fn contains(&self, pii_type: PiiType) -> bool {
        self.types.contains(&pii_type)
    }
}

// Compiled regex patterns (compiled once, reused). `is_match` keeps no
// cursor state, so concurrent scans cannot interfere. Word boundaries are
// ASCII-only: digits written straight after CJK or Cyrillic letters still match.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}(?-u:\b)").unwrap()
});
static SSN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]{3}-[0-9]{2}-[0-9]{4}(?-u:\b)").unwrap());
static CC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}(?-u:\b)").unwrap()
});
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?-u:\b)[0-9]+\s+[A-Za-z\s]+\s+(Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr)(?-u:\b)",
    )
    .unwrap()
});
static DORM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?-u:\b)(room|rm|dorm)\s*#?\s*[0-9]{3,4}(?-u:\b)").unwrap());

/// PII detector over a fixed profile of compiled patterns.
#[derive(Debug, Clone)]
pub struct PiiDetector {
    profile: PiiProfile,
    patterns: Vec<(PiiType, &'static Regex)>,
}

impl PiiDetector {
    /// Create a detector for the given profile.
    pub fn new(profile: PiiProfile) -> Self {
        Self {
            profile,
            patterns: profile.types().iter().map(|t| (*t, t.pattern())).collect(),
        }
    }

    pub fn profile(&self) -> PiiProfile {
        self.profile
    }

    /// Scan text for any PII.
    pub fn scan(&self, text: &str) -> PiiScanResult {
        let types: Vec<PiiType> = self
            .patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(pii_type, _)| *pii_type)
            .collect();

        PiiScanResult {
            has_pii: !types.is_empty(),
            types,
        }
    }
}

impl Default for PiiDetector {
    fn default() -> Self {
        Self::new(PiiProfile::Full)
    }
}

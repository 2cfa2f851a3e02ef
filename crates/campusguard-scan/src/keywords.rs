//! Banned-keyword scanning by category.
//!
//! Matching is case-insensitive substring containment, not word-boundary
//! matching: "hurt" also matches "hurtful". Each configured (category, term)
//! entry counts at most once per scan no matter how often it appears.

use serde::{Deserialize, Serialize, Serializer};

/// Label reported when no keyword matched.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Class of policy violation a banned term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Violence,
    HateSpeech,
    SelfHarm,
    Explicit,
    Harassment,
    Illegal,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Violence,
            Self::HateSpeech,
            Self::SelfHarm,
            Self::Explicit,
            Self::Harassment,
            Self::Illegal,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Violence => "violence",
            Category::HateSpeech => "hate_speech",
            Category::SelfHarm => "self_harm",
            Category::Explicit => "explicit",
            Category::Harassment => "harassment",
            Category::Illegal => "illegal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for an optional dominant category, `"unknown"` when absent.
pub fn category_label(category: Option<Category>) -> &'static str {
    category.map(|c| c.as_str()).unwrap_or(UNKNOWN_CATEGORY)
}

fn serialize_category<S: Serializer>(
    category: &Option<Category>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category_label(*category))
}

/// Terms configured for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub category: Category,
    pub terms: Vec<String>,
}

impl KeywordGroup {
    pub fn new(category: Category, terms: &[&str]) -> Self {
        Self {
            category,
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Ordered category → terms table. Group order breaks ties between categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    groups: Vec<KeywordGroup>,
}

/// Outcome of a keyword scan.
///
/// `confidence` is `min(match_count / max_keyword_matches, 1)`: a coarse
/// saturating ratio, not a calibrated probability. Do not average it with
/// other scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScanResult {
    pub flagged: bool,
    /// Matched terms as configured, one per matching (category, term) entry.
    pub matches: Vec<String>,
    /// Dominant category; `None` iff `matches` is empty.
    #[serde(serialize_with = "serialize_category")]
    pub category: Option<Category>,
    pub confidence: f64,
    #[serde(rename = "matchCount")]
    pub match_count: usize,
}

impl KeywordScanResult {
    /// Result for text with no banned terms.
    pub fn clean() -> Self {
        Self {
            flagged: false,
            matches: Vec::new(),
            category: None,
            confidence: 0.0,
            match_count: 0,
        }
    }

    pub fn category_label(&self) -> &'static str {
        category_label(self.category)
    }
}

impl KeywordTable {
    pub fn new(groups: Vec<KeywordGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Total number of configured terms across all categories.
    pub fn term_count(&self) -> usize {
        self.groups.iter().map(|g| g.terms.len()).sum()
    }

    /// Scan text for banned terms.
    ///
    /// `max_keyword_matches` is the hit count at which confidence saturates
    /// at 1.0. A value of zero is treated as one.
    pub fn scan(&self, text: &str, max_keyword_matches: usize) -> KeywordScanResult {
        let normalized = text.to_lowercase();

        let mut matches = Vec::new();
        let mut best: Option<(Category, usize)> = None;

        for group in &self.groups {
            let before = matches.len();
            for term in &group.terms {
                if normalized.contains(&term.to_lowercase()) {
                    matches.push(term.clone());
                }
            }

            // Strictly greater: on a tie the earlier group keeps the lead.
            let hits = matches.len() - before;
            if hits > 0 && best.map_or(true, |(_, count)| hits > count) {
                best = Some((group.category, hits));
            }
        }

        let match_count = matches.len();
        let saturation = max_keyword_matches.max(1) as f64;
        let confidence = (match_count as f64 / saturation).clamp(0.0, 1.0);

        KeywordScanResult {
            flagged: match_count > 0,
            matches,
            category: best.map(|(category, _)| category),
            confidence,
            match_count,
        }
    }
}

impl Default for KeywordTable {
    /// Built-in banned-term lists.
    ///
    /// Self-harm is declared first so that a tie with another category
    /// (e.g. "kill myself" also matching "kill") escalates rather than
    /// being treated as ordinary violence.
    fn default() -> Self {
        Self::new(vec![
            KeywordGroup::new(
                Category::SelfHarm,
                &[
                    "suicide", "suicidal", "kill myself", "end my life", "end it all",
                    "want to die", "better off dead", "cutting", "self harm",
                    "slit my wrists", "overdose", "hang myself",
                ],
            ),
            KeywordGroup::new(
                Category::Violence,
                &[
                    "kill", "murder", "stab", "shoot", "gun", "weapon", "bomb", "explosive",
                    "attack", "assault", "beat up", "hurt", "harm", "injure", "torture",
                    "death threat", "shooting", "massacre", "slaughter",
                ],
            ),
            KeywordGroup::new(
                Category::HateSpeech,
                &[
                    "racist", "racism", "nazi", "hitler", "supremacist", "kkk",
                    "genocide", "ethnic cleansing", "bigot", "slur",
                ],
            ),
            KeywordGroup::new(
                Category::Explicit,
                &[
                    "porn", "pornography", "nude", "nudes", "naked", "sex tape",
                    "send nudes", "rape", "molest", "pedophile",
                ],
            ),
            KeywordGroup::new(
                Category::Harassment,
                &[
                    "doxx", "dox", "leak address", "leak phone", "expose",
                    "swat", "stalk", "stalker", "cyberbully", "harass",
                ],
            ),
            KeywordGroup::new(
                Category::Illegal,
                &[
                    "cocaine", "heroin", "meth", "drug dealer", "sell drugs",
                    "fake id", "stolen", "theft", "robbery", "scam",
                ],
            ),
        ])
    }
}

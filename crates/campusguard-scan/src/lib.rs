//! Content moderation engine — keyword scanning, PII detection, verdicts.
//!
//! Everything here is a pure function of the submitted text and a
//! [`ModerationPolicy`]. Compiled patterns are immutable statics, so a single
//! [`Moderator`] can be shared across threads without locking.

pub mod crisis;
pub mod keywords;
pub mod moderator;
pub mod pii;
pub mod policy;
pub mod submission;
pub mod verdict;

pub use crisis::{crisis_resources, CrisisResource};
pub use keywords::{Category, KeywordGroup, KeywordScanResult, KeywordTable};
pub use moderator::{ModerationDetails, ModerationOutcome, ModerationReport, Moderator};
pub use pii::{PiiDetector, PiiProfile, PiiScanResult, PiiType};
pub use policy::ModerationPolicy;
pub use submission::{ContentLimits, ContentType, Submission};
pub use verdict::{AiScanStatus, ModerationStatus, ModerationVerdict, ScanRecord, Thresholds};

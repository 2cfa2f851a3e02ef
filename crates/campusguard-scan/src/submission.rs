//! Submission validation — required content and per-type length ceilings.
//!
//! Oversized content is rejected, never truncated: a PII match could sit in
//! the part that truncation would drop.

use campusguard_core::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_POST_LENGTH: usize = 1000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 500;

/// Kind of content being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Post,
    Comment,
}

impl ContentType {
    /// Interpret the request's `type` field. Anything other than
    /// `"comment"` is held to the post limit.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("comment") => ContentType::Comment,
            _ => ContentType::Post,
        }
    }
}

/// Maximum content length per type, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentLimits {
    pub max_post_length: usize,
    pub max_comment_length: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_post_length: DEFAULT_MAX_POST_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

impl ContentLimits {
    pub fn max_length(&self, content_type: ContentType) -> usize {
        match content_type {
            ContentType::Post => self.max_post_length,
            ContentType::Comment => self.max_comment_length,
        }
    }
}

/// Length as browsers and mobile clients count it, so limits agree with
/// the character counters shown to users.
pub fn content_length(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Content that passed validation and is safe to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    content: String,
    content_type: ContentType,
}

impl Submission {
    /// Validate content against the limit for its type.
    pub fn new(
        content: impl Into<String>,
        content_type: ContentType,
        limits: &ContentLimits,
    ) -> Result<Self> {
        let content = content.into();
        if content.is_empty() {
            return Err(Error::InvalidInput("Content is required".into()));
        }

        let max_length = limits.max_length(content_type);
        if content_length(&content) > max_length {
            return Err(Error::InvalidInput(format!(
                "Content exceeds {} characters",
                max_length
            )));
        }

        Ok(Self {
            content,
            content_type,
        })
    }

    /// Validate a `{ content, type }` request body.
    pub fn from_json(body: &serde_json::Value, limits: &ContentLimits) -> Result<Self> {
        let content = body
            .get("content")
            .and_then(|c| c.as_str())
            .ok_or_else(|| Error::InvalidInput("Content is required".into()))?;
        let content_type = ContentType::from_field(body.get("type").and_then(|t| t.as_str()));

        Self::new(content, content_type, limits)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }
}

//! Questions posted under a topic.
//!
//! Vote counts are never stored here; the ranking engine derives them at
//! display time.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::{Error, QuestionId, TopicId, User};

/// Validation failures for question content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    /// The text was empty after trimming surrounding whitespace.
    #[error("question text must not be empty")]
    EmptyText,
}

impl From<QuestionValidationError> for Error {
    fn from(error: QuestionValidationError) -> Self {
        match error {
            QuestionValidationError::EmptyText => Self::invalid_request(error.to_string())
                .with_details(json!({ "field": "text", "code": "empty_text" })),
        }
    }
}

/// Trimmed, non-empty question body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Trim and validate question text.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, QuestionValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Immutable question record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic_id: TopicId,
    text: QuestionText,
    author: User,
    created_at: DateTime<Utc>,
}

impl Question {
    /// Assemble a question from validated parts.
    pub fn new(
        id: QuestionId,
        topic_id: TopicId,
        text: QuestionText,
        author: User,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            topic_id,
            text,
            author,
            created_at,
        }
    }

    /// Question identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Owning topic.
    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    /// Question body.
    pub fn text(&self) -> &QuestionText {
        &self.text
    }

    /// Snapshot of the author at creation time.
    pub fn author(&self) -> &User {
        &self.author
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

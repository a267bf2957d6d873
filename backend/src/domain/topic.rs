//! Topics group questions under a named heading.

use chrono::{DateTime, Utc};
use serde_json::json;

use super::{Error, TopicId, User};

/// Validation failures for topic content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopicValidationError {
    /// The name was empty after trimming surrounding whitespace.
    #[error("topic name must not be empty")]
    EmptyName,
}

impl From<TopicValidationError> for Error {
    fn from(error: TopicValidationError) -> Self {
        match error {
            TopicValidationError::EmptyName => Self::invalid_request(error.to_string())
                .with_details(json!({ "field": "name", "code": "empty_name" })),
        }
    }
}

/// Trimmed, non-empty topic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicName(String);

impl TopicName {
    /// Trim and validate a topic name.
    ///
    /// # Examples
    /// ```
    /// use agora::domain::{TopicName, TopicValidationError};
    ///
    /// let name = TopicName::new("  Rust  ").expect("valid name");
    /// assert_eq!(name.as_str(), "Rust");
    /// assert_eq!(TopicName::new(" \t "), Err(TopicValidationError::EmptyName));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TopicValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Free-form topic description, trimmed. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicDescription(String);

impl TopicDescription {
    /// Trim a description.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_owned())
    }

    /// Borrow the description text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Immutable topic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: TopicId,
    name: TopicName,
    description: TopicDescription,
    author: User,
    created_at: DateTime<Utc>,
}

impl Topic {
    /// Assemble a topic from validated parts.
    pub fn new(
        id: TopicId,
        name: TopicName,
        description: TopicDescription,
        author: User,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            author,
            created_at,
        }
    }

    /// Topic identifier.
    pub fn id(&self) -> TopicId {
        self.id
    }

    /// Topic name.
    pub fn name(&self) -> &TopicName {
        &self.name
    }

    /// Topic description.
    pub fn description(&self) -> &TopicDescription {
        &self.description
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

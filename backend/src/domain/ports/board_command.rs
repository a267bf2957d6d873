//! Driving port for board mutations.
//!
//! Identifiers arrive as raw client text; implementations parse them and
//! report malformed values as `invalid_reference`.

use async_trait::async_trait;

use crate::domain::{Error, Question, Topic, Viewer};

/// Request to open a new topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicRequest {
    pub name: String,
    pub description: String,
    pub viewer: Viewer,
}

/// Request to post a question under an existing topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuestionRequest {
    pub topic_id: String,
    pub text: String,
    pub viewer: Viewer,
}

/// Request to cast or retract the viewer's vote on a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRequest {
    pub question_id: String,
    pub viewer: Viewer,
}

/// Driving port for board write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardCommand: Send + Sync {
    /// Open a topic authored by the viewer.
    ///
    /// Fails with `unauthorized` for anonymous viewers and `invalid_request`
    /// when the trimmed name is empty.
    async fn create_topic(&self, request: CreateTopicRequest) -> Result<Topic, Error>;

    /// Post a question authored by the viewer.
    ///
    /// Fails with `unauthorized`, `invalid_reference` for malformed topic ids,
    /// `not_found` when the topic does not exist, and `invalid_request` when
    /// the trimmed text is empty.
    async fn post_question(&self, request: PostQuestionRequest) -> Result<Question, Error>;

    /// Record the viewer's vote. Idempotent.
    async fn cast_vote(&self, request: VoteRequest) -> Result<(), Error>;

    /// Remove the viewer's vote. Idempotent; absent votes are not an error.
    async fn retract_vote(&self, request: VoteRequest) -> Result<(), Error>;
}

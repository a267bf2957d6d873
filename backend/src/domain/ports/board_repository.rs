//! Driven port for topic and question persistence.
//!
//! Adapters store immutable records and answer unranked reads; validation and
//! ranking stay in the domain.

use async_trait::async_trait;

use crate::domain::{ExternalId, Question, Topic, TopicId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by board repository adapters.
    pub enum BoardRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "board repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "board repository query failed: {message}",
        /// A question referenced a topic that does not exist.
        UnknownTopic { topic_id: String } => "topic {topic_id} does not exist",
    }
}

/// Persistence contract for topics and their questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Persist a new topic.
    async fn insert_topic(&self, topic: &Topic) -> Result<(), BoardRepositoryError>;

    /// Fetch a topic by id.
    async fn find_topic(&self, topic_id: &TopicId) -> Result<Option<Topic>, BoardRepositoryError>;

    /// Topics authored by `author`, newest first.
    async fn list_topics_by_author(
        &self,
        author: &ExternalId,
    ) -> Result<Vec<Topic>, BoardRepositoryError>;

    /// Persist a new question. Fails with
    /// [`BoardRepositoryError::UnknownTopic`] when its topic is absent.
    async fn insert_question(&self, question: &Question) -> Result<(), BoardRepositoryError>;

    /// Questions attached to a topic, oldest first. Unranked.
    async fn list_questions_for_topic(
        &self,
        topic_id: &TopicId,
    ) -> Result<Vec<Question>, BoardRepositoryError>;
}

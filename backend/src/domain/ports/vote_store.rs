//! Driven port owning the vote relation.
//!
//! Each write is a single atomic persistence operation: an upsert keyed on
//! `(question, voter)` or a delete by that key. Adapters must never implement
//! them as read-then-write sequences, so duplicate clicks and retries converge
//! on the same state.

use async_trait::async_trait;

use crate::domain::{ExternalId, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by vote store adapters.
    pub enum VoteStoreError {
        /// Store connection could not be established.
        Connection { message: String } => "vote store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "vote store query failed: {message}",
        /// The question being voted on does not exist.
        UnknownQuestion { question_id: String } => "question {question_id} does not exist",
    }
}

/// Idempotent vote relation keyed on `(question_id, voter_id)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Ensure exactly one vote exists for the pair. Repeating the call is a
    /// no-op.
    async fn cast_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError>;

    /// Ensure no vote exists for the pair. Absent votes are not an error.
    async fn retract_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError>;

    /// Number of votes recorded for the question.
    async fn count_votes(&self, question_id: &QuestionId) -> Result<u64, VoteStoreError>;

    /// Whether the voter has a vote recorded for the question.
    async fn has_voted(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<bool, VoteStoreError>;
}

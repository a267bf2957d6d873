//! A single voter's endorsement of a question.

use super::{ExternalId, QuestionId};

/// Natural key of the vote relation. At most one exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vote {
    /// Question being voted for.
    pub question_id: QuestionId,
    /// External identifier of the voter.
    pub voter_id: ExternalId,
}

impl Vote {
    /// Build the key for `voter_id` voting on `question_id`.
    pub fn new(question_id: QuestionId, voter_id: ExternalId) -> Self {
        Self {
            question_id,
            voter_id,
        }
    }
}

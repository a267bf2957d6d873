//! Driving port for board reads.

use async_trait::async_trait;

use crate::domain::{Error, QuestionId, RankedQuestion, Topic, Viewer};

/// Request for a topic page as seen by a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicViewRequest {
    pub topic_id: String,
    pub viewer: Viewer,
}

/// A ranked question annotated with ownership for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicViewQuestion {
    pub ranked: RankedQuestion,
    pub belongs_to_viewer: bool,
}

/// A topic with its questions in ranked order.
///
/// `omitted_question_ids` lists questions dropped because their vote lookups
/// failed; callers surface it as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    pub topic: Topic,
    pub belongs_to_viewer: bool,
    pub viewer_can_vote: bool,
    pub questions: Vec<TopicViewQuestion>,
    pub omitted_question_ids: Vec<QuestionId>,
}

/// Request for the current tally of a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTallyRequest {
    pub question_id: String,
    pub viewer: Viewer,
}

/// Vote count plus the viewer's own vote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub question_id: QuestionId,
    pub vote_count: u64,
    pub viewer_has_voted: bool,
}

/// Driving port for board read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardQuery: Send + Sync {
    /// Fetch a topic and rank its questions for the viewer.
    async fn topic_view(&self, request: TopicViewRequest) -> Result<TopicView, Error>;

    /// Topics authored by the viewer, newest first. Requires a viewer.
    async fn topics_by_author(&self, viewer: Viewer) -> Result<Vec<Topic>, Error>;

    /// Count votes on one question and report whether the viewer voted.
    async fn vote_tally(&self, request: VoteTallyRequest) -> Result<VoteTally, Error>;
}

//! Board domain service.
//!
//! Implements the driving ports on top of the repository and vote store
//! ports. Validation, identity checks and ranking happen here; adapters only
//! persist and fetch.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::access::{can_vote, owns, require_voter};
use crate::domain::ports::{
    BoardCommand, BoardQuery, BoardRepository, BoardRepositoryError, CreateTopicRequest,
    PostQuestionRequest, TopicView, TopicViewQuestion, TopicViewRequest, VoteRequest, VoteStore,
    VoteStoreError, VoteTally, VoteTallyRequest,
};
use crate::domain::{
    Error, Question, QuestionId, QuestionText, RankingEngine, Topic, TopicDescription, TopicId,
    TopicName, Viewer,
};

fn map_read_error(error: BoardRepositoryError) -> Error {
    match error {
        BoardRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("board repository unavailable: {message}"))
        }
        BoardRepositoryError::Query { message } => {
            Error::internal(format!("board repository error: {message}"))
        }
        BoardRepositoryError::UnknownTopic { topic_id } => unknown_topic(topic_id),
    }
}

/// Creates are never retried, so every storage failure surfaces as a generic
/// internal error.
fn map_write_error(error: BoardRepositoryError) -> Error {
    match error {
        BoardRepositoryError::UnknownTopic { topic_id } => unknown_topic(topic_id),
        other => {
            error!(error = %other, "board write failed");
            Error::internal(format!("board write failed: {other}"))
        }
    }
}

fn map_vote_error(error: VoteStoreError) -> Error {
    match error {
        VoteStoreError::Connection { message } => {
            Error::service_unavailable(format!("vote store unavailable: {message}"))
        }
        VoteStoreError::Query { message } => {
            Error::internal(format!("vote store error: {message}"))
        }
        VoteStoreError::UnknownQuestion { question_id } => {
            Error::invalid_reference(format!("question {question_id} does not exist"))
                .with_details(json!({
                    "field": "questionId",
                    "value": question_id,
                    "code": "unknown_question",
                }))
        }
    }
}

fn unknown_topic(topic_id: String) -> Error {
    Error::invalid_reference(format!("topic {topic_id} does not exist")).with_details(json!({
        "field": "topicId",
        "value": topic_id,
        "code": "unknown_topic",
    }))
}

/// Service implementing [`BoardCommand`] and [`BoardQuery`].
pub struct BoardService<R: ?Sized, V: ?Sized> {
    repository: Arc<R>,
    votes: Arc<V>,
    ranking: RankingEngine<V>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized, V: ?Sized> Clone for BoardService<R, V> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            votes: Arc::clone(&self.votes),
            ranking: self.ranking.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, V> BoardService<R, V>
where
    R: BoardRepository + ?Sized,
    V: VoteStore + ?Sized,
{
    /// Create a service over the given ports. `clock` stamps `created_at`.
    pub fn new(repository: Arc<R>, votes: Arc<V>, clock: Arc<dyn Clock>) -> Self {
        let ranking = RankingEngine::new(Arc::clone(&votes));
        Self {
            repository,
            votes,
            ranking,
            clock,
        }
    }

    async fn fetch_topic(&self, topic_id: &TopicId) -> Result<Option<Topic>, Error> {
        self.repository
            .find_topic(topic_id)
            .await
            .map_err(map_read_error)
    }

    async fn viewer_has_voted(
        &self,
        question_id: &QuestionId,
        viewer: &Viewer,
    ) -> Result<bool, Error> {
        match viewer.external_id() {
            Some(voter) => self
                .votes
                .has_voted(question_id, voter)
                .await
                .map_err(map_vote_error),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl<R, V> BoardCommand for BoardService<R, V>
where
    R: BoardRepository + ?Sized,
    V: VoteStore + ?Sized,
{
    async fn create_topic(&self, request: CreateTopicRequest) -> Result<Topic, Error> {
        let author = require_voter(&request.viewer)?.clone();
        let name = TopicName::new(&request.name)?;
        let topic = Topic::new(
            TopicId::random(),
            name,
            TopicDescription::new(&request.description),
            author,
            self.clock.utc(),
        );

        self.repository
            .insert_topic(&topic)
            .await
            .map_err(map_write_error)?;
        debug!(topic_id = %topic.id(), "topic created");
        Ok(topic)
    }

    async fn post_question(&self, request: PostQuestionRequest) -> Result<Question, Error> {
        let author = require_voter(&request.viewer)?.clone();
        let topic_id = TopicId::parse(&request.topic_id)?;
        let text = QuestionText::new(&request.text)?;

        if self.fetch_topic(&topic_id).await?.is_none() {
            return Err(unknown_topic(topic_id.to_string()));
        }

        let question = Question::new(
            QuestionId::random(),
            topic_id,
            text,
            author,
            self.clock.utc(),
        );
        self.repository
            .insert_question(&question)
            .await
            .map_err(map_write_error)?;
        debug!(question_id = %question.id(), %topic_id, "question posted");
        Ok(question)
    }

    async fn cast_vote(&self, request: VoteRequest) -> Result<(), Error> {
        let voter = require_voter(&request.viewer)?;
        let question_id = QuestionId::parse(&request.question_id)?;
        self.votes
            .cast_vote(&question_id, voter.external_id())
            .await
            .map_err(map_vote_error)
    }

    async fn retract_vote(&self, request: VoteRequest) -> Result<(), Error> {
        let voter = require_voter(&request.viewer)?;
        let question_id = QuestionId::parse(&request.question_id)?;
        self.votes
            .retract_vote(&question_id, voter.external_id())
            .await
            .map_err(map_vote_error)
    }
}

#[async_trait]
impl<R, V> BoardQuery for BoardService<R, V>
where
    R: BoardRepository + ?Sized,
    V: VoteStore + ?Sized,
{
    async fn topic_view(&self, request: TopicViewRequest) -> Result<TopicView, Error> {
        let TopicViewRequest { topic_id, viewer } = request;
        let topic_id = TopicId::parse(&topic_id)?;
        let topic = self
            .fetch_topic(&topic_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("topic {topic_id} not found")))?;

        let questions = self
            .repository
            .list_questions_for_topic(&topic_id)
            .await
            .map_err(map_read_error)?;
        let ranked = self.ranking.rank(questions, &viewer).await;

        let questions = ranked
            .questions
            .into_iter()
            .map(|entry| TopicViewQuestion {
                belongs_to_viewer: owns(&entry.question, &viewer),
                ranked: entry,
            })
            .collect();

        Ok(TopicView {
            belongs_to_viewer: owns(&topic, &viewer),
            viewer_can_vote: can_vote(&viewer),
            topic,
            questions,
            omitted_question_ids: ranked.omitted,
        })
    }

    async fn topics_by_author(&self, viewer: Viewer) -> Result<Vec<Topic>, Error> {
        let author = require_voter(&viewer)?;
        self.repository
            .list_topics_by_author(author.external_id())
            .await
            .map_err(map_read_error)
    }

    async fn vote_tally(&self, request: VoteTallyRequest) -> Result<VoteTally, Error> {
        let question_id = QuestionId::parse(&request.question_id)?;
        let vote_count = self
            .votes
            .count_votes(&question_id)
            .await
            .map_err(map_vote_error)?;
        let viewer_has_voted = self.viewer_has_voted(&question_id, &request.viewer).await?;

        Ok(VoteTally {
            question_id,
            vote_count,
            viewer_has_voted,
        })
    }
}

#[cfg(test)]
#[path = "board_service_tests.rs"]
mod tests;

//! PostgreSQL-backed `BoardRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{BoardRepository, BoardRepositoryError};
use crate::domain::{
    ExternalId, Question, QuestionId, QuestionText, Topic, TopicDescription, TopicId, TopicName,
    User,
};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, NewTopicRow, QuestionRow, TopicRow};
use super::pool::{DbPool, PoolError};
use super::schema::{questions, topics};

/// Diesel-backed store for topics and questions.
#[derive(Clone)]
pub struct DieselBoardRepository {
    pool: DbPool,
}

impl DieselBoardRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> BoardRepositoryError {
    map_pool_error(error, BoardRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> BoardRepositoryError {
    map_diesel_error(
        error,
        BoardRepositoryError::query,
        BoardRepositoryError::connection,
    )
    .unwrap_or_else(|other| BoardRepositoryError::query(other.to_string()))
}

/// Insert failures additionally translate the `questions.topic_id` foreign
/// key into [`BoardRepositoryError::UnknownTopic`].
fn insert_question_error(error: diesel::result::Error, topic_id: TopicId) -> BoardRepositoryError {
    map_diesel_error(
        error,
        BoardRepositoryError::query,
        BoardRepositoryError::connection,
    )
    .unwrap_or_else(|_| BoardRepositoryError::unknown_topic(topic_id.to_string()))
}

fn row_author(author_id: String, author_name: String) -> Result<User, BoardRepositoryError> {
    User::try_from_strings(author_id, author_name)
        .map_err(|err| BoardRepositoryError::query(format!("stored author is invalid: {err}")))
}

fn row_to_topic(row: TopicRow) -> Result<Topic, BoardRepositoryError> {
    let name = TopicName::new(&row.name).map_err(|err| {
        warn!(topic_id = %row.id, "stored topic name is invalid");
        BoardRepositoryError::query(err.to_string())
    })?;
    Ok(Topic::new(
        TopicId::from_uuid(row.id),
        name,
        TopicDescription::new(&row.description),
        row_author(row.author_id, row.author_name)?,
        row.created_at,
    ))
}

fn row_to_question(row: QuestionRow) -> Result<Question, BoardRepositoryError> {
    let text = QuestionText::new(&row.body).map_err(|err| {
        warn!(question_id = %row.id, "stored question body is invalid");
        BoardRepositoryError::query(err.to_string())
    })?;
    Ok(Question::new(
        QuestionId::from_uuid(row.id),
        TopicId::from_uuid(row.topic_id),
        text,
        row_author(row.author_id, row.author_name)?,
        row.created_at,
    ))
}

#[async_trait]
impl BoardRepository for DieselBoardRepository {
    async fn insert_topic(&self, topic: &Topic) -> Result<(), BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = NewTopicRow {
            id: *topic.id().as_uuid(),
            name: topic.name().as_str(),
            description: topic.description().as_str(),
            author_id: topic.author().external_id().as_str(),
            author_name: topic.author().display_name().as_str(),
            created_at: topic.created_at(),
        };

        diesel::insert_into(topics::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find_topic(&self, topic_id: &TopicId) -> Result<Option<Topic>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<TopicRow> = topics::table
            .filter(topics::id.eq(topic_id.as_uuid()))
            .select(TopicRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_topic).transpose()
    }

    async fn list_topics_by_author(
        &self,
        author: &ExternalId,
    ) -> Result<Vec<Topic>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<TopicRow> = topics::table
            .filter(topics::author_id.eq(author.as_str()))
            .order((topics::created_at.desc(), topics::id.asc()))
            .select(TopicRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_topic).collect()
    }

    async fn insert_question(&self, question: &Question) -> Result<(), BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = NewQuestionRow {
            id: *question.id().as_uuid(),
            topic_id: *question.topic_id().as_uuid(),
            body: question.text().as_str(),
            author_id: question.author().external_id().as_str(),
            author_name: question.author().display_name().as_str(),
            created_at: question.created_at(),
        };

        diesel::insert_into(questions::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| insert_question_error(err, question.topic_id()))
    }

    async fn list_questions_for_topic(
        &self,
        topic_id: &TopicId,
    ) -> Result<Vec<Question>, BoardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<QuestionRow> = questions::table
            .filter(questions::topic_id.eq(topic_id.as_uuid()))
            .order((questions::created_at.asc(), questions::id.asc()))
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_question).collect()
    }
}

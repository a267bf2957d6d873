//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; adapters convert them to domain
//! types before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::Vote;

use super::schema::{questions, topics, votes};

/// Row read from the `topics` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = topics)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TopicRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable topic record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = topics)]
pub(crate) struct NewTopicRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub author_id: &'a str,
    pub author_name: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Row read from the `questions` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub body: String,
    pub author_id: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable question record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub body: &'a str,
    pub author_id: &'a str,
    pub author_name: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Insertable vote record; `created_at` is filled by the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = votes)]
pub(crate) struct NewVoteRow<'a> {
    pub question_id: Uuid,
    pub voter_id: &'a str,
}

impl<'a> From<&'a Vote> for NewVoteRow<'a> {
    fn from(vote: &'a Vote) -> Self {
        Self {
            question_id: *vote.question_id.as_uuid(),
            voter_id: vote.voter_id.as_str(),
        }
    }
}

//! PostgreSQL-backed `VoteStore` implementation using Diesel ORM.
//!
//! Casting is a single `INSERT .. ON CONFLICT DO NOTHING` on the composite
//! primary key and retracting is a single keyed `DELETE`, so concurrent and
//! repeated calls converge without read-then-write races.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{VoteStore, VoteStoreError};
use crate::domain::{ExternalId, QuestionId, Vote};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewVoteRow;
use super::pool::{DbPool, PoolError};
use super::schema::votes;

/// Diesel-backed vote relation.
#[derive(Clone)]
pub struct DieselVoteStore {
    pool: DbPool,
}

impl DieselVoteStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> VoteStoreError {
    map_pool_error(error, VoteStoreError::connection)
}

fn diesel_error(error: diesel::result::Error, question_id: &QuestionId) -> VoteStoreError {
    map_diesel_error(error, VoteStoreError::query, VoteStoreError::connection)
        .unwrap_or_else(|_| VoteStoreError::unknown_question(question_id.to_string()))
}

#[async_trait]
impl VoteStore for DieselVoteStore {
    async fn cast_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let vote = Vote::new(*question_id, voter_id.clone());
        let row = NewVoteRow::from(&vote);
        let inserted = diesel::insert_into(votes::table)
            .values(&row)
            .on_conflict((votes::question_id, votes::voter_id))
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| diesel_error(err, question_id))?;

        debug!(%question_id, inserted, "vote cast");
        Ok(())
    }

    async fn retract_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let removed = diesel::delete(
            votes::table
                .filter(votes::question_id.eq(question_id.as_uuid()))
                .filter(votes::voter_id.eq(voter_id.as_str())),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| diesel_error(err, question_id))?;

        debug!(%question_id, removed, "vote retracted");
        Ok(())
    }

    async fn count_votes(&self, question_id: &QuestionId) -> Result<u64, VoteStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let count: i64 = votes::table
            .filter(votes::question_id.eq(question_id.as_uuid()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| diesel_error(err, question_id))?;

        u64::try_from(count)
            .map_err(|_| VoteStoreError::query(format!("negative vote count {count}")))
    }

    async fn has_voted(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<bool, VoteStoreError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::select(exists(
            votes::table
                .filter(votes::question_id.eq(question_id.as_uuid()))
                .filter(votes::voter_id.eq(voter_id.as_str())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| diesel_error(err, question_id))
    }
}

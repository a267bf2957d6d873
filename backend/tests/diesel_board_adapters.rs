//! Integration tests for the Diesel board repository and vote store against
//! embedded PostgreSQL.

use std::sync::Arc;

use agora::domain::ports::{BoardRepository, BoardRepositoryError, VoteStore, VoteStoreError};
use agora::domain::{
    ExternalId, Question, QuestionId, QuestionText, Topic, TopicDescription, TopicId, TopicName,
    User,
};
use agora::outbound::persistence::{DbPool, DieselBoardRepository, DieselVoteStore, PoolConfig};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use futures_util::future::join_all;
use pg_embedded_setup_unpriv::TemporaryDatabase;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{format_postgres_error, handle_cluster_setup_failure, provision_migrated_database};

struct TestContext {
    runtime: Runtime,
    repository: DieselBoardRepository,
    votes: Arc<DieselVoteStore>,
    database_url: String,
    _database: TemporaryDatabase,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let database = provision_migrated_database()?;
    let database_url = database.url().to_owned();

    let config = PoolConfig::new(database_url.as_str())
        .with_max_size(4)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(async { DbPool::new(config).await })
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        repository: DieselBoardRepository::new(pool.clone()),
        votes: Arc::new(DieselVoteStore::new(pool)),
        database_url,
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn at(minute: i64) -> DateTime<Utc> {
    let origin = Utc
        .with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
        .single()
        .expect("valid origin");
    origin + TimeDelta::minutes(minute)
}

fn author(external_id: &str) -> User {
    User::try_from_strings(external_id, "Board Author").expect("valid user")
}

fn voter(external_id: &str) -> ExternalId {
    ExternalId::new(external_id).expect("valid voter id")
}

fn topic(name: &str, by: &str, minute: i64) -> Topic {
    Topic::new(
        TopicId::random(),
        TopicName::new(name).expect("valid name"),
        TopicDescription::new("integration"),
        author(by),
        at(minute),
    )
}

fn question(topic_id: TopicId, text: &str, minute: i64) -> Question {
    Question::new(
        QuestionId::random(),
        topic_id,
        QuestionText::new(text).expect("valid text"),
        author("github-asker"),
        at(minute),
    )
}

/// Insert a topic with one question and return the question id.
fn seed_question(ctx: &TestContext) -> QuestionId {
    let topic = topic("Async Rust", "github-host", 0);
    let question = question(topic.id(), "Why pin?", 1);
    ctx.runtime.block_on(async {
        ctx.repository.insert_topic(&topic).await.expect("insert topic");
        ctx.repository
            .insert_question(&question)
            .await
            .expect("insert question");
    });
    question.id()
}

#[rstest]
fn topics_and_questions_round_trip_in_listing_order(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let older = topic("Older", "github-host", 0);
    let newer = topic("Newer", "github-host", 5);
    let foreign = topic("Foreign", "github-other", 10);
    let first = question(older.id(), "first", 1);
    let second = question(older.id(), "second", 2);

    ctx.runtime.block_on(async {
        for topic in [&older, &newer, &foreign] {
            ctx.repository.insert_topic(topic).await.expect("insert topic");
        }
        ctx.repository.insert_question(&second).await.expect("insert");
        ctx.repository.insert_question(&first).await.expect("insert");

        let found = ctx
            .repository
            .find_topic(&older.id())
            .await
            .expect("find topic");
        assert_eq!(found, Some(older.clone()));

        let mine = ctx
            .repository
            .list_topics_by_author(older.author().external_id())
            .await
            .expect("list topics");
        assert_eq!(mine, vec![newer.clone(), older.clone()]);

        let questions = ctx
            .repository
            .list_questions_for_topic(&older.id())
            .await
            .expect("list questions");
        assert_eq!(questions, vec![first.clone(), second.clone()]);
    });
}

#[rstest]
fn missing_topic_reads_as_none(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let found = ctx
        .runtime
        .block_on(ctx.repository.find_topic(&TopicId::random()))
        .expect("lookup succeeds");
    assert!(found.is_none());
}

#[rstest]
fn question_on_unknown_topic_is_rejected(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let orphan = question(TopicId::random(), "lost", 0);

    let error = ctx
        .runtime
        .block_on(ctx.repository.insert_question(&orphan))
        .expect_err("foreign key violation");

    assert!(matches!(error, BoardRepositoryError::UnknownTopic { .. }));
}

#[rstest]
fn casting_is_idempotent_and_retract_restores_the_count(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let question_id = seed_question(&ctx);
    let ada = voter("github-ada");
    let grace = voter("github-grace");

    ctx.runtime.block_on(async {
        ctx.votes.cast_vote(&question_id, &grace).await.expect("cast");
        let before = ctx.votes.count_votes(&question_id).await.expect("count");

        ctx.votes.cast_vote(&question_id, &ada).await.expect("cast");
        ctx.votes.cast_vote(&question_id, &ada).await.expect("recast");
        assert_eq!(ctx.votes.count_votes(&question_id).await.expect("count"), before + 1);
        assert!(ctx.votes.has_voted(&question_id, &ada).await.expect("has voted"));

        ctx.votes.retract_vote(&question_id, &ada).await.expect("retract");
        ctx.votes
            .retract_vote(&question_id, &ada)
            .await
            .expect("retracting again is a no-op");
        assert_eq!(ctx.votes.count_votes(&question_id).await.expect("count"), before);
        assert!(!ctx.votes.has_voted(&question_id, &ada).await.expect("has voted"));
    });
}

#[rstest]
fn concurrent_duplicate_casts_store_one_vote(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let question_id = seed_question(&ctx);
    let ada = voter("github-ada");

    ctx.runtime.block_on(async {
        let casts = (0..8).map(|_| {
            let votes = Arc::clone(&ctx.votes);
            let ada = ada.clone();
            tokio::spawn(async move { votes.cast_vote(&question_id, &ada).await })
        });
        for outcome in join_all(casts).await {
            outcome.expect("task joins").expect("cast succeeds");
        }
        assert_eq!(ctx.votes.count_votes(&question_id).await.expect("count"), 1);
    });
}

#[rstest]
fn casting_on_unknown_question_is_rejected(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let missing = QuestionId::random();

    ctx.runtime.block_on(async {
        let error = ctx
            .votes
            .cast_vote(&missing, &voter("github-ada"))
            .await
            .expect_err("foreign key violation");
        assert!(matches!(error, VoteStoreError::UnknownQuestion { .. }));
        assert_eq!(ctx.votes.count_votes(&missing).await.expect("count"), 0);
    });
}

#[rstest]
fn missing_votes_table_surfaces_a_query_error(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let question_id = seed_question(&ctx);
    let mut client = Client::connect(ctx.database_url.as_str(), NoTls)
        .map_err(|err| format_postgres_error(&err))
        .expect("connect");
    client
        .batch_execute("DROP TABLE votes")
        .map_err(|err| format_postgres_error(&err))
        .expect("drop votes table");

    let error = ctx
        .runtime
        .block_on(ctx.votes.count_votes(&question_id))
        .expect_err("count fails without the table");

    assert!(matches!(error, VoteStoreError::Query { .. }));
}

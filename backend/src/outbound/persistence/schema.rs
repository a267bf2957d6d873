//! Diesel table definitions for the board schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Discussion topics.
    topics (id) {
        id -> Uuid,
        name -> Text,
        description -> Text,
        /// External identity of the author.
        author_id -> Text,
        /// Author display name captured at creation time.
        author_name -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Questions posted under a topic.
    questions (id) {
        id -> Uuid,
        topic_id -> Uuid,
        body -> Text,
        author_id -> Text,
        author_name -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One row per (question, voter) pair; the composite key makes casting
    /// idempotent.
    votes (question_id, voter_id) {
        question_id -> Uuid,
        voter_id -> Text,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(questions -> topics (topic_id));
diesel::joinable!(votes -> questions (question_id));

diesel::allow_tables_to_appear_in_same_query!(topics, questions, votes);

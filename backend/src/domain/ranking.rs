//! Vote-aware ranking of questions.
//!
//! The engine reads one vote count per question (plus one has-voted lookup when
//! a viewer is present) and sorts by votes descending, newest first on ties.
//! Question ids break exact ties so repeated calls over unchanged input always
//! agree. Lookups are independent reads; together they form a best-effort
//! snapshot rather than a single consistent read.

use std::cmp::Ordering;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::warn;

use super::access::can_vote;
use super::ports::{VoteStore, VoteStoreError};
use super::{Question, QuestionId, Viewer};

/// A question with display-time vote aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedQuestion {
    pub question: Question,
    pub vote_count: u64,
    /// False for anonymous viewers and for viewers who already voted.
    pub viewer_can_vote: bool,
}

/// Output of [`RankingEngine::rank`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedQuestions {
    /// Questions in display order.
    pub questions: Vec<RankedQuestion>,
    /// Questions dropped because a vote lookup failed, in input order.
    pub omitted: Vec<QuestionId>,
}

impl RankedQuestions {
    /// Whether any question was dropped.
    pub fn is_partial(&self) -> bool {
        !self.omitted.is_empty()
    }
}

/// Total display order: votes descending, then `created_at` descending, then
/// question id ascending.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
///
/// use agora::domain::{
///     Question, QuestionId, QuestionText, RankedQuestion, TopicId, User, ranking_order,
/// };
/// use chrono::Utc;
///
/// let author = User::try_from_strings("oauth|1", "Ada").expect("valid user");
/// let entry = |votes| RankedQuestion {
///     question: Question::new(
///         QuestionId::random(),
///         TopicId::random(),
///         QuestionText::new("Why?").expect("valid text"),
///         author.clone(),
///         Utc::now(),
///     ),
///     vote_count: votes,
///     viewer_can_vote: false,
/// };
/// assert_eq!(ranking_order(&entry(5), &entry(2)), Ordering::Less);
/// ```
pub fn ranking_order(left: &RankedQuestion, right: &RankedQuestion) -> Ordering {
    right
        .vote_count
        .cmp(&left.vote_count)
        .then_with(|| right.question.created_at().cmp(&left.question.created_at()))
        .then_with(|| left.question.id().cmp(&right.question.id()))
}

/// Merges questions with vote aggregates and orders them for display.
pub struct RankingEngine<V: ?Sized> {
    votes: Arc<V>,
}

impl<V: ?Sized> Clone for RankingEngine<V> {
    fn clone(&self) -> Self {
        Self {
            votes: Arc::clone(&self.votes),
        }
    }
}

impl<V> RankingEngine<V>
where
    V: VoteStore + ?Sized,
{
    /// Create an engine reading from `votes`.
    pub fn new(votes: Arc<V>) -> Self {
        Self { votes }
    }

    /// Rank `questions` for `viewer`.
    ///
    /// Never fails as a whole: a question whose lookups fail is left out and
    /// reported in [`RankedQuestions::omitted`].
    pub async fn rank(&self, questions: Vec<Question>, viewer: &Viewer) -> RankedQuestions {
        let outcomes = join_all(
            questions
                .into_iter()
                .map(|question| self.annotate(question, viewer)),
        )
        .await;

        let mut ranked = Vec::with_capacity(outcomes.len());
        let mut omitted = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(entry) => ranked.push(entry),
                Err((question_id, error)) => {
                    warn!(%question_id, %error, "omitting question from ranking");
                    omitted.push(question_id);
                }
            }
        }
        ranked.sort_by(ranking_order);

        if !omitted.is_empty() {
            warn!(
                omitted = omitted.len(),
                ranked = ranked.len(),
                "ranking returned a partial result"
            );
        }

        RankedQuestions {
            questions: ranked,
            omitted,
        }
    }

    async fn annotate(
        &self,
        question: Question,
        viewer: &Viewer,
    ) -> Result<RankedQuestion, (QuestionId, VoteStoreError)> {
        let question_id = question.id();
        let vote_count = self
            .votes
            .count_votes(&question_id)
            .await
            .map_err(|error| (question_id, error))?;

        let viewer_can_vote = match viewer.external_id() {
            Some(voter) if can_vote(viewer) => !self
                .votes
                .has_voted(&question_id, voter)
                .await
                .map_err(|error| (question_id, error))?,
            _ => false,
        };

        Ok(RankedQuestion {
            question,
            vote_count,
            viewer_can_vote,
        })
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;

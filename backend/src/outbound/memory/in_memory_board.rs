//! Process-local board store implementing both driven ports.
//!
//! Every operation takes the lock once, so each write is atomic with respect
//! to concurrent callers. Data lives only as long as the process.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{BoardRepository, BoardRepositoryError, VoteStore, VoteStoreError};
use crate::domain::{ExternalId, Question, QuestionId, Topic, TopicId, Vote};

#[derive(Debug, Default)]
struct BoardState {
    topics: HashMap<TopicId, Topic>,
    questions: HashMap<QuestionId, Question>,
    votes: HashSet<Vote>,
}

/// In-memory implementation of [`BoardRepository`] and [`VoteStore`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use agora::domain::ports::VoteStore;
/// use agora::domain::{
///     ExternalId, Question, QuestionId, QuestionText, Topic, TopicDescription, TopicId,
///     TopicName, User,
/// };
/// use agora::domain::ports::BoardRepository;
/// use agora::outbound::memory::InMemoryBoard;
/// use chrono::Utc;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let board = Arc::new(InMemoryBoard::new());
/// let author = User::try_from_strings("oauth|ada", "Ada").expect("valid user");
/// let topic = Topic::new(
///     TopicId::random(),
///     TopicName::new("Lifetimes").expect("valid name"),
///     TopicDescription::default(),
///     author.clone(),
///     Utc::now(),
/// );
/// board.insert_topic(&topic).await.expect("topic stored");
/// let question = Question::new(
///     QuestionId::random(),
///     topic.id(),
///     QuestionText::new("Why 'static?").expect("valid text"),
///     author,
///     Utc::now(),
/// );
/// board.insert_question(&question).await.expect("question stored");
///
/// let voter = ExternalId::new("oauth|grace").expect("valid id");
/// board.cast_vote(&question.id(), &voter).await.expect("vote cast");
/// board.cast_vote(&question.id(), &voter).await.expect("vote cast again");
/// assert_eq!(board.count_votes(&question.id()).await.expect("count"), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBoard {
    state: RwLock<BoardState>,
}

impl InMemoryBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BoardState>, String> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BoardState>, String> {
        self.state.write().map_err(poisoned)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "board state lock poisoned".to_owned()
}

#[async_trait]
impl BoardRepository for InMemoryBoard {
    async fn insert_topic(&self, topic: &Topic) -> Result<(), BoardRepositoryError> {
        let mut state = self.write().map_err(BoardRepositoryError::connection)?;
        if state.topics.contains_key(&topic.id()) {
            return Err(BoardRepositoryError::query(format!(
                "duplicate topic id {}",
                topic.id()
            )));
        }
        state.topics.insert(topic.id(), topic.clone());
        Ok(())
    }

    async fn find_topic(&self, topic_id: &TopicId) -> Result<Option<Topic>, BoardRepositoryError> {
        let state = self.read().map_err(BoardRepositoryError::connection)?;
        Ok(state.topics.get(topic_id).cloned())
    }

    async fn list_topics_by_author(
        &self,
        author: &ExternalId,
    ) -> Result<Vec<Topic>, BoardRepositoryError> {
        let state = self.read().map_err(BoardRepositoryError::connection)?;
        let mut topics: Vec<Topic> = state
            .topics
            .values()
            .filter(|topic| topic.author().external_id() == author)
            .cloned()
            .collect();
        topics.sort_by(|left, right| {
            right
                .created_at()
                .cmp(&left.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });
        Ok(topics)
    }

    async fn insert_question(&self, question: &Question) -> Result<(), BoardRepositoryError> {
        let mut state = self.write().map_err(BoardRepositoryError::connection)?;
        if !state.topics.contains_key(&question.topic_id()) {
            return Err(BoardRepositoryError::unknown_topic(
                question.topic_id().to_string(),
            ));
        }
        if state.questions.contains_key(&question.id()) {
            return Err(BoardRepositoryError::query(format!(
                "duplicate question id {}",
                question.id()
            )));
        }
        state.questions.insert(question.id(), question.clone());
        Ok(())
    }

    async fn list_questions_for_topic(
        &self,
        topic_id: &TopicId,
    ) -> Result<Vec<Question>, BoardRepositoryError> {
        let state = self.read().map_err(BoardRepositoryError::connection)?;
        let mut questions: Vec<Question> = state
            .questions
            .values()
            .filter(|question| question.topic_id() == *topic_id)
            .cloned()
            .collect();
        questions.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(&right.id()))
        });
        Ok(questions)
    }
}

#[async_trait]
impl VoteStore for InMemoryBoard {
    async fn cast_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError> {
        let mut state = self.write().map_err(VoteStoreError::connection)?;
        if !state.questions.contains_key(question_id) {
            return Err(VoteStoreError::unknown_question(question_id.to_string()));
        }
        state.votes.insert(Vote::new(*question_id, voter_id.clone()));
        Ok(())
    }

    async fn retract_vote(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<(), VoteStoreError> {
        let mut state = self.write().map_err(VoteStoreError::connection)?;
        state.votes.remove(&Vote::new(*question_id, voter_id.clone()));
        Ok(())
    }

    async fn count_votes(&self, question_id: &QuestionId) -> Result<u64, VoteStoreError> {
        let state = self.read().map_err(VoteStoreError::connection)?;
        let count = state
            .votes
            .iter()
            .filter(|vote| vote.question_id == *question_id)
            .count();
        u64::try_from(count).map_err(|err| VoteStoreError::query(err.to_string()))
    }

    async fn has_voted(
        &self,
        question_id: &QuestionId,
        voter_id: &ExternalId,
    ) -> Result<bool, VoteStoreError> {
        let state = self.read().map_err(VoteStoreError::connection)?;
        Ok(state
            .votes
            .contains(&Vote::new(*question_id, voter_id.clone())))
    }
}

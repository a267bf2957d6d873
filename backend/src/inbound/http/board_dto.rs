//! Request and response bodies for the board endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{TopicView, TopicViewQuestion, VoteTally};
use crate::domain::{Question, Topic, User};

/// Request payload for creating a topic.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicBody {
    #[schema(example = "Async Rust")]
    pub name: Option<String>,
    #[schema(example = "Executors, wakers and pinning")]
    pub description: Option<String>,
}

/// Request payload for posting a question.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostQuestionBody {
    #[schema(example = "Why does this future need to be pinned?")]
    pub text: Option<String>,
}

/// Author attribution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    #[schema(example = "github|1024")]
    pub external_id: String,
    #[schema(example = "Ada Lovelace")]
    pub display_name: String,
}

impl From<&User> for AuthorResponse {
    fn from(value: &User) -> Self {
        Self {
            external_id: value.external_id().as_str().to_owned(),
            display_name: value.display_name().as_str().to_owned(),
        }
    }
}

/// A stored topic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub author: AuthorResponse,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<&Topic> for TopicResponse {
    fn from(value: &Topic) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().as_str().to_owned(),
            description: value.description().as_str().to_owned(),
            author: AuthorResponse::from(value.author()),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub topic_id: String,
    pub text: String,
    pub author: AuthorResponse,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<&Question> for QuestionResponse {
    fn from(value: &Question) -> Self {
        Self {
            id: value.id().to_string(),
            topic_id: value.topic_id().to_string(),
            text: value.text().as_str().to_owned(),
            author: AuthorResponse::from(value.author()),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// A question in display order with viewer-specific flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedQuestionResponse {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub vote_count: u64,
    pub viewer_can_vote: bool,
    pub belongs_to_viewer: bool,
}

impl From<&TopicViewQuestion> for RankedQuestionResponse {
    fn from(value: &TopicViewQuestion) -> Self {
        Self {
            question: QuestionResponse::from(&value.ranked.question),
            vote_count: value.ranked.vote_count,
            viewer_can_vote: value.ranked.viewer_can_vote,
            belongs_to_viewer: value.belongs_to_viewer,
        }
    }
}

/// A topic with its ranked questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicViewResponse {
    pub topic: TopicResponse,
    pub belongs_to_viewer: bool,
    pub viewer_can_vote: bool,
    pub questions: Vec<RankedQuestionResponse>,
    /// Questions left out because their vote lookups failed.
    pub omitted_question_ids: Vec<String>,
}

impl From<&TopicView> for TopicViewResponse {
    fn from(value: &TopicView) -> Self {
        Self {
            topic: TopicResponse::from(&value.topic),
            belongs_to_viewer: value.belongs_to_viewer,
            viewer_can_vote: value.viewer_can_vote,
            questions: value
                .questions
                .iter()
                .map(RankedQuestionResponse::from)
                .collect(),
            omitted_question_ids: value
                .omitted_question_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Current vote count for one question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VoteTallyResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub question_id: String,
    pub vote_count: u64,
    pub viewer_has_voted: bool,
}

impl From<VoteTally> for VoteTallyResponse {
    fn from(value: VoteTally) -> Self {
        Self {
            question_id: value.question_id.to_string(),
            vote_count: value.vote_count,
            viewer_has_voted: value.viewer_has_voted,
        }
    }
}

//! Topic and question HTTP handlers.
//!
//! ```text
//! GET  /api/v1/topics
//! POST /api/v1/topics
//! GET  /api/v1/topics/{topic_id}
//! POST /api/v1/topics/{topic_id}/questions
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::access::require_voter;
use crate::domain::ports::{CreateTopicRequest, PostQuestionRequest, TopicViewRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::board_dto::{
    CreateTopicBody, PostQuestionBody, QuestionResponse, TopicResponse, TopicViewResponse,
};
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_field;

/// List topics created by the signed-in viewer, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/topics",
    responses(
        (status = 200, description = "Topics authored by the viewer", body = [TopicResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["topics"],
    operation_id = "listMyTopics"
)]
#[get("/topics")]
pub async fn list_my_topics(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    let topics = state.board_query.topics_by_author(viewer).await?;
    let body: Vec<TopicResponse> = topics.iter().map(TopicResponse::from).collect();
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(body))
}

/// Create a topic owned by the signed-in viewer.
#[utoipa::path(
    post,
    path = "/api/v1/topics",
    request_body = CreateTopicBody,
    responses(
        (status = 201, description = "Topic created", body = TopicResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["topics"],
    operation_id = "createTopic"
)]
#[post("/topics")]
pub async fn create_topic(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateTopicBody>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    require_voter(&viewer)?;
    let CreateTopicBody { name, description } = payload.into_inner();
    let topic = state
        .board
        .create_topic(CreateTopicRequest {
            name: require_field(name, "name")?,
            description: description.unwrap_or_default(),
            viewer,
        })
        .await?;
    Ok(HttpResponse::Created().json(TopicResponse::from(&topic)))
}

/// Fetch a topic with its questions ranked by votes.
#[utoipa::path(
    get,
    path = "/api/v1/topics/{topic_id}",
    params(("topic_id" = String, Path, description = "Topic identifier")),
    responses(
        (status = 200, description = "Topic with ranked questions", body = TopicViewResponse),
        (status = 404, description = "Unknown or malformed topic", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["topics"],
    operation_id = "getTopic",
    security((), ("SessionCookie" = []))
)]
#[get("/topics/{topic_id}")]
pub async fn get_topic(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    let view = state
        .board_query
        .topic_view(TopicViewRequest {
            topic_id: path.into_inner(),
            viewer,
        })
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(TopicViewResponse::from(&view)))
}

/// Post a question under a topic.
#[utoipa::path(
    post,
    path = "/api/v1/topics/{topic_id}/questions",
    params(("topic_id" = String, Path, description = "Topic identifier")),
    request_body = PostQuestionBody,
    responses(
        (status = 201, description = "Question posted", body = QuestionResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown or malformed topic", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["topics"],
    operation_id = "postQuestion"
)]
#[post("/topics/{topic_id}/questions")]
pub async fn post_question(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<PostQuestionBody>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    require_voter(&viewer)?;
    let text = require_field(payload.into_inner().text, "text")?;
    let question = state
        .board
        .post_question(PostQuestionRequest {
            topic_id: path.into_inner(),
            text,
            viewer,
        })
        .await?;
    Ok(HttpResponse::Created().json(QuestionResponse::from(&question)))
}

#[cfg(test)]
#[path = "topics_tests.rs"]
mod tests;

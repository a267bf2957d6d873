//! Vote HTTP handlers.
//!
//! ```text
//! PUT    /api/v1/questions/{question_id}/vote
//! DELETE /api/v1/questions/{question_id}/vote
//! GET    /api/v1/questions/{question_id}/votes
//! ```
//!
//! Casting and retracting are idempotent, so both map to `PUT`/`DELETE` on
//! the viewer's vote resource and answer `204 No Content`.

use actix_web::{HttpResponse, delete, get, put, web};

use crate::domain::ports::{VoteRequest, VoteTallyRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::board_dto::VoteTallyResponse;
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Cast the viewer's vote on a question.
#[utoipa::path(
    put,
    path = "/api/v1/questions/{question_id}/vote",
    params(("question_id" = String, Path, description = "Question identifier")),
    responses(
        (status = 204, description = "Vote recorded"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Unknown or malformed question", body = ErrorSchema),
        (status = 503, description = "Vote store unavailable", body = ErrorSchema)
    ),
    tags = ["votes"],
    operation_id = "castVote"
)]
#[put("/questions/{question_id}/vote")]
pub async fn cast_vote(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    state
        .board
        .cast_vote(VoteRequest {
            question_id: path.into_inner(),
            viewer,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Retract the viewer's vote on a question.
#[utoipa::path(
    delete,
    path = "/api/v1/questions/{question_id}/vote",
    params(("question_id" = String, Path, description = "Question identifier")),
    responses(
        (status = 204, description = "Vote removed or never present"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Malformed question identifier", body = ErrorSchema),
        (status = 503, description = "Vote store unavailable", body = ErrorSchema)
    ),
    tags = ["votes"],
    operation_id = "retractVote"
)]
#[delete("/questions/{question_id}/vote")]
pub async fn retract_vote(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    state
        .board
        .retract_vote(VoteRequest {
            question_id: path.into_inner(),
            viewer,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Read the current vote count for a question.
#[utoipa::path(
    get,
    path = "/api/v1/questions/{question_id}/votes",
    params(("question_id" = String, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Current tally", body = VoteTallyResponse),
        (status = 404, description = "Malformed question identifier", body = ErrorSchema),
        (status = 503, description = "Vote store unavailable", body = ErrorSchema)
    ),
    tags = ["votes"],
    operation_id = "getVoteTally",
    security((), ("SessionCookie" = []))
)]
#[get("/questions/{question_id}/votes")]
pub async fn vote_tally(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let viewer = session.viewer()?;
    let tally = state
        .board_query
        .vote_tally(VoteTallyRequest {
            question_id: path.into_inner(),
            viewer,
        })
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(VoteTallyResponse::from(tally)))
}

#[cfg(test)]
#[path = "votes_tests.rs"]
mod tests;

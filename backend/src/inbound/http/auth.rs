//! Session termination.
//!
//! Sign-in is owned by the external authentication collaborator, which writes
//! the viewer identity into the session cookie. This adapter only ends it.

use actix_web::{HttpResponse, post};
use tracing::debug;

use crate::inbound::http::session::SessionContext;

/// Clear the viewer's session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    debug!("session cleared");
    HttpResponse::NoContent().finish()
}

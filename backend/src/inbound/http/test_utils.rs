//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, test, web};

use mockable::DefaultClock;

use crate::domain::{BoardService, Error, User};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryBoard;

/// Path of the test-only route that signs a viewer in.
pub const SIGN_IN_PATH: &str = "/test/sign-in/{external_id}/{display_name}";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Stand-in for the external authentication collaborator.
pub async fn sign_in(
    session: SessionContext,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, Error> {
    let (external_id, display_name) = path.into_inner();
    let user = User::try_from_strings(external_id, display_name)
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_viewer(&user)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Sign `external_id` in through [`SIGN_IN_PATH`] and return the session
/// cookie.
pub async fn sign_in_cookie<S>(app: &S, external_id: &str, display_name: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri(&format!("/test/sign-in/{external_id}/{display_name}"))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "sign-in failed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

/// Handler state backed by a fresh in-memory board.
pub fn in_memory_state() -> web::Data<HttpState> {
    let board = Arc::new(InMemoryBoard::new());
    let service = BoardService::new(Arc::clone(&board), board, Arc::new(DefaultClock));
    web::Data::new(HttpState::from_service(Arc::new(service)))
}

//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The authentication collaborator stores the viewer's external id and display
//! name in the session cookie. Handlers only see a [`Viewer`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, User, Viewer};

pub(crate) const EXTERNAL_ID_KEY: &str = "external_id";
pub(crate) const DISPLAY_NAME_KEY: &str = "display_name";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated viewer's identity in the session cookie.
    pub fn persist_viewer(&self, user: &User) -> Result<(), Error> {
        self.insert(EXTERNAL_ID_KEY, user.external_id().as_str())?;
        self.insert(DISPLAY_NAME_KEY, user.display_name().as_str())
    }

    /// Resolve the viewer for this request.
    ///
    /// Missing or invalid identity yields an anonymous viewer; invalid content
    /// is logged.
    pub fn viewer(&self) -> Result<Viewer, Error> {
        let external_id = self.get(EXTERNAL_ID_KEY)?;
        let display_name = self.get(DISPLAY_NAME_KEY)?;
        let (Some(external_id), Some(display_name)) = (external_id, display_name) else {
            return Ok(Viewer::anonymous());
        };

        match User::try_from_strings(external_id, display_name) {
            Ok(user) => Ok(Viewer::authenticated(user)),
            Err(error) => {
                warn!(%error, "invalid viewer identity in session cookie");
                Ok(Viewer::anonymous())
            }
        }
    }

    /// Drop all session state.
    pub fn clear(&self) {
        self.0.purge();
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), Error> {
        self.0
            .insert(key, value)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(key)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

//! The optional identity a request is made on behalf of.

use super::{ExternalId, User};

/// Explicit optional identity passed into every board entry point.
///
/// # Examples
/// ```
/// use agora::domain::{User, Viewer};
///
/// let anonymous = Viewer::anonymous();
/// assert!(anonymous.user().is_none());
///
/// let user = User::try_from_strings("oauth|1", "Ada").expect("valid user");
/// let viewer = Viewer::authenticated(user);
/// assert_eq!(viewer.external_id().map(|id| id.as_str()), Some("oauth|1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer(Option<User>);

impl Viewer {
    /// A request without an authenticated identity.
    pub const fn anonymous() -> Self {
        Self(None)
    }

    /// A request made by `user`.
    pub const fn authenticated(user: User) -> Self {
        Self(Some(user))
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    /// The authenticated user's external identifier, if any.
    pub fn external_id(&self) -> Option<&ExternalId> {
        self.user().map(User::external_id)
    }

    /// Whether an identity is present.
    pub const fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<User>> for Viewer {
    fn from(value: Option<User>) -> Self {
        Self(value)
    }
}

impl From<User> for Viewer {
    fn from(value: User) -> Self {
        Self::authenticated(value)
    }
}

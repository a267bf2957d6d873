//! Identity snapshot attached to topics, questions and votes.
//!
//! Users are owned by an external authentication collaborator. The board only
//! stores the pair it was handed at write time, so these types validate shape
//! and never look anything up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors raised while constructing identity values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The external identifier was empty.
    #[error("external id must not be empty")]
    EmptyExternalId,
    /// The external identifier carried leading or trailing whitespace.
    #[error("external id must not have surrounding whitespace")]
    PaddedExternalId,
    /// The display name was blank.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// Stable identifier issued by the authentication provider.
///
/// Compared byte-for-byte; ownership and vote keys rely on that equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalId(String);

impl ExternalId {
    /// Validate and construct an [`ExternalId`].
    ///
    /// # Examples
    /// ```
    /// use agora::domain::ExternalId;
    ///
    /// assert!(ExternalId::new("github|1234").is_ok());
    /// assert!(ExternalId::new(" github|1234").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyExternalId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedExternalId);
        }
        Ok(Self(id))
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ExternalId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExternalId> for String {
    fn from(value: ExternalId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ExternalId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Name shown next to authored content. Stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate, trim and construct a [`DisplayName`].
    pub fn new(display_name: impl Into<String>) -> Result<Self, UserValidationError> {
        let raw = display_name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the display name text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Immutable `{externalId, displayName}` snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    external_id: ExternalId,
    display_name: DisplayName,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(external_id: ExternalId, display_name: DisplayName) -> Self {
        Self {
            external_id,
            display_name,
        }
    }

    /// Validate raw strings and build a user.
    ///
    /// # Examples
    /// ```
    /// use agora::domain::User;
    ///
    /// let user = User::try_from_strings("github|42", "  Ada ").expect("valid user");
    /// assert_eq!(user.display_name().as_str(), "Ada");
    /// ```
    pub fn try_from_strings(
        external_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            ExternalId::new(external_id)?,
            DisplayName::new(display_name)?,
        ))
    }

    /// Identifier used for ownership and vote keys.
    pub fn external_id(&self) -> &ExternalId {
        &self.external_id
    }

    /// Name shown to other users.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

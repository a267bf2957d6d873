//! UUID-backed record identifiers for topics and questions.
//!
//! Identifiers arrive from clients as text. Parsing failures are reported as
//! [`IdentifierError`], which adapters surface as `invalid_reference`.

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::Error;

/// A textual identifier that is not a valid UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a valid identifier")]
pub struct IdentifierError {
    field: &'static str,
    value: String,
}

impl IdentifierError {
    /// Name of the offending field, e.g. `questionId`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl From<IdentifierError> for Error {
    fn from(error: IdentifierError) -> Self {
        Self::invalid_reference(error.to_string()).with_details(json!({
            "field": error.field,
            "value": error.value,
            "code": "malformed_identifier",
        }))
    }
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse client-supplied text.
            pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
                Uuid::parse_str(raw.trim())
                    .map(Self)
                    .map_err(|_| IdentifierError {
                        field: $field,
                        value: raw.to_owned(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_identifier!(
    /// Identifier of a [`Topic`](super::Topic).
    TopicId,
    "topicId"
);

define_identifier!(
    /// Identifier of a [`Question`](super::Question).
    QuestionId,
    "questionId"
);

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies use optional fields so a missing value produces the API's
//! JSON error envelope instead of Actix's plain-text extractor error.

use serde_json::json;

use crate::domain::Error;

/// Build the error returned when a required body field is absent.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("{field} is required")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Unwrap a required body field.
pub(crate) fn require_field<T>(value: Option<T>, field: &'static str) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

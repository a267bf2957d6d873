//! Agora question board backend.
//!
//! Topics hold questions; authenticated viewers vote on questions, and topic
//! views rank questions by vote count with the newest first on ties.
//!
//! The crate follows a hexagonal layout: `domain` holds entities, ports and
//! services; `outbound` holds the PostgreSQL and in-memory adapters; `inbound`
//! exposes the HTTP API.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

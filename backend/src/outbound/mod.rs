//! Outbound adapters implementing the board's driven ports.
//!
//! - **persistence**: PostgreSQL-backed adapters using Diesel ORM
//! - **memory**: process-local adapters for development and tests
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;

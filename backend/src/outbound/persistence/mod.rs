//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Adapters here implement the board's driven ports on top of `diesel-async`
//! with `bb8` pooling. They only translate between Diesel rows and domain
//! types:
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Pool and Diesel failures are mapped to each port's error enum.
//! - Foreign key violations become the port's unknown-reference variant.
//!
//! # Example
//!
//! ```no_run
//! use agora::outbound::persistence::{DbPool, DieselVoteStore, PoolConfig};
//!
//! # async fn demo() -> Result<(), agora::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/agora")).await?;
//! let votes = DieselVoteStore::new(pool);
//! # let _ = votes;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_board_repository;
mod diesel_vote_store;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_board_repository::DieselBoardRepository;
pub use diesel_vote_store::DieselVoteStore;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! In-memory adapters used when no database is configured and in tests.

mod in_memory_board;

pub use in_memory_board::InMemoryBoard;

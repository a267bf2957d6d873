//! Domain ports.
//!
//! Driven ports (`BoardRepository`, `VoteStore`) are implemented by outbound
//! adapters. Driving ports (`BoardCommand`, `BoardQuery`) are implemented by
//! domain services and called from inbound adapters.

mod board_command;
mod board_query;
mod board_repository;
mod macros;
mod vote_store;

pub(crate) use macros::define_port_error;

pub use board_command::{BoardCommand, CreateTopicRequest, PostQuestionRequest, VoteRequest};
pub use board_query::{
    BoardQuery, TopicView, TopicViewQuestion, TopicViewRequest, VoteTally, VoteTallyRequest,
};
pub use board_repository::{BoardRepository, BoardRepositoryError};
pub use vote_store::{VoteStore, VoteStoreError};

#[cfg(test)]
pub use board_command::MockBoardCommand;
#[cfg(test)]
pub use board_query::MockBoardQuery;
#[cfg(test)]
pub use board_repository::MockBoardRepository;
#[cfg(test)]
pub use vote_store::MockVoteStore;

//! Domain primitives, aggregates and services for the question board.
//!
//! Purpose: define strongly typed board entities used by the API and
//! persistence layers, plus the services that implement the driving ports.
//! Types are immutable once constructed; validation happens in constructors.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, Viewer: identity of authors and of the requesting party.
//! - Topic, Question, Vote: board content.
//! - RankingEngine: vote-aware ordering of questions.
//! - BoardService: implementation of `BoardCommand` and `BoardQuery`.

pub mod access;
mod board_service;
pub mod error;
mod identifier;
pub mod ports;
mod question;
mod ranking;
mod topic;
mod trace_id;
pub mod user;
mod viewer;
mod vote;

pub use self::board_service::BoardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifier::{IdentifierError, QuestionId, TopicId};
pub use self::question::{Question, QuestionText, QuestionValidationError};
pub use self::ranking::{RankedQuestion, RankedQuestions, RankingEngine, ranking_order};
pub use self::topic::{Topic, TopicDescription, TopicName, TopicValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DisplayName, ExternalId, User, UserValidationError};
pub use self::viewer::Viewer;
pub use self::vote::Vote;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use agora::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
///
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;

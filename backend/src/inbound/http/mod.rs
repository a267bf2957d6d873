//! HTTP inbound adapter exposing the board's REST endpoints.

pub mod auth;
pub mod board_dto;
pub mod cache_control;
pub mod error;
pub mod health;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod topics;
pub(crate) mod validation;
pub mod votes;

pub use error::ApiResult;

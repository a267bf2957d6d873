//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BoardCommand, BoardQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub board: Arc<dyn BoardCommand>,
    pub board_query: Arc<dyn BoardQuery>,
}

impl HttpState {
    /// Bundle the command and query ports.
    pub fn new(board: Arc<dyn BoardCommand>, board_query: Arc<dyn BoardQuery>) -> Self {
        Self { board, board_query }
    }

    /// Build state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use agora::domain::BoardService;
    /// use agora::inbound::http::state::HttpState;
    /// use agora::outbound::memory::InMemoryBoard;
    /// use mockable::DefaultClock;
    ///
    /// let board = Arc::new(InMemoryBoard::new());
    /// let service = Arc::new(BoardService::new(
    ///     Arc::clone(&board),
    ///     board,
    ///     Arc::new(DefaultClock),
    /// ));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: BoardCommand + BoardQuery + 'static,
    {
        Self {
            board: Arc::clone(&service) as Arc<dyn BoardCommand>,
            board_query: service,
        }
    }
}

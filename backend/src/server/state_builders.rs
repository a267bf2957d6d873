//! Builders for the HTTP state from configured storage.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use agora::domain::BoardService;
use agora::domain::ports::{BoardRepository, VoteStore};
use agora::inbound::http::state::HttpState;
use agora::outbound::memory::InMemoryBoard;
use agora::outbound::persistence::{DbPool, DieselBoardRepository, DieselVoteStore};

use super::ServerConfig;

/// Wire a board service over a repository and vote store.
fn board_state<R, V>(repository: Arc<R>, votes: Arc<V>, clock: Arc<dyn Clock>) -> HttpState
where
    R: BoardRepository + ?Sized + 'static,
    V: VoteStore + ?Sized + 'static,
{
    HttpState::from_service(Arc::new(BoardService::new(repository, votes, clock)))
}

fn diesel_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    board_state(
        Arc::new(DieselBoardRepository::new(pool.clone())),
        Arc::new(DieselVoteStore::new(pool.clone())),
        clock,
    )
}

fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    let board = Arc::new(InMemoryBoard::new());
    board_state(Arc::clone(&board), board, clock)
}

/// Build the shared HTTP state, preferring PostgreSQL when a pool is
/// configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => {
            info!("board storage: postgres");
            diesel_state(pool, clock)
        }
        None => {
            warn!("board storage: in-memory; data is lost on restart");
            in_memory_state(clock)
        }
    };
    web::Data::new(state)
}

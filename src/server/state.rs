//! Application state for the backend server.
//!
//! Holds the address of the single game session actor, shared between HTTP and
//! WebSocket handlers.

use actix::Addr;

use crate::server::game_session::GameSession;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Owner of the board, the round and every live connection.
    pub game_session: Addr<GameSession>,
}

impl AppState {
    pub fn new(game_session: Addr<GameSession>) -> Self {
        AppState { game_session }
    }
}

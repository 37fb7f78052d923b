//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Application state shared with handlers
//! - HTTP/WebSocket routing and the admin endpoints
//! - The presence directory
//! - The game session actor (dealing, submissions, round resolution)

pub mod state;
pub mod router;
pub mod admin;
pub mod directory;
pub mod game_session;
pub mod ws_error;

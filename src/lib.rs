//! Robot football: a board authority and round coordinator served over WebSocket.

pub mod config;
pub mod error;
pub mod game;
pub mod server;

#[cfg(test)]
mod tests;

//! Presence tracking: which live connection speaks for which player.
//!
//! Players outlive their connections. A closed socket only forgets the binding
//! when it is still the current one, so a stale close arriving after a
//! reconnect never evicts the new connection.

use std::collections::HashMap;

use log::info;
use uuid::Uuid;

use crate::error::RegistrationError;
use crate::game::entities::{Player, TeamSide};
use crate::game::state::Board;
use crate::game::types::PlayerId;

#[derive(Debug, Clone)]
struct Binding<H> {
    conn_id: Uuid,
    handle: H,
}

/// Result of a `player` registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub player: Player,
    pub side: TeamSide,
    /// False when the identifier was already known.
    pub created: bool,
}

/// Create the player on first sight and seat it, or return the existing one.
pub fn register(board: &mut Board, id: &str, name: &str) -> Result<Registration, RegistrationError> {
    if let (Some(player), Some(side)) = (board.player(id), board.team_of(id)) {
        return Ok(Registration {
            player: player.clone(),
            side,
            created: false,
        });
    }
    let side = board
        .add_player(Player::new(id, name))
        .ok_or(RegistrationError::TeamsFull)?;
    let player = board.player(id).cloned().ok_or(RegistrationError::TeamsFull)?;
    info!("[Directory] Registered {} as '{}' on {:?}", id, player.name, side);
    Ok(Registration {
        player,
        side,
        created: true,
    })
}

pub fn lookup<'a>(board: &'a Board, id: &str) -> Option<&'a Player> {
    board.player(id)
}

/// Live connections, keyed by player identifier or, for spectators, by connection id.
#[derive(Debug)]
pub struct Directory<H> {
    players: HashMap<PlayerId, Binding<H>>,
    spectators: HashMap<Uuid, H>,
}

impl<H> Default for Directory<H> {
    fn default() -> Self {
        Self {
            players: HashMap::new(),
            spectators: HashMap::new(),
        }
    }
}

impl<H: Clone> Directory<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `id` with a connection, replacing any previous one.
    pub fn bind(&mut self, id: &str, conn_id: Uuid, handle: H) {
        self.players.insert(id.to_string(), Binding { conn_id, handle });
    }

    pub fn add_spectator(&mut self, conn_id: Uuid, handle: H) {
        self.spectators.insert(conn_id, handle);
    }

    /// Forget a closed connection. Returns the player it spoke for, if it still did.
    pub fn unbind(&mut self, conn_id: Uuid) -> Option<PlayerId> {
        self.spectators.remove(&conn_id);
        let id = self
            .players
            .iter()
            .find(|(_, binding)| binding.conn_id == conn_id)
            .map(|(id, _)| id.clone())?;
        self.players.remove(&id);
        Some(id)
    }

    pub fn connection(&self, id: &str) -> Option<&H> {
        self.players.get(id).map(|b| &b.handle)
    }

    pub fn spectators(&self) -> impl Iterator<Item = &H> {
        self.spectators.values()
    }

    pub fn players(&self) -> impl Iterator<Item = &H> {
        self.players.values().map(|b| &b.handle)
    }

    /// Every live connection, players first.
    pub fn all(&self) -> impl Iterator<Item = &H> {
        self.players().chain(self.spectators())
    }
}

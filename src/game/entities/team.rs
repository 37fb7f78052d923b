use serde::{Deserialize, Serialize};

use crate::config::game::TEAM_SIZE;
use crate::game::entities::player::Player;
use crate::game::types::Position;

/// Which of the two teams. `One` defends the west endzone, `Two` the east one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    One,
    Two,
}

/// Public identity of a team, sent to a player once it is seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub color: String,
    /// Join order. Slot `i` uses `default_positions[i]`.
    pub players: Vec<Player>,
    #[serde(skip)]
    pub default_positions: Vec<Position>,
    pub score: u32,
}

impl Team {
    pub fn new(name: &str, color: &str, default_positions: Vec<Position>) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            players: Vec::with_capacity(TEAM_SIZE),
            default_positions,
            score: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= TEAM_SIZE.min(self.default_positions.len())
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Default position of the next player to join, if a slot is left.
    pub fn next_slot(&self) -> Option<Position> {
        if self.is_full() {
            return None;
        }
        self.default_positions.get(self.players.len()).copied()
    }

    /// Seat `player` in the next free slot. Returns false when full or already seated.
    pub fn seat(&mut self, mut player: Player) -> bool {
        if self.is_full() || self.player(&player.id).is_some() {
            return false;
        }
        let slot = self.default_positions[self.players.len()];
        player.pos = slot;
        player.default_pos = slot;
        self.players.push(player);
        true
    }

    pub fn info(&self) -> TeamInfo {
        TeamInfo {
            name: self.name.clone(),
            color: self.color.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::game::{MAX_DEATHS, NAME_MAX_LEN};
use crate::game::types::{PlayerId, Position};

/// A robot on the field, owned by its team for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub pos: Position,
    pub default_pos: Position,
    pub deaths: u32,
    pub is_dead: bool,
}

impl Player {
    /// New, unseated player. Its positions are assigned when a team seats it.
    pub fn new(id: &str, raw_name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: sanitize_name(raw_name, id),
            pos: Position::default(),
            default_pos: Position::default(),
            deaths: 0,
            is_dead: false,
        }
    }

    pub fn kill(&mut self) {
        self.is_dead = true;
        self.deaths += 1;
    }

    pub fn revive_at(&mut self, pos: Position) {
        self.pos = pos;
        self.is_dead = false;
    }

    pub fn can_respawn(&self) -> bool {
        self.is_dead && self.deaths < MAX_DEATHS
    }
}

/// Keep ASCII letters, digits, `_` and spaces, capped at [`NAME_MAX_LEN`].
/// Falls back to `Robot_` plus the first identifier characters when nothing survives.
pub fn sanitize_name(raw: &str, id: &str) -> String {
    let name: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ' ')
        .take(NAME_MAX_LEN)
        .collect();
    if !name.trim().is_empty() {
        return name;
    }
    let suffix: String = id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(NAME_MAX_LEN - "Robot_".len())
        .collect();
    format!("Robot_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Ada_Bot 1", "x"), "Ada_Bot 1");
        assert_eq!(sanitize_name("<b>Bobby</b>!", "x"), "bBobbyb");
        assert_eq!(sanitize_name("abcdefghijklmnop", "x"), "abcdefghij");
        assert_eq!(sanitize_name("   ", "4f2a-91c3"), "Robot_4f2a");
        assert_eq!(sanitize_name("", ""), "Robot_");
    }

    #[test]
    fn test_death_counter_caps_respawn() {
        let mut player = Player::new("id", "Ada");
        assert!(!player.can_respawn());
        for _ in 0..MAX_DEATHS - 1 {
            player.kill();
            assert!(player.can_respawn());
            player.revive_at(Position::default());
        }
        player.kill();
        assert_eq!(player.deaths, MAX_DEATHS);
        assert!(!player.can_respawn());
    }
}

use serde::{Deserialize, Serialize};

/// Opaque, client-supplied identifier. Stable across reconnects.
pub type PlayerId = String;

/// Facing on the grid. The discriminants form the cyclic group used for turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Direction {
    #[default]
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Rotate by `offset` quarter turns (positive is counter-clockwise).
    pub fn turned(self, offset: i32) -> Self {
        match (self as i32 + offset).rem_euclid(4) {
            0 => Direction::East,
            1 => Direction::North,
            2 => Direction::West,
            _ => Direction::South,
        }
    }

    pub fn opposite(self) -> Self {
        self.turned(2)
    }

    /// Unit step on the grid. North is toward row 0.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::East),
            1 => Ok(Direction::North),
            2 => Ok(Direction::West),
            3 => Ok(Direction::South),
            other => Err(format!("invalid direction {other}")),
        }
    }
}

/// A cell plus a facing. Players and the ball each own exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub d: Direction,
}

impl Position {
    pub fn new(x: i32, y: i32, d: Direction) -> Self {
        Self { x, y, d }
    }

    /// Same grid cell, ignoring facing.
    pub fn same_cell(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    pub fn facing(self, d: Direction) -> Self {
        Self { d, ..self }
    }
}

/// Card actions. Wire values match the card-selection UI (1..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActionKind {
    Move1 = 1,
    Move2 = 2,
    Backup = 3,
    Kick = 4,
    TurnLeft = 5,
    TurnRight = 6,
    TurnAround = 7,
}

impl From<ActionKind> for u8 {
    fn from(action: ActionKind) -> Self {
        action as u8
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ActionKind::Move1),
            2 => Ok(ActionKind::Move2),
            3 => Ok(ActionKind::Backup),
            4 => Ok(ActionKind::Kick),
            5 => Ok(ActionKind::TurnLeft),
            6 => Ok(ActionKind::TurnRight),
            7 => Ok(ActionKind::TurnAround),
            other => Err(format!("invalid action {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "p")]
    pub priority: u32,
    #[serde(rename = "a")]
    pub action: ActionKind,
}

impl Card {
    pub fn new(priority: u32, action: ActionKind) -> Self {
        Self { priority, action }
    }
}

/// Classification of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    OutOfBounds,
    Endzone,
    Field,
}

/// What sits on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Ball,
    Player(PlayerId),
}

//! Field geometry.
//!
//! Pure functions over integer cells: zone classification and forward
//! translation. Nothing here looks at occupancy.

use crate::config::game::{ENDZONE_DEPTH, FIELD_LENGTH, FIELD_WIDTH, GOAL_MOUTH_HALF_WIDTH};
use crate::game::types::{Direction, Position, Zone};

/// Classify a cell. Total over every integer coordinate.
pub fn classify(pos: Position) -> Zone {
    if pos.x < 0 || pos.x >= FIELD_LENGTH || pos.y < 0 || pos.y >= FIELD_WIDTH {
        return Zone::OutOfBounds;
    }
    if pos.x < ENDZONE_DEPTH || pos.x >= FIELD_LENGTH - ENDZONE_DEPTH {
        return if in_goal_mouth(pos.y) {
            Zone::Endzone
        } else {
            Zone::OutOfBounds
        };
    }
    Zone::Field
}

fn in_goal_mouth(y: i32) -> bool {
    let centre = FIELD_WIDTH / 2;
    (centre - GOAL_MOUTH_HALF_WIDTH..=centre + GOAL_MOUTH_HALF_WIDTH).contains(&y)
}

/// Translate `distance` cells along `direction`. Negative distances step backwards.
/// The facing of `pos` is preserved.
pub fn position_in_front(pos: Position, direction: Direction, distance: i32) -> Position {
    let (dx, dy) = direction.delta();
    Position {
        x: pos.x + dx * distance,
        y: pos.y + dy * distance,
        d: pos.d,
    }
}

/// Kickoff cell, `(⌊length/2⌋, ⌊width/2⌋)`.
pub fn field_centre() -> Position {
    Position::new(FIELD_LENGTH / 2, FIELD_WIDTH / 2, Direction::East)
}

/// True when the cell lies in the western half, i.e. belongs to the west endzone side.
pub fn is_west_half(pos: Position) -> bool {
    pos.x < FIELD_LENGTH / 2
}

use crate::game::entities::TeamSide;
use crate::game::grid::classify;
use crate::game::state::Board;
use crate::game::types::{Direction, Occupant, Position, Zone};

/// Render the board as text, two characters per cell, one line per row.
///
/// `##` out of bounds, `::` endzone, `. ` field, `()` ball, then team digit plus facing
/// arrow for robots (`1>`, `2^`, ...).
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(((board.field_length * 2 + 1) * board.field_width) as usize);
    for y in 0..board.field_width {
        for x in 0..board.field_length {
            let pos = Position::new(x, y, Direction::East);
            let symbol = match board.occupant_at(pos) {
                Occupant::Ball => "()".to_string(),
                Occupant::Player(id) => {
                    let team = match board.team_of(&id) {
                        Some(TeamSide::One) => '1',
                        Some(TeamSide::Two) => '2',
                        None => '?',
                    };
                    let facing = board.player(&id).map(|p| arrow(p.pos.d)).unwrap_or(' ');
                    format!("{team}{facing}")
                }
                Occupant::Empty => match classify(pos) {
                    Zone::OutOfBounds => "##".to_string(),
                    Zone::Endzone => "::".to_string(),
                    Zone::Field => ". ".to_string(),
                },
            };
            out.push_str(&symbol);
        }
        out.push('\n');
    }
    out
}

fn arrow(d: Direction) -> char {
    match d {
        Direction::East => '>',
        Direction::North => '^',
        Direction::West => '<',
        Direction::South => 'v',
    }
}

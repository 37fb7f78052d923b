use log::info;

use crate::game::entities::{Player, TeamSide};
use crate::game::grid::{classify, is_west_half};
use crate::game::state::Board;
use crate::game::types::{Occupant, PlayerId, Position, Zone};

/// Respawn search order around a default position: the cell itself, cardinals, diagonals.
const RESPAWN_OFFSETS: [(i32, i32); 9] = [
    (0, 0),
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// Kill live players standing in an endzone, then score the ball if it reached one.
///
/// The ball in the west endzone scores for team 2 and vice versa. A score resets the board.
pub fn check_end_round_condition(board: &mut Board) -> bool {
    for player in board.players_mut() {
        if !player.is_dead && classify(player.pos) == Zone::Endzone {
            player.kill();
            info!("[Rules] {} ran into an endzone (deaths={})", player.name, player.deaths);
        }
    }

    if classify(board.ball.pos) != Zone::Endzone {
        return false;
    }
    let scorer = if is_west_half(board.ball.pos) {
        TeamSide::Two
    } else {
        TeamSide::One
    };
    let team = board.team_mut(scorer);
    team.score += 1;
    info!("[Rules] {} scored, score is now {}", team.name, team.score);
    board.reset();
    true
}

/// Bring back dead players that have deaths left, as close to their slot as possible.
pub fn fix_players(board: &mut Board) -> Vec<Player> {
    let candidates: Vec<PlayerId> = board
        .players()
        .filter(|p| p.can_respawn())
        .map(|p| p.id.clone())
        .collect();

    let mut revived = Vec::new();
    for id in candidates {
        let Some(default_pos) = board.player(&id).map(|p| p.default_pos) else {
            continue;
        };
        let Some(cell) = open_cell_near(board, default_pos) else {
            continue;
        };
        if let Some(player) = board.player_mut(&id) {
            player.revive_at(cell);
            revived.push(player.clone());
        }
    }
    revived
}

/// First empty field cell at `slot`, then its cardinal neighbours, then its diagonals.
/// The returned position keeps the slot's facing.
pub fn open_cell_near(board: &Board, slot: Position) -> Option<Position> {
    RESPAWN_OFFSETS
        .iter()
        .map(|(dx, dy)| Position::new(slot.x + dx, slot.y + dy, slot.d))
        .find(|cell| classify(*cell) == Zone::Field && board.occupant_at(*cell) == Occupant::Empty)
}

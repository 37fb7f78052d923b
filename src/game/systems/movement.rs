//! Player movement system.
//!
//! This module resolves moves, backups, turns and kicks against the board,
//! including push-chains through players and the ball.

use crate::game::grid::{classify, position_in_front};
use crate::game::state::Board;
use crate::game::types::{Direction, Occupant, Position, Zone};

/// Collect the objects a one-cell move from `from` along `direction` would push.
///
/// Walks forward until an empty field or endzone cell closes the chain. An occupied
/// endzone cell joins the chain like any other. Returns `None` when the chain runs into an out-of-bounds cell: the move is illegal.
pub fn objects_to_move(board: &Board, from: Position, direction: Direction) -> Option<Vec<Occupant>> {
    let mut chain = Vec::new();
    let mut distance = 1;
    loop {
        let cell = position_in_front(from, direction, distance);
        if classify(cell) == Zone::OutOfBounds {
            return None;
        }
        match board.occupant_at(cell) {
            Occupant::Empty => return Some(chain),
            occupant => chain.push(occupant),
        }
        distance += 1;
    }
}

/// True when the ball sits on the cell directly ahead of `pos`.
pub fn has_ball_control(board: &Board, pos: Position) -> bool {
    board.ball.pos.same_cell(&position_in_front(pos, pos.d, 1))
}

/// Move the player one cell along `direction`, pushing whatever is in the way.
/// Returns false (and leaves the board untouched) when the move is illegal.
pub fn push_step(board: &mut Board, player_id: &str, direction: Direction) -> bool {
    let Some(from) = board.player(player_id).map(|p| p.pos) else {
        return false;
    };
    let Some(chain) = objects_to_move(board, from, direction) else {
        return false;
    };
    for occupant in &chain {
        shift(board, occupant, direction);
    }
    if let Some(player) = board.player_mut(player_id) {
        player.pos = position_in_front(from, direction, 1);
    }
    true
}

/// One step along the player's facing.
pub fn step_forward(board: &mut Board, player_id: &str) -> bool {
    match board.player(player_id).map(|p| p.pos.d) {
        Some(facing) => push_step(board, player_id, facing),
        None => false,
    }
}

/// One step against the player's facing. A controlled ball trails into the vacated cell.
pub fn back_up(board: &mut Board, player_id: &str) -> bool {
    let Some(pos) = board.player(player_id).map(|p| p.pos) else {
        return false;
    };
    let had_ball = has_ball_control(board, pos);
    let backwards = pos.d.opposite();
    let moved = push_step(board, player_id, backwards);
    if had_ball {
        let trail = position_in_front(board.ball.pos, backwards, 1);
        if board.is_open(trail) {
            board.ball.pos = trail.facing(backwards);
        }
    }
    moved
}

/// Rotate by `offset` quarter turns. A controlled ball is carried round when the new
/// forward cell is open.
pub fn turn_player(board: &mut Board, player_id: &str, offset: i32) {
    let Some(pos) = board.player(player_id).map(|p| p.pos) else {
        return;
    };
    let had_ball = has_ball_control(board, pos);
    let facing = pos.d.turned(offset);
    if let Some(player) = board.player_mut(player_id) {
        player.pos.d = facing;
    }
    if had_ball {
        let carried = position_in_front(pos, facing, 1);
        if board.is_open(carried) {
            board.ball.pos = carried.facing(facing);
        }
    }
}

/// Kick whatever is directly ahead.
///
/// A ball travels two cells when both are open, one when only the first is.
/// A player is shoved one cell when the cell behind it is open.
pub fn kick(board: &mut Board, player_id: &str) -> bool {
    let Some(pos) = board.player(player_id).map(|p| p.pos) else {
        return false;
    };
    let facing = pos.d;
    match board.occupant_at(position_in_front(pos, facing, 1)) {
        Occupant::Ball => {
            let next = position_in_front(pos, facing, 2);
            if !board.is_open(next) {
                return false;
            }
            let beyond = position_in_front(pos, facing, 3);
            let landing = if board.is_open(beyond) { beyond } else { next };
            board.ball.pos = landing.facing(facing);
            true
        }
        Occupant::Player(target) => {
            let beyond = position_in_front(pos, facing, 2);
            if !board.is_open(beyond) {
                return false;
            }
            if let Some(player) = board.player_mut(&target) {
                player.pos = position_in_front(player.pos, facing, 1);
            }
            true
        }
        Occupant::Empty => false,
    }
}

fn shift(board: &mut Board, occupant: &Occupant, direction: Direction) {
    match occupant {
        Occupant::Ball => {
            board.ball.pos = position_in_front(board.ball.pos, direction, 1).facing(direction);
        }
        Occupant::Player(id) => {
            if let Some(player) = board.player_mut(id) {
                player.pos = position_in_front(player.pos, direction, 1);
            }
        }
        Occupant::Empty => {}
    }
}

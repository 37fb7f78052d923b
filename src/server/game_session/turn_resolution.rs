/// Round resolution for a GameSession.
///
/// One move per step: reveal the card to displays, wait `apply_delay`, apply it,
/// broadcast the board, then wait out the rest of the reveal interval. A score
/// or the last move ends the round and triggers the next deal.
use actix::prelude::*;
use log::{debug, info};

use crate::game::entities::TeamSide;
use crate::game::round::Move;
use crate::game::systems::render_board;
use crate::server::game_session::dealing;
use crate::server::game_session::messages::{CardReveal, ServerMessage};
use crate::server::game_session::server::GameSession;

/// Freeze submissions into the move sequence and schedule the first reveal.
pub fn start_resolution(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.cancel_deadline(ctx);
    let moves = this.round.begin_resolution();
    info!("[GameSession] Resolving round: {} moves", moves);
    if moves == 0 {
        finish_round(this, ctx);
        return;
    }
    let delay = this.timings.reveal_interval;
    this.schedule(ctx, delay, reveal_next_move);
}

/// Publish the next card, then apply it after the display pause.
pub fn reveal_next_move(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.step_timer = None;
    let Some(next) = this.round.next_move() else {
        finish_round(this, ctx);
        return;
    };

    let name = this
        .board
        .player(&next.player_id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| next.player_id.clone());
    let color = match this.board.team_of(&next.player_id) {
        Some(TeamSide::One) => this.board.team1.color.clone(),
        Some(TeamSide::Two) => this.board.team2.color.clone(),
        None => String::new(),
    };
    this.send_to_spectators(ServerMessage::Card(CardReveal {
        player: name,
        color,
        card: next.card,
    }));

    let delay = this.timings.apply_delay;
    this.schedule(ctx, delay, move |act, ctx| apply_revealed_move(act, ctx, next));
}

/// Apply a revealed move and decide whether the round goes on.
pub fn apply_revealed_move(this: &mut GameSession, ctx: &mut Context<GameSession>, next: Move) {
    this.step_timer = None;
    this.board.apply_move(&next.player_id, &next.card);
    debug!(
        "[GameSession] {} played {:?}\n{}",
        next.player_id,
        next.card.action,
        render_board(&this.board)
    );

    let scored = this.board.check_end_round_condition();
    this.broadcast_board();

    if scored || this.round.is_exhausted() {
        finish_round(this, ctx);
    } else {
        let delay = this.timings.settle_delay();
        this.schedule(ctx, delay, reveal_next_move);
    }
}

/// Close the round: respawn, publish, deal again.
pub fn finish_round(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.cancel_step_timer(ctx);
    this.round.finish();

    for player in this.board.fix_players() {
        info!("[GameSession] {} respawned", player.id);
        let id = player.id.clone();
        this.send_to_player(&id, ServerMessage::Player(Some(player)));
    }
    this.broadcast_board();
    info!(
        "[GameSession] Round over, score {}-{}",
        this.board.team1.score, this.board.team2.score
    );

    dealing::deal_round(this, ctx);
}

/// Dealing and the submission barrier for a GameSession.
///
/// A deal opens collection. When one team has submitted and the other has not,
/// the laggers are warned and a deadline is armed; at expiry their missing
/// submissions are filled in and the round resolves anyway.
use std::time::Instant;

use actix::prelude::*;
use log::{info, warn};

use crate::game::round::{Phase, SubmitOutcome};
use crate::game::types::PlayerId;
use crate::server::game_session::messages::{CardSubmission, ServerMessage, TimeNotice};
use crate::server::game_session::server::{Connection, Deadline, GameSession};
use crate::server::game_session::turn_resolution;
use crate::server::ws_error;

/// Deal a fresh hand to every seated player and send each to its owner.
pub fn deal_round(this: &mut GameSession, _ctx: &mut Context<GameSession>) {
    if this.board.player_count() == 0 {
        warn!("[GameSession] No players seated, not dealing");
        return;
    }
    let hands = this.round.deal(&this.board, &mut this.rng);
    for (id, cards) in hands {
        this.send_to_player(&id, ServerMessage::Cards(cards));
    }
    info!("[GameSession] Round dealt to {} players", this.board.player_count());
}

/// Handle a `submit-cards` frame. Rejections are answered on `reply`.
pub fn receive_submission(
    this: &mut GameSession,
    ctx: &mut Context<GameSession>,
    reply: &Connection,
    submission: CardSubmission,
) {
    match this.round.submit(&this.board, &submission.id, &submission.cards) {
        Ok(SubmitOutcome::Waiting) => {}
        Ok(SubmitOutcome::Lagging(laggers)) => arm_deadline(this, ctx, &laggers),
        Ok(SubmitOutcome::Complete) => {
            info!("[GameSession] All submissions in");
            turn_resolution::start_resolution(this, ctx);
        }
        Err(e) => {
            warn!("[GameSession] Submission from {} rejected: {}", submission.id, e);
            reply.do_send(ws_error::submission_error(&e));
        }
    }
}

/// Warn the lagging players and start the deadline, once per round.
pub fn arm_deadline(this: &mut GameSession, ctx: &mut Context<GameSession>, laggers: &[PlayerId]) {
    if this.deadline.is_some() {
        return;
    }
    let handle = ctx.run_later(this.timings.submission_deadline, expire_deadline);
    this.deadline = Some(Deadline {
        handle,
        armed_at: Instant::now(),
    });

    let seconds = this.deadline_remaining_secs().unwrap_or_default();
    for id in laggers {
        this.send_to_player(id, ServerMessage::Time(TimeNotice { seconds }));
    }
    info!("[GameSession] Deadline armed for {:?} ({}s)", laggers, seconds);
}

/// Deadline reached: fill the missing submissions and resolve.
pub fn expire_deadline(this: &mut GameSession, ctx: &mut Context<GameSession>) {
    this.deadline = None;
    if this.round.phase() != Phase::Collecting {
        return;
    }
    let filled = this.round.force_complete();
    info!("[GameSession] Deadline expired, auto-submitted for {:?}", filled);
    turn_resolution::start_resolution(this, ctx);
}

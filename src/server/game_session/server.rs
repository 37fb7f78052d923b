/// Game session actor.
///
/// Owns the board, the round coordinator and the presence directory. Every
/// mutation runs on this actor's mailbox; timers are context futures whose
/// handles are kept so they can be cancelled.
use std::time::{Duration, Instant};

use actix::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use crate::config::game::Timings;
use crate::game::round::{Phase, Round};
use crate::game::state::Board;
use crate::server::directory::{self, Directory};
use crate::server::game_session::dealing;
use crate::server::game_session::messages::{
    ClientEnvelope, ClientMessage, Disconnect, GetPhase, PlayerRegistration, ServerMessage, StartGame, TimeNotice,
};
use crate::server::ws_error;

pub type Connection = Recipient<ServerMessage>;

/// Armed submission deadline.
pub struct Deadline {
    pub handle: SpawnHandle,
    pub armed_at: Instant,
}

pub struct GameSession {
    pub board: Board,
    pub round: Round,
    pub directory: Directory<Connection>,
    pub timings: Timings,
    pub rng: StdRng,

    /// Pending reveal or apply wake while a round resolves.
    pub step_timer: Option<SpawnHandle>,
    pub deadline: Option<Deadline>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession] Started, waiting for players");
    }
}

impl GameSession {
    pub fn new(timings: Timings) -> Self {
        Self::with_rng(timings, StdRng::from_os_rng())
    }

    /// Deterministic deals, for tests.
    pub fn with_seed(timings: Timings, seed: u64) -> Self {
        Self::with_rng(timings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(timings: Timings, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            round: Round::new(),
            directory: Directory::new(),
            timings,
            rng,
            step_timer: None,
            deadline: None,
        }
    }

    /// Send to every connection, players and spectators.
    pub fn broadcast(&self, msg: ServerMessage) {
        for addr in self.directory.all() {
            addr.do_send(msg.clone());
        }
    }

    pub fn broadcast_board(&self) {
        self.broadcast(ServerMessage::Board(self.board.clone()));
    }

    pub fn send_to_spectators(&self, msg: ServerMessage) {
        for addr in self.directory.spectators() {
            addr.do_send(msg.clone());
        }
    }

    /// Send to a player's live connection. Dropped silently when it has none.
    pub fn send_to_player(&self, id: &str, msg: ServerMessage) {
        match self.directory.connection(id) {
            Some(addr) => addr.do_send(msg),
            None => debug!("[GameSession] No connection for {}, dropping message", id),
        }
    }

    /// Whole seconds left on the submission deadline, rounded up.
    pub fn deadline_remaining_secs(&self) -> Option<u64> {
        self.deadline.as_ref().map(|d| {
            let left = self.timings.submission_deadline.saturating_sub(d.armed_at.elapsed());
            left.as_millis().div_ceil(1000) as u64
        })
    }

    /// Bring a (re)connected player up to date: team, board, held hand and deadline.
    fn resume_player(&self, id: &str, addr: &Connection) {
        if let Some(side) = self.board.team_of(id) {
            addr.do_send(ServerMessage::Team(self.board.team(side).info()));
        }
        addr.do_send(ServerMessage::Board(self.board.clone()));
        if let Some(hand) = self.round.pending_hand(id) {
            addr.do_send(ServerMessage::Cards(hand.to_vec()));
            if let Some(seconds) = self.deadline_remaining_secs() {
                addr.do_send(ServerMessage::Time(TimeNotice { seconds }));
            }
        }
    }

    fn check_player(&mut self, conn_id: Uuid, addr: Connection, id: &str) {
        let player = directory::lookup(&self.board, id).cloned();
        addr.do_send(ServerMessage::Player(player.clone()));
        if player.is_some() {
            self.directory.bind(id, conn_id, addr.clone());
            self.resume_player(id, &addr);
            info!("[GameSession] {} reconnected", id);
        }
    }

    fn register_player(&mut self, conn_id: Uuid, addr: Connection, reg: PlayerRegistration) {
        match directory::register(&mut self.board, &reg.id, &reg.name) {
            Ok(registration) => {
                self.directory.bind(&reg.id, conn_id, addr.clone());
                addr.do_send(ServerMessage::Player(Some(registration.player)));
                if registration.created {
                    addr.do_send(ServerMessage::Team(self.board.team(registration.side).info()));
                    self.broadcast_board();
                } else {
                    self.resume_player(&reg.id, &addr);
                }
            }
            Err(e) => {
                warn!("[GameSession] Registration of {} refused: {}", reg.id, e);
                addr.do_send(ws_error::registration_error(&e));
            }
        }
    }

    pub fn cancel_step_timer(&mut self, ctx: &mut Context<Self>) {
        if let Some(handle) = self.step_timer.take() {
            ctx.cancel_future(handle);
        }
    }

    pub fn cancel_deadline(&mut self, ctx: &mut Context<Self>) {
        if let Some(deadline) = self.deadline.take() {
            ctx.cancel_future(deadline.handle);
        }
    }

    pub fn schedule<F>(&mut self, ctx: &mut Context<Self>, delay: Duration, f: F)
    where
        F: FnOnce(&mut Self, &mut Context<Self>) + 'static,
    {
        self.step_timer = Some(ctx.run_later(delay, f));
    }
}

impl Handler<ClientEnvelope> for GameSession {
    type Result = ();

    fn handle(&mut self, envelope: ClientEnvelope, ctx: &mut Context<Self>) -> Self::Result {
        let ClientEnvelope { conn_id, addr, msg } = envelope;
        match msg {
            ClientMessage::CheckPlayer(id) => self.check_player(conn_id, addr, &id),
            ClientMessage::Player(reg) => self.register_player(conn_id, addr, reg),
            ClientMessage::Display => {
                addr.do_send(ServerMessage::Board(self.board.clone()));
                self.directory.add_spectator(conn_id, addr);
                debug!("[GameSession] Display {} attached", conn_id);
            }
            ClientMessage::SubmitCards(submission) => dealing::receive_submission(self, ctx, &addr, submission),
        }
    }
}

impl Handler<Disconnect> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        match self.directory.unbind(msg.conn_id) {
            Some(id) => info!("[GameSession] {} disconnected, keeping their seat", id),
            None => debug!("[GameSession] Connection {} closed", msg.conn_id),
        }
    }
}

impl Handler<StartGame> for GameSession {
    type Result = bool;

    fn handle(&mut self, _: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        if self.round.phase() != Phase::Idle {
            warn!("[GameSession] start_game ignored, round already running ({:?})", self.round.phase());
            return false;
        }
        if self.board.player_count() == 0 {
            warn!("[GameSession] start_game ignored, no players registered");
            return false;
        }
        dealing::deal_round(self, ctx);
        true
    }
}

impl Handler<GetPhase> for GameSession {
    type Result = MessageResult<GetPhase>;

    fn handle(&mut self, _: GetPhase, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.round.phase())
    }
}

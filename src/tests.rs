//! End-to-end tests of the game session actor, driven through its mailbox with
//! recorder actors standing in for WebSocket connections.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix::prelude::*;
use tokio::time::sleep;
use uuid::Uuid;

use crate::config::game::{HAND_SIZE, Timings};
use crate::game::entities::Player;
use crate::game::round::Phase;
use crate::game::state::Board;
use crate::game::types::{Card, Direction, Position};
use crate::server::game_session::GameSession;
use crate::server::game_session::messages::{
    CardSubmission, ClientEnvelope, ClientMessage, Disconnect, ErrorNotice, GetPhase, PlayerRegistration,
    ServerMessage, StartGame,
};

type Log = Arc<Mutex<Vec<ServerMessage>>>;

struct Recorder {
    log: Log,
}

impl Actor for Recorder {
    type Context = Context<Self>;
}

impl Handler<ServerMessage> for Recorder {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, _: &mut Context<Self>) {
        self.log.lock().unwrap().push(msg);
    }
}

/// A fake connection: its own id and a recorder collecting what it is sent.
struct Client {
    conn_id: Uuid,
    addr: Recipient<ServerMessage>,
    log: Log,
}

impl Client {
    fn new() -> Self {
        let log: Log = Arc::default();
        let addr = Recorder { log: log.clone() }.start().recipient();
        Self {
            conn_id: Uuid::new_v4(),
            addr,
            log,
        }
    }

    fn send(&self, session: &Addr<GameSession>, msg: ClientMessage) {
        session.do_send(ClientEnvelope {
            conn_id: self.conn_id,
            addr: self.addr.clone(),
            msg,
        });
    }

    fn join(&self, session: &Addr<GameSession>, id: &str) {
        self.send(
            session,
            ClientMessage::Player(PlayerRegistration {
                id: id.to_string(),
                name: id.to_string(),
            }),
        );
    }

    fn submit(&self, session: &Addr<GameSession>, id: &str, cards: &[usize]) {
        self.send(
            session,
            ClientMessage::SubmitCards(CardSubmission {
                id: id.to_string(),
                cards: cards.to_vec(),
            }),
        );
    }

    fn messages(&self) -> Vec<ServerMessage> {
        self.log.lock().unwrap().clone()
    }

    fn hands(&self) -> Vec<Vec<Card>> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Cards(cards) => Some(cards),
                _ => None,
            })
            .collect()
    }

    fn team_names(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Team(info) => Some(info.name),
                _ => None,
            })
            .collect()
    }

    fn errors(&self) -> Vec<ErrorNotice> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Error(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    fn time_notices(&self) -> Vec<u64> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Time(t) => Some(t.seconds),
                _ => None,
            })
            .collect()
    }

    fn boards(&self) -> Vec<Board> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Board(board) => Some(board),
                _ => None,
            })
            .collect()
    }

    fn player_frames(&self) -> Vec<Player> {
        self.messages()
            .into_iter()
            .filter_map(|m| match m {
                ServerMessage::Player(Some(p)) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&ServerMessage) -> bool) -> usize {
        self.messages().iter().filter(|m| pred(m)).count()
    }
}

fn fast_timings() -> Timings {
    Timings {
        reveal_interval: Duration::from_millis(20),
        apply_delay: Duration::from_millis(5),
        submission_deadline: Duration::from_millis(150),
    }
}

fn start_session() -> Addr<GameSession> {
    GameSession::with_seed(fast_timings(), 17).start()
}

/// Let queued mailbox traffic drain.
async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

const FIRST_FIVE: [usize; 5] = [0, 1, 2, 3, 4];

#[actix::test]
async fn test_players_split_alternately() {
    let session = start_session();
    let clients: Vec<Client> = (0..4).map(|_| Client::new()).collect();
    for (i, client) in clients.iter().enumerate() {
        client.join(&session, &format!("p{i}"));
        settle().await;
    }

    let teams: Vec<String> = clients.iter().flat_map(|c| c.team_names()).collect();
    assert_eq!(teams, vec!["Team 1", "Team 2", "Team 1", "Team 2"]);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Idle);
}

#[actix::test]
async fn test_ninth_player_is_refused() {
    let session = start_session();
    let client = Client::new();
    for i in 0..9 {
        client.join(&session, &format!("p{i}"));
    }
    settle().await;

    let errors = client.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, "TEAMS_FULL");
}

#[actix::test]
async fn test_start_game_needs_players() {
    let session = start_session();
    assert!(!session.send(StartGame).await.unwrap());
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Idle);
}

#[actix::test]
async fn test_full_round_then_redeal() {
    let session = start_session();
    let display = Client::new();
    display.send(&session, ClientMessage::Display);
    let (a, b) = (Client::new(), Client::new());
    a.join(&session, "a");
    b.join(&session, "b");

    assert!(session.send(StartGame).await.unwrap());
    assert!(!session.send(StartGame).await.unwrap(), "second trigger must be ignored");
    settle().await;

    assert_eq!(a.hands().len(), 1);
    assert_eq!(a.hands()[0].len(), HAND_SIZE);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);

    a.submit(&session, "a", &FIRST_FIVE);
    b.submit(&session, "b", &[9, 8, 7, 6, 5]);
    settle().await;
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Resolving);

    sleep(Duration::from_millis(700)).await;

    assert_eq!(a.hands().len(), 2);
    assert_eq!(b.hands().len(), 2);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);

    let reveals = display.count(|m| matches!(m, ServerMessage::Card(_)));
    assert!((1..=10).contains(&reveals));
    // Players see boards, never the card reveals.
    assert_eq!(a.count(|m| matches!(m, ServerMessage::Card(_))), 0);
    assert!(a.count(|m| matches!(m, ServerMessage::Board(_))) > reveals);
}

#[actix::test]
async fn test_bad_submissions_are_answered() {
    let session = start_session();
    let a = Client::new();
    a.join(&session, "a");
    a.submit(&session, "a", &FIRST_FIVE);
    session.send(StartGame).await.unwrap();

    a.submit(&session, "a", &[0, 0, 1, 2, 3]);
    a.submit(&session, "ghost", &FIRST_FIVE);
    a.submit(&session, "a", &[0, 1]);
    settle().await;

    let codes: Vec<String> = a.errors().into_iter().map(|e| e.code).collect();
    assert_eq!(codes, vec!["NOT_COLLECTING", "DUPLICATE_INDEX", "UNKNOWN_PLAYER", "WRONG_CARD_COUNT"]);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);
}

#[actix::test]
async fn test_check_player_unknown() {
    let session = start_session();
    let client = Client::new();
    client.send(&session, ClientMessage::CheckPlayer("nobody".into()));
    settle().await;

    let msgs = client.messages();
    assert_eq!(msgs.len(), 1);
    assert!(matches!(msgs[0], ServerMessage::Player(None)));
}

#[actix::test]
async fn test_reconnect_recovers_hand() {
    let session = start_session();
    let (old, b) = (Client::new(), Client::new());
    old.join(&session, "a");
    b.join(&session, "b");
    session.send(StartGame).await.unwrap();
    settle().await;
    let hand = old.hands().remove(0);

    let new = Client::new();
    new.send(&session, ClientMessage::CheckPlayer("a".into()));
    // The old socket closing after the reconnect must not unbind the new one.
    session.do_send(Disconnect { conn_id: old.conn_id });
    settle().await;

    let msgs = new.messages();
    assert!(matches!(&msgs[0], ServerMessage::Player(Some(p)) if p.id == "a"));
    assert_eq!(new.team_names(), vec!["Team 1"]);
    assert_eq!(new.hands(), vec![hand]);

    // b finishing its team leaves "a" lagging; the notice goes to the new socket.
    b.submit(&session, "b", &FIRST_FIVE);
    settle().await;
    assert_eq!(new.time_notices(), vec![1]);
    assert!(old.time_notices().is_empty());
}

#[actix::test]
async fn test_deadline_forces_resolution() {
    let session = start_session();
    let (a, b) = (Client::new(), Client::new());
    a.join(&session, "a");
    b.join(&session, "b");
    session.send(StartGame).await.unwrap();
    settle().await;

    a.submit(&session, "a", &FIRST_FIVE);
    settle().await;
    assert_eq!(b.time_notices(), vec![1]);
    assert!(a.time_notices().is_empty());
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);

    sleep(Duration::from_millis(900)).await;

    assert_eq!(b.hands().len(), 2);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);
}

#[actix::test]
async fn test_score_ends_round_early() {
    let mut game = GameSession::with_seed(fast_timings(), 17);
    game.board.add_player(Player::new("a", "a")).unwrap();
    game.board.add_player(Player::new("b", "b")).unwrap();
    // b sits out this round dead; the ball waits in the east endzone.
    game.board.player_mut("b").unwrap().kill();
    game.board.ball.pos = Position::new(13, 4, Direction::East);
    let session = game.start();

    let display = Client::new();
    display.send(&session, ClientMessage::Display);
    let (a, b) = (Client::new(), Client::new());
    a.send(&session, ClientMessage::CheckPlayer("a".into()));
    b.send(&session, ClientMessage::CheckPlayer("b".into()));
    assert!(session.send(StartGame).await.unwrap());

    a.submit(&session, "a", &FIRST_FIVE);
    b.submit(&session, "b", &FIRST_FIVE);
    // Ten moves would need 200ms; a score after the first ends the round at once.
    sleep(Duration::from_millis(400)).await;

    assert_eq!(display.count(|m| matches!(m, ServerMessage::Card(_))), 1);
    assert_eq!(a.hands().len(), 2);
    assert_eq!(b.hands().len(), 2);
    assert_eq!(session.send(GetPhase).await.unwrap(), Phase::Collecting);

    let last = display.boards().pop().unwrap();
    assert_eq!((last.team1.score, last.team2.score), (1, 0));
    assert_eq!((last.ball.pos.x, last.ball.pos.y), (7, 4));
    assert!(last.players().all(|p| !p.is_dead && p.pos == p.default_pos));

    // b saw itself dead on reconnect, then alive after the respawn.
    let frames = b.player_frames();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].is_dead);
    assert!(!frames[1].is_dead);
    assert_eq!(a.player_frames().len(), 1);
}

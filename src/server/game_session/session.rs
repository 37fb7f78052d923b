/// WebSocket connection actor.
///
/// One per socket. Parses `{key, data}` frames and forwards them to the game
/// session, serializes outbound frames, and keeps the socket alive with pings.
use std::time::Instant;

use actix::prelude::*;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::server::{CLIENT_TIMEOUT, HEARTBEAT_INTERVAL};
use crate::server::game_session::messages::{ClientEnvelope, ClientMessage, Disconnect, ServerMessage};
use crate::server::game_session::server::GameSession;
use crate::server::state::AppState;
use crate::server::ws_error::INTERNAL_ERROR_FRAME;

pub struct PlayerSocket {
    pub conn_id: Uuid,
    pub session_addr: Addr<GameSession>,
    last_heartbeat: Instant,
}

impl PlayerSocket {
    pub fn new(session_addr: Addr<GameSession>) -> Self {
        Self {
            conn_id: Uuid::new_v4(),
            session_addr,
            last_heartbeat: Instant::now(),
        }
    }

    /// Ping the client periodically; drop it if it stops answering.
    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.last_heartbeat) > CLIENT_TIMEOUT {
                info!("[PlayerSocket] {} timed out", act.conn_id);
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }
}

impl Actor for PlayerSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        debug!("[PlayerSocket] {} connected", self.conn_id);
        self.heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(Disconnect { conn_id: self.conn_id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(msg) => self.session_addr.do_send(ClientEnvelope {
                    conn_id: self.conn_id,
                    addr: ctx.address().recipient(),
                    msg,
                }),
                Err(e) => debug!("[PlayerSocket] Ignoring malformed frame from {}: {}", self.conn_id, e),
            },
            Ok(ws::Message::Ping(bytes)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&bytes);
            }
            Ok(ws::Message::Pong(_)) => self.last_heartbeat = Instant::now(),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                warn!("[PlayerSocket] Protocol error on {}: {}", self.conn_id, e);
                ctx.stop();
            }
        }
    }
}

impl Handler<ServerMessage> for PlayerSocket {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[PlayerSocket] Failed to serialize ServerMessage: {}", e);
                ctx.text(INTERNAL_ERROR_FRAME);
            }
        }
    }
}

/// WebSocket endpoint shared by player handsets and board displays.
pub async fn ws_connect(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(PlayerSocket::new(data.game_session.clone()), &req, stream)
}

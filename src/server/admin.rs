//! Plain HTTP endpoints: the round trigger and a health probe.

use actix_web::{HttpResponse, Responder, http::StatusCode, web};
use log::{error, info};
use serde_json::json;

use crate::server::game_session::messages::{GetPhase, StartGame};
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// `POST /start_game`: deal the first round. Always 200 once the session answers;
/// a call outside the lobby is ignored by the session.
pub async fn start_game(data: web::Data<AppState>) -> impl Responder {
    match data.game_session.send(StartGame).await {
        Ok(started) => {
            info!("[Admin] start_game requested, dealt={}", started);
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            error!("[Admin] Game session unreachable: {}", e);
            http_error_response("SESSION_UNAVAILABLE", "Game session is not running", StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// `GET /health`
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.game_session.send(GetPhase).await {
        Ok(phase) => HttpResponse::Ok().json(json!({ "status": "ok", "phase": phase })),
        Err(e) => {
            error!("[Admin] Game session unreachable: {}", e);
            http_error_response("SESSION_UNAVAILABLE", "Game session is not running", StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

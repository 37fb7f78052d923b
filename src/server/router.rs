//! HTTP and WebSocket routing configuration.
//!
//! One WebSocket endpoint serves both player handsets and board displays;
//! the rest are plain HTTP.

use actix_web::web;

use crate::server::admin::{health, start_game};
use crate::server::game_session::session::ws_connect;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ws").to(ws_connect))
        .service(web::resource("/start_game").route(web::post().to(start_game)))
        .service(web::resource("/health").route(web::get().to(health)));
}

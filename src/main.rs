//! Main entry point for the backend server.
//!
//! Starts the game session actor, then the HTTP server with the WebSocket
//! endpoint and the admin routes.

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::info;

use robot_football::config::game::Timings;
use robot_football::config::server::bind_address;
use robot_football::server::game_session::GameSession;
use robot_football::server::router;
use robot_football::server::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Logger level from RUST_LOG, defaulting to info.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let game_session = GameSession::new(Timings::default()).start();
    let state = web::Data::new(AppState::new(game_session));

    let (host, port) = bind_address();
    info!("Server is running on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(router::config)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// Server configuration.
///
/// The listen address comes from the `HOST` and `PORT` environment variables.
use std::env;
use std::time::Duration;

/// Interface bound when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port bound when `PORT` is not set or not a valid port number.
pub const DEFAULT_PORT: u16 = 80;

/// How often a WebSocket connection is pinged.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// A connection silent for this long is closed.
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolve the `(host, port)` pair the HTTP server binds to.
pub fn bind_address() -> (String, u16) {
    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    (host, parse_port(env::var("PORT").ok().as_deref()))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

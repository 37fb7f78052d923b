pub mod server;
pub mod session;
pub mod messages;
pub mod dealing;
pub mod turn_resolution;

pub use server::GameSession;

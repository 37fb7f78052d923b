/// Main configuration module.
///
/// Re-exports submodules for game rules/cadence and server binding.
pub mod game;
pub mod server;

pub mod types;
pub mod grid;
pub mod state;
pub mod deck;
pub mod round;

pub mod entities;
pub mod systems;

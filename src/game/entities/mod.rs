//! Game entities module.
//!
//! This module organizes player, team and ball entity types.

pub mod ball;
pub mod player;
pub mod team;

pub use ball::*;
pub use player::*;
pub use team::*;

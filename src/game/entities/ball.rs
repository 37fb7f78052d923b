use serde::{Deserialize, Serialize};

use crate::game::grid::field_centre;
use crate::game::types::Position;

/// The single ball. Its facing is whatever last pushed or kicked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    #[serde(flatten)]
    pub pos: Position,
}

impl Ball {
    pub fn at_centre() -> Self {
        Self { pos: field_centre() }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::at_centre()
    }
}

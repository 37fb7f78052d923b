/// Game configuration constants.
///
/// This module defines the field geometry, team and hand sizes, and the
/// cadence of a round (reveal interval, apply delay, submission deadline).
use std::time::Duration;

/// Number of columns of the field, measured along the long axis (x).
pub const FIELD_LENGTH: i32 = 15;

/// Number of rows of the field, measured along the short axis (y).
pub const FIELD_WIDTH: i32 = 9;

/// Depth of each endzone, counted from the short edge.
pub const ENDZONE_DEPTH: i32 = 2;

/// Rows on either side of the centre row that form the goal mouth.
pub const GOAL_MOUTH_HALF_WIDTH: i32 = 1;

/// Maximum number of players per team.
pub const TEAM_SIZE: usize = 4;

/// Cards dealt to each player per round.
pub const HAND_SIZE: usize = 10;

/// Cards each player submits per round (one per priority slot).
pub const TURNS_PER_ROUND: usize = 5;

/// Priority step between consecutive cards of a fresh deck.
pub const PRIORITY_STEP: u32 = 10;

/// Deaths after which a player is never respawned.
pub const MAX_DEATHS: u32 = 3;

/// Maximum length of a sanitized display name.
pub const NAME_MAX_LEN: usize = 10;

/// Time between two card reveals while a round resolves (in milliseconds).
pub const REVEAL_INTERVAL_MS: u64 = 3000;

/// Pause between revealing a card and applying it (in milliseconds).
pub const APPLY_DELAY_MS: u64 = 2000;

/// Time the lagging team has to submit once the other team is done (in seconds).
pub const SUBMISSION_DEADLINE_SECS: u64 = 30;

/// Delays driving one round. Overridable so tests can resolve rounds quickly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub reveal_interval: Duration,
    pub apply_delay: Duration,
    pub submission_deadline: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(REVEAL_INTERVAL_MS),
            apply_delay: Duration::from_millis(APPLY_DELAY_MS),
            submission_deadline: Duration::from_secs(SUBMISSION_DEADLINE_SECS),
        }
    }
}

impl Timings {
    /// Wait between applying a move and revealing the next one, keeping a fixed reveal cadence.
    pub fn settle_delay(&self) -> Duration {
        self.reveal_interval.saturating_sub(self.apply_delay)
    }
}

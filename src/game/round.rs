//! Round bookkeeping: deal, submission barrier and move ordering.
//!
//! `Round` holds no timers; the game session actor drives it and owns the
//! scheduling. Phases advance `Idle → Collecting → Resolving → Scoring → Collecting ...`
//! with `Dealing` held only while hands are cut.

use std::collections::{HashMap, HashSet};

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::game::TURNS_PER_ROUND;
use crate::error::SubmissionError;
use crate::game::deck;
use crate::game::entities::TeamSide;
use crate::game::state::Board;
use crate::game::types::{Card, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Dealing,
    Collecting,
    Resolving,
    Scoring,
}

/// One scheduled card play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Where the submission barrier stands after accepting a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Both teams still have players choosing.
    Waiting,
    /// One team is done; these players of the other team are still choosing.
    Lagging(Vec<PlayerId>),
    /// Every dealt player has submitted.
    Complete,
}

#[derive(Debug, Default)]
pub struct Round {
    phase: Phase,
    /// Dealt players in join order.
    order: Vec<PlayerId>,
    hands: HashMap<PlayerId, Vec<Card>>,
    submissions: HashMap<PlayerId, Vec<Card>>,
    moves: Vec<Move>,
    next_step: usize,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Deal a fresh hand to every seated player and open collection.
    pub fn deal<R: Rng>(&mut self, board: &Board, rng: &mut R) -> Vec<(PlayerId, Vec<Card>)> {
        self.phase = Phase::Dealing;
        self.clear();
        self.order = board.player_ids();
        let hands = deck::deal(&self.order, rng);
        self.hands = hands.iter().cloned().collect();
        self.phase = Phase::Collecting;
        info!("[Round] Dealt {} hands", hands.len());
        hands
    }

    pub fn hand(&self, id: &str) -> Option<&[Card]> {
        self.hands.get(id).map(Vec::as_slice)
    }

    pub fn has_submitted(&self, id: &str) -> bool {
        self.submissions.contains_key(id)
    }

    /// The hand a reconnecting player should see again: dealt and not yet played.
    pub fn pending_hand(&self, id: &str) -> Option<&[Card]> {
        if self.phase != Phase::Collecting || self.has_submitted(id) {
            return None;
        }
        self.hand(id)
    }

    /// Accept a player's five card indices.
    pub fn submit(&mut self, board: &Board, id: &str, indices: &[usize]) -> Result<SubmitOutcome, SubmissionError> {
        if self.phase != Phase::Collecting {
            return Err(SubmissionError::NotCollecting);
        }
        let Some(hand) = self.hands.get(id) else {
            return Err(match board.player(id) {
                Some(_) => SubmissionError::NoHand(id.to_string()),
                None => SubmissionError::UnknownPlayer(id.to_string()),
            });
        };
        if self.has_submitted(id) {
            return Err(SubmissionError::AlreadySubmitted(id.to_string()));
        }
        if indices.len() != TURNS_PER_ROUND {
            return Err(SubmissionError::WrongCount {
                expected: TURNS_PER_ROUND,
                got: indices.len(),
            });
        }
        let mut seen = HashSet::new();
        let mut chosen = Vec::with_capacity(TURNS_PER_ROUND);
        for &index in indices {
            let card = hand.get(index).ok_or(SubmissionError::IndexOutOfRange(index))?;
            if !seen.insert(index) {
                return Err(SubmissionError::DuplicateIndex(index));
            }
            chosen.push(*card);
        }
        self.submissions.insert(id.to_string(), chosen);
        debug!("[Round] {} submitted ({}/{})", id, self.submissions.len(), self.order.len());
        Ok(self.outcome(board))
    }

    /// Dealt players of `side` who have not submitted, in join order.
    pub fn remaining(&self, board: &Board, side: TeamSide) -> Vec<PlayerId> {
        self.order
            .iter()
            .filter(|id| board.team_of(id) == Some(side) && !self.has_submitted(id))
            .cloned()
            .collect()
    }

    fn outcome(&self, board: &Board) -> SubmitOutcome {
        let one = self.remaining(board, TeamSide::One);
        let two = self.remaining(board, TeamSide::Two);
        match (one.is_empty(), two.is_empty()) {
            (true, true) => SubmitOutcome::Complete,
            (true, false) => SubmitOutcome::Lagging(two),
            (false, true) => SubmitOutcome::Lagging(one),
            (false, false) => SubmitOutcome::Waiting,
        }
    }

    /// Fill every missing submission with the first cards of that player's hand.
    /// Returns the players filled in.
    pub fn force_complete(&mut self) -> Vec<PlayerId> {
        let missing: Vec<PlayerId> = self
            .order
            .iter()
            .filter(|id| !self.has_submitted(id))
            .cloned()
            .collect();
        for id in &missing {
            if let Some(hand) = self.hands.get(id) {
                let chosen = hand.iter().take(TURNS_PER_ROUND).copied().collect();
                self.submissions.insert(id.clone(), chosen);
            }
        }
        missing
    }

    /// Freeze submissions into the move sequence and start resolving.
    pub fn begin_resolution(&mut self) -> usize {
        self.moves = build_move_sequence(&self.order, &self.submissions);
        self.next_step = 0;
        self.phase = Phase::Resolving;
        self.moves.len()
    }

    /// Next move to reveal, if any are left.
    pub fn next_move(&mut self) -> Option<Move> {
        let next = self.moves.get(self.next_step).cloned()?;
        self.next_step += 1;
        Some(next)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_step >= self.moves.len()
    }

    /// Drop the round's cards. The next deal starts from here.
    pub fn finish(&mut self) {
        self.clear();
        self.phase = Phase::Scoring;
    }

    fn clear(&mut self) {
        self.order.clear();
        self.hands.clear();
        self.submissions.clear();
        self.moves.clear();
        self.next_step = 0;
    }
}

/// Slot by slot, every player's card sorted by descending priority.
/// The sort is stable: equal priorities keep join order.
pub fn build_move_sequence(order: &[PlayerId], submissions: &HashMap<PlayerId, Vec<Card>>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(order.len() * TURNS_PER_ROUND);
    for slot in 0..TURNS_PER_ROUND {
        let mut turn: Vec<Move> = order
            .iter()
            .filter_map(|id| {
                let card = submissions.get(id)?.get(slot)?;
                Some(Move {
                    player_id: id.clone(),
                    card: *card,
                })
            })
            .collect();
        turn.sort_by(|a, b| b.card.priority.cmp(&a.card.priority));
        moves.extend(turn);
    }
    moves
}

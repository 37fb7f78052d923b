//! Card generation and dealing.
//!
//! A round's deck holds `players × HAND_SIZE` cards with unique priorities
//! (10, 20, 30, ...). Actions come from a weighted table; the deck is shuffled
//! uniformly and cut into contiguous hands in join order.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::game::{HAND_SIZE, PRIORITY_STEP};
use crate::game::types::{ActionKind, Card, PlayerId};

/// Weighted action table: each entry is equally likely.
pub const ACTION_TABLE: [ActionKind; 11] = [
    ActionKind::Move1,
    ActionKind::Move1,
    ActionKind::TurnLeft,
    ActionKind::TurnLeft,
    ActionKind::TurnRight,
    ActionKind::TurnRight,
    ActionKind::Kick,
    ActionKind::Kick,
    ActionKind::Move2,
    ActionKind::Backup,
    ActionKind::TurnAround,
];

pub fn random_action<R: Rng>(rng: &mut R) -> ActionKind {
    ACTION_TABLE[rng.random_range(0..ACTION_TABLE.len())]
}

/// Build and shuffle the deck for `player_count` players.
pub fn build_deck<R: Rng>(player_count: usize, rng: &mut R) -> Vec<Card> {
    let mut cards: Vec<Card> = (1..=player_count * HAND_SIZE)
        .map(|i| Card::new(i as u32 * PRIORITY_STEP, random_action(rng)))
        .collect();
    cards.shuffle(rng);
    cards
}

/// Deal one hand per player, in the order given.
pub fn deal<R: Rng>(players: &[PlayerId], rng: &mut R) -> Vec<(PlayerId, Vec<Card>)> {
    let deck = build_deck(players.len(), rng);
    players
        .iter()
        .cloned()
        .zip(deck.chunks(HAND_SIZE).map(<[Card]>::to_vec))
        .collect()
}

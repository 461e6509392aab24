//! Public snapshot API for observing a round without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::events::RoundId;
use crate::domain::rules::PLAYERS;
use crate::domain::state::PlayerId;
use crate::domain::tricks::{PendingInput, SpecialPlay};
use crate::domain::{Card, Suit, Trump};

/// Everything every seat may see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round_id: RoundId,
    pub trump: Trump,
    pub trump_card: Card,
    pub point_value: u32,
    /// Seat that led the current trick.
    pub first_player: PlayerId,
    pub current_player: PlayerId,
    pub field_cards: [Option<Card>; PLAYERS],
    pub lead_suit: Option<Suit>,
    pub most_recent_special: Option<SpecialPlay>,
    pub pending: Option<PendingInput>,
    pub tricks_won: [u8; PLAYERS],
    pub tricks_played: u8,
    pub hand_sizes: [usize; PLAYERS],
    pub deck_remaining: usize,
    /// Cards of the most recently resolved trick, for display.
    pub last_trick: Option<[Option<Card>; PLAYERS]>,
    pub complete: bool,
}

/// A seat's private view: the public snapshot plus its own hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub round: RoundSnapshot,
    pub player: PlayerId,
    pub hand: Vec<Card>,
    pub playable: Vec<Card>,
}

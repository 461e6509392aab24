//! The Lohai draw pile and deterministic dealing.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{HAND_SIZE, PLAYERS, SPECIAL_COPIES};
use crate::domain::{Card, Rank, SpecialKind, Suit};
use crate::errors::domain::DomainError;

/// Every card of a fresh deck in canonical order: plain cards by rank then
/// suit, followed by two copies of each special kind.
fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(Rank::ALL.len() * Suit::ALL.len() + 8);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::plain(rank, suit));
        }
    }
    for kind in SpecialKind::ALL {
        for _ in 0..SPECIAL_COPIES {
            cards.push(Card::special(kind));
        }
    }
    cards
}

/// Ordered draw pile; the top of the deck is the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Build a deck from explicit cards, `cards[0]` on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// A full deck in uniformly random order.
    pub fn shuffle_new_deck() -> Self {
        Self::shuffled_with_seed(rand::random())
    }

    /// A full deck shuffled deterministically from `seed`.
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut cards = full_deck();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self::from_cards(cards)
    }

    /// Remove and return the top card.
    pub fn draw_card(&mut self) -> Result<Card, DomainError> {
        self.cards.pop_front().ok_or(DomainError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from the top down.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Result of dealing a round: four hands, the turned trump card and the rest
/// of the deck.
#[derive(Debug, Clone)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub trump_card: Card,
    pub deck: Deck,
}

/// Deal `HAND_SIZE` cards to each seat one at a time in seat order, then turn
/// the next card as the trump indicator.
pub fn deal_round(mut deck: Deck) -> Result<Deal, DomainError> {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            hand.push(deck.draw_card()?);
        }
    }
    let trump_card = deck.draw_card()?;
    Ok(Deal {
        hands,
        trump_card,
        deck,
    })
}

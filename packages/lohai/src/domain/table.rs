//! Round-owned cards and counters that a trick reads and mutates.
//!
//! The round owns the table and lends it to the current trick for the
//! duration of each action.

use crate::domain::cards_logic::hand_has_suit;
use crate::domain::dealing::Deck;
use crate::domain::rules::PLAYERS;
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub(crate) deck: Deck,
    pub(crate) hands: [Vec<Card>; PLAYERS],
    pub(crate) tricks_won: [u8; PLAYERS],
}

impl Table {
    pub(crate) fn player_has_card(&self, player: PlayerId, card: Card) -> bool {
        self.hands[player as usize].contains(&card)
    }

    pub(crate) fn player_has_suit(&self, player: PlayerId, suit: Suit) -> bool {
        hand_has_suit(&self.hands[player as usize], suit)
    }

    pub(crate) fn remove_card_from_hand(
        &mut self,
        player: PlayerId,
        card: Card,
    ) -> Result<(), DomainError> {
        let hand = &mut self.hands[player as usize];
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(DomainError::invalid_card(format!(
                "Card {card} is not in player {player}'s hand"
            )));
        };
        hand.remove(pos);
        Ok(())
    }

    pub(crate) fn draw_card(&mut self) -> Result<Card, DomainError> {
        self.deck.draw_card()
    }

    /// A player may use a Mover iff they are definitively in the middle:
    /// strictly more tricks than the minimum and strictly fewer than the maximum.
    pub(crate) fn player_can_mover(&self, player: PlayerId) -> bool {
        let Some(&count) = self.tricks_won.get(player as usize) else {
            return false;
        };
        let min = self.tricks_won.iter().copied().min().unwrap_or(0);
        let max = self.tricks_won.iter().copied().max().unwrap_or(0);
        min < count && count < max
    }

    pub(crate) fn transfer_trick(
        &mut self,
        source: PlayerId,
        dest: PlayerId,
    ) -> Result<(), DomainError> {
        if self.tricks_won[source as usize] < 1 {
            return Err(DomainError::invalid_move(format!(
                "Cannot move a trick from player {source}, they have none"
            )));
        }
        self.tricks_won[source as usize] -= 1;
        self.tricks_won[dest as usize] += 1;
        Ok(())
    }

    pub(crate) fn hands_empty(&self) -> bool {
        self.hands.iter().all(Vec::is_empty)
    }
}

//! A single trick: the cards on the field, the lead suit, whose turn it is,
//! and the side effects of special cards.
//!
//! Shakers and Movers either suspend the trick until the round receives the
//! matching `handle_*` call or are replaced straight from the deck. A
//! replacement can itself be special, so placement runs as a loop until a
//! card settles on the field or play suspends.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::cards_logic::best_card_index;
use crate::domain::events::RoundEvent;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{next_player, require_seat, PlayerId};
use crate::domain::table::Table;
use crate::domain::{Card, SpecialKind, Suit, Trump};
use crate::errors::domain::DomainError;

/// The special cards that decide a trick outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecidingSpecial {
    Taker,
    Giver,
}

/// The most recent Taker/Giver on the field and the seat it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialPlay {
    pub kind: DecidingSpecial,
    pub player: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Shaker,
    Mover,
    Giver,
}

/// Play is suspended until `player` supplies input of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInput {
    pub player: PlayerId,
    pub kind: InputKind,
}

impl PendingInput {
    pub fn event(self) -> RoundEvent {
        match self.kind {
            InputKind::Shaker => RoundEvent::ShakerInputNeeded,
            InputKind::Mover => RoundEvent::MoverInputNeeded,
            InputKind::Giver => RoundEvent::GiverInputNeeded,
        }
    }
}

/// Outcome of resolving a trick whose seats are all filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrickResolution {
    Winner(PlayerId),
    /// A Giver decides; its player must name the recipient.
    AwaitingGiver(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    field_cards: [Option<Card>; PLAYERS],
    lead_suit: Option<Suit>,
    most_recent_special: Option<SpecialPlay>,
    first_player: PlayerId,
    current_player: PlayerId,
    pending: Option<PendingInput>,
}

impl Trick {
    pub fn new(first_player: PlayerId) -> Self {
        Self {
            field_cards: [None; PLAYERS],
            lead_suit: None,
            most_recent_special: None,
            first_player,
            current_player: first_player,
            pending: None,
        }
    }

    pub fn field_cards(&self) -> [Option<Card>; PLAYERS] {
        self.field_cards
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_suit
    }

    pub fn most_recent_special(&self) -> Option<SpecialPlay> {
        self.most_recent_special
    }

    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn pending(&self) -> Option<PendingInput> {
        self.pending
    }

    pub fn played_count(&self) -> usize {
        self.field_cards.iter().flatten().count()
    }

    /// Every seat has a card down and no Shaker or Mover is still waiting.
    pub fn is_complete(&self) -> bool {
        self.field_cards.iter().all(|slot| {
            matches!(
                slot,
                Some(card) if !matches!(
                    card.special_kind(),
                    Some(SpecialKind::Shaker | SpecialKind::Mover)
                )
            )
        })
    }

    pub(crate) fn is_valid_play(
        &self,
        table: &Table,
        player: PlayerId,
        card: Card,
    ) -> Result<(), DomainError> {
        if !table.player_has_card(player, card) {
            return Err(DomainError::invalid_card(format!(
                "Card {card} is not in player {player}'s hand"
            )));
        }

        let Some(suit) = card.suit() else {
            // Special cards can always be played.
            return Ok(());
        };

        if let Some(lead) = self.lead_suit {
            if suit != lead && table.player_has_suit(player, lead) {
                return Err(DomainError::invalid_card(format!(
                    "Must play a {lead:?} card"
                )));
            }
        }
        Ok(())
    }

    /// Cards `player` could legally put down, independent of turn order.
    pub(crate) fn legal_cards(&self, table: &Table, player: PlayerId) -> Vec<Card> {
        let mut cards: Vec<Card> = table.hands[player as usize]
            .iter()
            .copied()
            .filter(|&c| self.is_valid_play(table, player, c).is_ok())
            .collect();
        cards.sort();
        cards.dedup();
        cards
    }

    pub(crate) fn play_card(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        card: Card,
    ) -> Result<(), DomainError> {
        let seat = require_seat(player, "play_card")?;
        if self.current_player != player {
            return Err(DomainError::not_your_turn(format!(
                "Not player {player}'s turn, expected player {}",
                self.current_player
            )));
        }
        if let Some(pending) = self.pending {
            return Err(DomainError::invalid_move(format!(
                "Waiting for {:?} input from player {}",
                pending.kind, pending.player
            )));
        }
        if self.field_cards[seat].is_some() {
            return Err(DomainError::invalid_move(format!(
                "Player {player} has already played a card"
            )));
        }

        self.is_valid_play(table, player, card)?;
        table.remove_card_from_hand(player, card)?;
        debug!(player, %card, "Card played");

        self.place_card(table, player, card)
    }

    pub(crate) fn handle_shaker(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        victim: PlayerId,
    ) -> Result<(), DomainError> {
        self.require_pending(player, InputKind::Shaker)?;
        let victim_seat = require_seat(victim, "handle_shaker")?;
        if victim == player {
            return Err(DomainError::invalid_move(format!(
                "Player {player} cannot shake their own card"
            )));
        }
        let Some(stolen) = self.field_cards[victim_seat] else {
            return Err(DomainError::invalid_move(format!(
                "Cannot steal from player {victim}, no card"
            )));
        };

        self.pending = None;
        self.field_cards[player as usize] = Some(stolen);
        self.field_cards[victim_seat] = None;
        // The deciding Taker/Giver stays credited to whoever played it.
        debug!(player, victim, %stolen, "Shaker stole a card");

        let replacement = table.draw_card()?;
        debug!(player = victim, %replacement, "Shaken player plays from the deck");
        self.place_card(table, victim, replacement)
    }

    pub(crate) fn handle_mover(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        source: PlayerId,
        dest: PlayerId,
    ) -> Result<(), DomainError> {
        self.require_pending(player, InputKind::Mover)?;
        require_seat(source, "handle_mover")?;
        require_seat(dest, "handle_mover")?;
        if source == dest {
            return Err(DomainError::invalid_move(
                "Mover source and destination must differ",
            ));
        }

        table.transfer_trick(source, dest)?;
        self.pending = None;
        debug!(player, source, dest, "Mover transferred a trick");

        let replacement = table.draw_card()?;
        self.place_card(table, player, replacement)
    }

    /// Check a Giver's choice of recipient; the round credits the trick.
    pub(crate) fn verify_giver_ok(
        &self,
        player: PlayerId,
        recipient: PlayerId,
    ) -> Result<(), DomainError> {
        if !self.is_complete() {
            return Err(DomainError::invalid_move("Trick is not yet over"));
        }
        match self.pending {
            Some(PendingInput {
                kind: InputKind::Giver,
                player: giver,
            }) if giver == player => {}
            Some(PendingInput {
                kind: InputKind::Giver,
                ..
            }) => {
                return Err(DomainError::invalid_move(format!(
                    "Player {player} did not play the deciding giver"
                )))
            }
            _ => return Err(DomainError::invalid_move("No giver has been played")),
        }
        require_seat(recipient, "handle_giver")?;
        if recipient == player {
            return Err(DomainError::invalid_move("Not allowed to give to self"));
        }
        Ok(())
    }

    /// Decide a completed trick.
    ///
    /// The most recent Taker wins outright; the most recent Giver suspends the
    /// trick for its player's choice. Otherwise the strongest plain card wins.
    pub(crate) fn resolve_winner(&mut self, trump: Trump) -> Result<TrickResolution, DomainError> {
        match self.most_recent_special {
            Some(SpecialPlay {
                kind: DecidingSpecial::Taker,
                player,
            }) => Ok(TrickResolution::Winner(player)),
            Some(SpecialPlay {
                kind: DecidingSpecial::Giver,
                player,
            }) => {
                self.pending = Some(PendingInput {
                    player,
                    kind: InputKind::Giver,
                });
                Ok(TrickResolution::AwaitingGiver(player))
            }
            None => best_card_index(&self.field_cards, self.lead_suit, trump)
                .map(|idx| TrickResolution::Winner(idx as PlayerId))
                .ok_or_else(|| DomainError::invalid_move("Trick has no card that can win")),
        }
    }

    fn require_pending(&self, player: PlayerId, kind: InputKind) -> Result<(), DomainError> {
        match self.pending {
            Some(p) if p.player == player && p.kind == kind => Ok(()),
            _ => Err(DomainError::invalid_move(format!(
                "Player {player} has no {kind:?} awaiting input"
            ))),
        }
    }

    /// Put `card` into `player`'s slot and apply its effect. Shakers and
    /// Movers that cannot act are replaced from the deck until a card settles.
    fn place_card(
        &mut self,
        table: &mut Table,
        player: PlayerId,
        mut card: Card,
    ) -> Result<(), DomainError> {
        let seat = player as usize;
        loop {
            self.field_cards[seat] = Some(card);
            match card {
                Card::Special(SpecialKind::Mover) => {
                    if table.player_can_mover(player) {
                        debug!(player, "Mover waits for a trick transfer");
                        self.pending = Some(PendingInput {
                            player,
                            kind: InputKind::Mover,
                        });
                        return Ok(());
                    }
                    card = table.draw_card()?;
                    debug!(player, replacement = %card, "Mover replaced from the deck");
                }
                Card::Special(SpecialKind::Shaker) => {
                    if self.played_count() > 1 {
                        debug!(player, "Shaker waits for a victim");
                        self.pending = Some(PendingInput {
                            player,
                            kind: InputKind::Shaker,
                        });
                        return Ok(());
                    }
                    card = table.draw_card()?;
                    debug!(player, replacement = %card, "Shaker replaced from the deck");
                }
                Card::Special(SpecialKind::Taker) => {
                    self.most_recent_special = Some(SpecialPlay {
                        kind: DecidingSpecial::Taker,
                        player,
                    });
                    break;
                }
                Card::Special(SpecialKind::Giver) => {
                    self.most_recent_special = Some(SpecialPlay {
                        kind: DecidingSpecial::Giver,
                        player,
                    });
                    break;
                }
                Card::Plain { suit, .. } => {
                    if self.lead_suit.is_none() {
                        self.lead_suit = Some(suit);
                    }
                    break;
                }
            }
        }

        self.current_player = next_player(self.current_player);
        Ok(())
    }
}

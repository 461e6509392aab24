//! A single round of Lohai: dealing, trick flow, special-card input and
//! trick accounting.
//!
//! Every mutating call runs against a copy of the round state and commits
//! only on success. A failure anywhere in a replacement chain (including an
//! empty deck) leaves the round exactly as it was and notifies nobody.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{debug, info};

use crate::config::RoundConfig;
use crate::domain::cards_logic::point_value;
use crate::domain::dealing::{deal_round, Deck};
use crate::domain::events::{
    Notification, ObserverId, Observers, RoundEvent, RoundId, RoundObserver,
};
use crate::domain::rules::PLAYERS;
use crate::domain::snapshot::{PlayerSnapshot, RoundSnapshot};
use crate::domain::state::{require_seat, PlayerId};
use crate::domain::table::Table;
use crate::domain::tricks::{PendingInput, Trick, TrickResolution};
use crate::domain::{Card, Suit, Trump};
use crate::errors::domain::DomainError;

static NEXT_ROUND_ID: AtomicU64 = AtomicU64::new(1);

fn next_round_id() -> RoundId {
    RoundId(NEXT_ROUND_ID.fetch_add(1, Ordering::Relaxed))
}

/// Explicit starting position for a round, used for fixtures and for
/// resuming a round from stored state.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    pub deck: Deck,
    pub hands: [Vec<Card>; PLAYERS],
    pub trump_card: Card,
    pub first_player: PlayerId,
    pub tricks_won: [u8; PLAYERS],
    pub round_id: Option<RoundId>,
}

impl RoundSetup {
    /// Hands and trump card with an empty deck, seat 0 leading and no tricks won.
    pub fn new(hands: [Vec<Card>; PLAYERS], trump_card: Card) -> Self {
        Self {
            deck: Deck::from_cards(Vec::new()),
            hands,
            trump_card,
            first_player: 0,
            tricks_won: [0; PLAYERS],
            round_id: None,
        }
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_tricks_won(mut self, tricks_won: [u8; PLAYERS]) -> Self {
        self.tricks_won = tricks_won;
        self
    }

    pub fn with_round_id(mut self, id: RoundId) -> Self {
        self.round_id = Some(id);
        self
    }
}

/// What a successful action did to the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayOutcome {
    /// A trick was resolved and credited.
    pub trick_completed: bool,
    pub trick_winner: Option<PlayerId>,
    /// Input the round now waits for before play can continue.
    pub awaiting: Option<PendingInput>,
    pub round_complete: bool,
}

#[derive(Debug, Clone)]
struct RoundState {
    table: Table,
    trick: Trick,
    tricks_played: u8,
    complete: bool,
    last_trick: Option<[Option<Card>; PLAYERS]>,
}

impl RoundState {
    fn award_trick(&mut self, winner: PlayerId) {
        self.table.tricks_won[winner as usize] += 1;
        self.tricks_played += 1;
        self.last_trick = Some(self.trick.field_cards());
        self.complete = self.table.hands_empty();
        // The winner leads; on the final trick this just clears the field.
        self.trick = Trick::new(winner);
    }
}

#[derive(Debug)]
pub struct Round {
    id: RoundId,
    config: RoundConfig,
    trump_card: Card,
    trump: Trump,
    point_value: u32,
    state: RoundState,
    observers: Observers,
}

impl Round {
    /// Shuffle a fresh deck and deal a round with default configuration.
    pub fn start_new_round() -> Result<Self, DomainError> {
        Self::start_new_round_with(RoundConfig::default())
    }

    /// Shuffle (seeded when `config.seed` is set), deal nine cards to each
    /// seat and turn the trump card.
    pub fn start_new_round_with(config: RoundConfig) -> Result<Self, DomainError> {
        let deck = match config.seed {
            Some(seed) => Deck::shuffled_with_seed(seed),
            None => Deck::shuffle_new_deck(),
        };
        let deal = deal_round(deck)?;
        let setup = RoundSetup::new(deal.hands, deal.trump_card)
            .with_deck(deal.deck)
            .with_first_player(config.first_player);
        Self::from_setup(setup, config)
    }

    /// Build a round from an explicit position. `setup.first_player` decides
    /// who leads; `config` supplies the special-card point policy.
    pub fn from_setup(setup: RoundSetup, config: RoundConfig) -> Result<Self, DomainError> {
        require_seat(setup.first_player, "from_setup")?;
        let trump = Trump::from_turned(setup.trump_card);
        let point_value = point_value(setup.trump_card, config.special_points);
        let id = setup.round_id.unwrap_or_else(next_round_id);

        info!(
            round_id = %id,
            trump = ?trump,
            trump_card = %setup.trump_card,
            point_value,
            first_player = setup.first_player,
            deck = setup.deck.len(),
            "Round started"
        );

        Ok(Self {
            id,
            config,
            trump_card: setup.trump_card,
            trump,
            point_value,
            state: RoundState {
                table: Table {
                    deck: setup.deck,
                    hands: setup.hands,
                    tricks_won: setup.tricks_won,
                },
                trick: Trick::new(setup.first_player),
                tricks_played: 0,
                complete: false,
                last_trick: None,
            },
            observers: Observers::default(),
        })
    }

    // ---- Observers ----

    pub fn subscribe(&mut self, observer: impl RoundObserver + 'static) -> ObserverId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ---- Actions ----

    /// Play `card` from `player`'s hand into the current trick.
    pub fn play_card(&mut self, player: PlayerId, card: Card) -> Result<PlayOutcome, DomainError> {
        self.apply(|state| {
            state.trick.play_card(&mut state.table, player, card)?;
            Ok(None)
        })
    }

    /// Resolve a pending Shaker: `player` takes `victim`'s card and the
    /// victim plays the top card of the deck.
    pub fn handle_shaker(
        &mut self,
        player: PlayerId,
        victim: PlayerId,
    ) -> Result<PlayOutcome, DomainError> {
        self.apply(|state| {
            state.trick.handle_shaker(&mut state.table, player, victim)?;
            Ok(None)
        })
    }

    /// Resolve a pending Mover: one won trick moves from `source` to `dest`,
    /// then `player` plays the top card of the deck.
    pub fn handle_mover(
        &mut self,
        player: PlayerId,
        source: PlayerId,
        dest: PlayerId,
    ) -> Result<PlayOutcome, DomainError> {
        self.apply(|state| {
            state
                .trick
                .handle_mover(&mut state.table, player, source, dest)?;
            Ok(None)
        })
    }

    /// Resolve a pending Giver: `player` hands the finished trick to `recipient`,
    /// who leads the next trick.
    pub fn handle_giver(
        &mut self,
        player: PlayerId,
        recipient: PlayerId,
    ) -> Result<PlayOutcome, DomainError> {
        self.apply(|state| {
            state.trick.verify_giver_ok(player, recipient)?;
            debug!(player, recipient, "Giver handed over the trick");
            Ok(Some(recipient))
        })
    }

    /// Run `action` on a copy of the state, settle the trick, commit, then
    /// notify. `action` returns a winner when it decides the trick itself.
    fn apply<F>(&mut self, action: F) -> Result<PlayOutcome, DomainError>
    where
        F: FnOnce(&mut RoundState) -> Result<Option<PlayerId>, DomainError>,
    {
        if self.state.complete {
            return Err(DomainError::invalid_move(format!(
                "Round {} is complete",
                self.id
            )));
        }

        let mut next = self.state.clone();
        let mut winner = action(&mut next)?;

        if winner.is_none() && next.trick.pending().is_none() && next.trick.is_complete() {
            match next.trick.resolve_winner(self.trump)? {
                TrickResolution::Winner(w) => winner = Some(w),
                TrickResolution::AwaitingGiver(giver) => {
                    debug!(round_id = %self.id, giver, "Trick awaits the giver's choice");
                }
            }
        }

        let mut notifications = Vec::new();
        if let Some(w) = winner {
            next.award_trick(w);
            info!(
                round_id = %self.id,
                winner = w,
                tricks_won = ?next.table.tricks_won,
                tricks_played = next.tricks_played,
                "Trick resolved"
            );
            notifications.push(self.notification(w, RoundEvent::HandComplete));
            if next.complete {
                info!(round_id = %self.id, tricks_won = ?next.table.tricks_won, "Round complete");
            }
        }

        let awaiting = next.trick.pending();
        if let Some(pending) = awaiting {
            notifications.push(self.notification(pending.player, pending.event()));
        }

        let outcome = PlayOutcome {
            trick_completed: winner.is_some(),
            trick_winner: winner,
            awaiting,
            round_complete: next.complete,
        };

        self.state = next;
        self.observers.dispatch(&notifications);
        Ok(outcome)
    }

    fn notification(&self, player: PlayerId, event: RoundEvent) -> Notification {
        Notification {
            round_id: self.id,
            player,
            event,
        }
    }

    // ---- Queries ----

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn trump(&self) -> Trump {
        self.trump
    }

    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    /// Stake of the round: the point value of the turned trump card.
    pub fn point_value(&self) -> u32 {
        self.point_value
    }

    pub fn current_player(&self) -> PlayerId {
        self.state.trick.current_player()
    }

    /// Seat that led the current trick.
    pub fn first_player(&self) -> PlayerId {
        self.state.trick.first_player()
    }

    pub fn field_cards(&self) -> [Option<Card>; PLAYERS] {
        self.state.trick.field_cards()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.state.trick.lead_suit()
    }

    pub fn pending_input(&self) -> Option<PendingInput> {
        self.state.trick.pending()
    }

    pub fn deck_remaining(&self) -> usize {
        self.state.table.deck.len()
    }

    pub fn tricks_played(&self) -> u8 {
        self.state.tricks_played
    }

    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        self.state.table.tricks_won
    }

    pub fn last_trick(&self) -> Option<[Option<Card>; PLAYERS]> {
        self.state.last_trick
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    pub fn player_can_mover(&self, player: PlayerId) -> bool {
        self.state.table.player_can_mover(player)
    }

    /// A copy of `player`'s hand.
    pub fn get_hand_for_player(&self, player: PlayerId) -> Result<Vec<Card>, DomainError> {
        let seat = require_seat(player, "get_hand_for_player")?;
        Ok(self.state.table.hands[seat].clone())
    }

    /// Cards `player` may legally play into the current trick, sorted.
    /// Ignores whose turn it is.
    pub fn legal_cards(&self, player: PlayerId) -> Result<Vec<Card>, DomainError> {
        require_seat(player, "legal_cards")?;
        Ok(self.state.trick.legal_cards(&self.state.table, player))
    }

    /// Public view of the round; no hands are included.
    pub fn snapshot(&self) -> RoundSnapshot {
        let state = &self.state;
        RoundSnapshot {
            round_id: self.id,
            trump: self.trump,
            trump_card: self.trump_card,
            point_value: self.point_value,
            first_player: state.trick.first_player(),
            current_player: state.trick.current_player(),
            field_cards: state.trick.field_cards(),
            lead_suit: state.trick.lead_suit(),
            most_recent_special: state.trick.most_recent_special(),
            pending: state.trick.pending(),
            tricks_won: state.table.tricks_won,
            tricks_played: state.tricks_played,
            hand_sizes: std::array::from_fn(|seat| state.table.hands[seat].len()),
            deck_remaining: state.table.deck.len(),
            last_trick: state.last_trick,
            complete: state.complete,
        }
    }

    /// Public view plus `player`'s own hand and playable cards.
    pub fn snapshot_for(&self, player: PlayerId) -> Result<PlayerSnapshot, DomainError> {
        let mut hand = self.get_hand_for_player(player)?;
        hand.sort();
        Ok(PlayerSnapshot {
            round: self.snapshot(),
            player,
            hand,
            playable: self.legal_cards(player)?,
        })
    }
}

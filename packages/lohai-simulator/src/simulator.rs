//! Headless round driver: every seat plays a uniformly random legal card and
//! answers Shaker/Mover/Giver prompts at random.

use std::error::Error;
use std::sync::mpsc;

use lohai::{
    DomainError, InputKind, Notification, PlayerId, Round, RoundConfig, RoundEvent, Trump,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

const SEATS: [PlayerId; 4] = [0, 1, 2, 3];

/// Prompts seen during a round, counted from the notifications it emitted.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PromptCounts {
    pub shaker: u32,
    pub mover: u32,
    pub giver: u32,
}

impl PromptCounts {
    fn record(&mut self, event: RoundEvent) {
        match event {
            RoundEvent::ShakerInputNeeded => self.shaker += 1,
            RoundEvent::MoverInputNeeded => self.mover += 1,
            RoundEvent::GiverInputNeeded => self.giver += 1,
            RoundEvent::HandComplete => {}
        }
    }

    pub fn add(&mut self, other: PromptCounts) {
        self.shaker += other.shaker;
        self.mover += other.mover;
        self.giver += other.giver;
    }
}

/// Result of simulating one round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub seed: u64,
    pub trump: Trump,
    pub point_value: u32,
    pub tricks_won: [u8; 4],
    pub tricks_played: u8,
    /// False when the deck ran dry and no seat could act.
    pub complete: bool,
    pub prompts: PromptCounts,
    /// Actions that failed on an empty deck and were retried with another choice.
    pub empty_deck_retries: u32,
}

pub struct Simulator {
    seed: u64,
    config: RoundConfig,
    rng: StdRng,
    empty_deck_retries: u32,
}

impl Simulator {
    /// `seed` drives both the deal and every random choice.
    pub fn new(seed: u64, config: RoundConfig) -> Self {
        Self {
            seed,
            config: config.with_seed(seed),
            rng: StdRng::seed_from_u64(seed),
            empty_deck_retries: 0,
        }
    }

    pub fn simulate_round(mut self) -> Result<RoundResult, Box<dyn Error>> {
        let mut round = Round::start_new_round_with(self.config)?;
        let (tx, rx) = mpsc::channel::<Notification>();
        round.subscribe(tx);

        while !round.is_complete() {
            if !self.step(&mut round)? {
                debug!(round_id = %round.id(), "No seat can act, deck is exhausted");
                break;
            }
        }

        let mut prompts = PromptCounts::default();
        for notification in rx.try_iter() {
            prompts.record(notification.event);
        }

        Ok(RoundResult {
            seed: self.seed,
            trump: round.trump(),
            point_value: round.point_value(),
            tricks_won: round.tricks_won(),
            tricks_played: round.tricks_played(),
            complete: round.is_complete(),
            prompts,
            empty_deck_retries: self.empty_deck_retries,
        })
    }

    /// Take one action. Ok(false) means every candidate hit an empty deck.
    fn step(&mut self, round: &mut Round) -> Result<bool, DomainError> {
        match round.pending_input() {
            Some(p) if p.kind == InputKind::Shaker => {
                let field = round.field_cards();
                let victims: Vec<PlayerId> = SEATS
                    .into_iter()
                    .filter(|&s| s != p.player && field[s as usize].is_some())
                    .collect();
                self.try_each(victims, |v| round.handle_shaker(p.player, v))
            }
            Some(p) if p.kind == InputKind::Mover => {
                let won = round.tricks_won();
                let moves: Vec<(PlayerId, PlayerId)> = SEATS
                    .into_iter()
                    .flat_map(|s| SEATS.into_iter().map(move |d| (s, d)))
                    .filter(|&(s, d)| s != d && won[s as usize] > 0)
                    .collect();
                self.try_each(moves, |(s, d)| round.handle_mover(p.player, s, d))
            }
            Some(p) => {
                let recipients: Vec<PlayerId> =
                    SEATS.into_iter().filter(|&s| s != p.player).collect();
                self.try_each(recipients, |r| round.handle_giver(p.player, r))
            }
            None => {
                let player = round.current_player();
                let legal = round.legal_cards(player)?;
                self.try_each(legal, |card| round.play_card(player, card))
            }
        }
    }

    /// Try candidates in random order until one succeeds. Only an empty deck
    /// moves on to the next candidate; any other error is a driver bug.
    fn try_each<T, R, F>(&mut self, mut candidates: Vec<T>, mut act: F) -> Result<bool, DomainError>
    where
        F: FnMut(T) -> Result<R, DomainError>,
    {
        candidates.shuffle(&mut self.rng);
        for candidate in candidates {
            match act(candidate) {
                Ok(_) => return Ok(true),
                Err(DomainError::EmptyDeck) => self.empty_deck_retries += 1,
                Err(e) => return Err(e),
            }
        }
        Ok(false)
    }
}

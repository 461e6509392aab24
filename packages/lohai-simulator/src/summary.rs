//! Aggregate statistics over simulated rounds.

use std::time::Duration;

use serde::Serialize;

use crate::simulator::{PromptCounts, RoundResult};

#[derive(Debug, Serialize)]
pub struct Summary {
    pub rounds: u32,
    pub completed: u32,
    pub stalled: u32,
    pub errors: u32,
    pub avg_tricks: [f64; 4],
    /// Rounds in which the seat alone took the most tricks.
    pub sole_most_tricks: [u32; 4],
    /// Rounds in which the seat alone took the fewest tricks.
    pub sole_fewest_tricks: [u32; 4],
    pub prompts: PromptCounts,
    pub empty_deck_retries: u32,
    pub elapsed_ms: f64,
}

fn sole_index(values: &[u8; 4], pick: impl Fn(u8, u8) -> bool) -> Option<usize> {
    let mut best = 0;
    let mut unique = true;
    for seat in 1..4 {
        if values[seat] == values[best] {
            unique = false;
        } else if pick(values[seat], values[best]) {
            best = seat;
            unique = true;
        }
    }
    unique.then_some(best)
}

impl Summary {
    pub fn build(results: &[RoundResult], total: u32, errors: u32, elapsed: Duration) -> Self {
        let mut tricks = [0u64; 4];
        let mut most = [0u32; 4];
        let mut fewest = [0u32; 4];
        let mut prompts = PromptCounts::default();
        let mut retries = 0;
        let mut completed = 0;

        for result in results {
            if result.complete {
                completed += 1;
            }
            for (seat, &won) in result.tricks_won.iter().enumerate() {
                tricks[seat] += u64::from(won);
            }
            if let Some(seat) = sole_index(&result.tricks_won, |a, b| a > b) {
                most[seat] += 1;
            }
            if let Some(seat) = sole_index(&result.tricks_won, |a, b| a < b) {
                fewest[seat] += 1;
            }
            prompts.add(result.prompts);
            retries += result.empty_deck_retries;
        }

        let played = results.len().max(1) as f64;
        Self {
            rounds: total,
            completed,
            stalled: results.len() as u32 - completed,
            errors,
            avg_tricks: tricks.map(|t| t as f64 / played),
            sole_most_tricks: most,
            sole_fewest_tricks: fewest,
            prompts,
            empty_deck_retries: retries,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn print(&self) {
        println!("\n=== Simulation Summary ===");
        println!("Rounds completed: {}/{}", self.completed, self.rounds);
        if self.stalled > 0 {
            println!("Stalled (deck exhausted): {}", self.stalled);
        }
        if self.errors > 0 {
            println!("Errors: {}", self.errors);
        }
        println!("Total time: {:.1}ms", self.elapsed_ms);

        println!("\n=== Results by Seat ===");
        for seat in 0..4 {
            println!(
                "Seat {}: avg tricks={:.2}, hai={}, lo={}",
                seat, self.avg_tricks[seat], self.sole_most_tricks[seat], self.sole_fewest_tricks[seat]
            );
        }

        println!("\n=== Special Prompts ===");
        println!(
            "shaker={}, mover={}, giver={}, empty-deck retries={}",
            self.prompts.shaker, self.prompts.mover, self.prompts.giver, self.empty_deck_retries
        );
    }
}

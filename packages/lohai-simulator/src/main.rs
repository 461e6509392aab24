//! Lohai round simulator - plays seeded rounds with random legal choices and
//! reports trick statistics.

mod simulator;
mod summary;

use std::time::Instant;

use clap::Parser;
use lohai::{RoundConfig, SpecialPointPolicy};
use simulator::Simulator;
use summary::Summary;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "lohai-simulator")]
#[command(about = "Plays Lohai rounds with random legal moves")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Base seed; round N uses seed + N. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Score every special trump card with this many points
    #[arg(long)]
    flat_special_points: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = RoundConfig::default();
    if let Some(points) = args.flat_special_points {
        config = config.with_special_points(SpecialPointPolicy::Flat { points });
    }
    info!(rounds = args.rounds, seed = ?args.seed, "Starting simulation");

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for round_num in 0..args.rounds {
        let seed = base_seed.wrapping_add(u64::from(round_num));
        match Simulator::new(seed, config).simulate_round() {
            Ok(result) => {
                info!(
                    round = round_num + 1,
                    seed,
                    tricks_won = ?result.tricks_won,
                    complete = result.complete,
                    "Round finished"
                );
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Round {} (seed {}) failed: {}", round_num + 1, seed, e);
            }
        }
    }

    let summary = Summary::build(&results, args.rounds, errors, start.elapsed());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print();
    }

    Ok(())
}

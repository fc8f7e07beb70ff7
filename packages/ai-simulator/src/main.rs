//! AI Simulator CLI - fast in-memory Guandan match simulation.
//!
//! Runs AI-vs-AI matches entirely in memory through the engine's public
//! boundary, for policy evaluation and regression hunting. Deterministic
//! per seed; results go to stdout as a summary and to a JSONL file.

mod simulator;

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use rand::Rng;
use simulator::{MatchResult, Simulator};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Guandan match simulator for AI evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Base seed for deterministic matches; match i runs with seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Round cap per match (a match that drags past this is recorded
    /// without a winner)
    #[arg(long, default_value = "200")]
    max_rounds: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output directory for JSONL results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    fn name(&self) -> &'static str {
        match self {
            AiType::Heuristic => "heuristic",
            AiType::Random => "random",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let ai_types: [&'static str; 4] = match args.seats {
        Some(all) => [all.name(); 4],
        None => [
            args.seat0.name(),
            args.seat1.name(),
            args.seat2.name(),
            args.seat3.name(),
        ],
    };
    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(matches = args.matches, base_seed, ?ai_types, "starting simulation");

    let started = Instant::now();
    let mut results: Vec<MatchResult> = Vec::with_capacity(args.matches as usize);
    for match_no in 0..args.matches {
        let seed = base_seed.wrapping_add(match_no as u64);
        let sim = Simulator::new(ai_types, seed, args.max_rounds)?;
        results.push(sim.run(match_no));
    }
    let elapsed = started.elapsed();

    // JSONL output, one match per line.
    fs::create_dir_all(&args.output_dir)?;
    let path = PathBuf::from(&args.output_dir).join(format!("matches-{base_seed}.jsonl"));
    let mut file = fs::File::create(&path)?;
    for result in &results {
        serde_json::to_writer(&mut file, result)?;
        file.write_all(b"\n")?;
    }

    // Summary.
    let decided: Vec<&MatchResult> = results.iter().filter(|r| r.winning_team.is_some()).collect();
    let team0_wins = decided
        .iter()
        .filter(|r| r.winning_team == Some(0))
        .count();
    let total_rounds: u32 = results.iter().map(|r| r.rounds_played).sum();
    println!(
        "{} matches in {:.2?} ({} rounds total)",
        results.len(),
        elapsed,
        total_rounds
    );
    println!(
        "decided: {} | team 0 wins: {} | team 1 wins: {}",
        decided.len(),
        team0_wins,
        decided.len() - team0_wins
    );
    println!("results written to {}", path.display());

    if decided.len() < results.len() {
        warn!(
            undecided = results.len() - decided.len(),
            "some matches hit the round cap without a pass-Ace"
        );
    }
    Ok(())
}

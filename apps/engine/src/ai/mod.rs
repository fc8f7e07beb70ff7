//! AI player module - automated seat decisions.
//!
//! This module provides:
//! - [`AiPlayer`] trait for different AI implementations
//! - [`Heuristic`]: deterministic default policy
//! - [`RandomPlayer`]: random legal moves (seedable for tests)
//! - [`create_ai`]: factory by type name

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from a type name and optional seed.
///
/// Currently supports:
/// - "heuristic": deterministic default policy (seed ignored)
/// - "random": uniformly random legal moves, seedable
///
/// Returns None if the type name is unrecognized.
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "heuristic" => Some(Box::new(Heuristic::new())),
        "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}

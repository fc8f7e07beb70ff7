//! Seed derivation for deterministic per-round dealing.
//!
//! A match carries one base seed; each round's shuffle gets a derived seed
//! that is unique per (match, round) but stable across replays.

/// Derive the dealing seed for a round of a match.
pub fn derive_dealing_seed(match_seed: u64, round_no: u32) -> u64 {
    // Different multiplier and offset per context to keep derivations apart.
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

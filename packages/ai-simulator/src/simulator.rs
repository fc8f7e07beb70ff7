//! In-memory match runner for AI evaluation.
//!
//! Drives whole matches through the engine's public boundary only, one
//! `advance_one_automated_seat` call at a time — the same loop a UI would
//! run on a timer, minus the pacing.

use engine::{GuandanEngine, MatchConfig};
use serde::Serialize;
use tracing::{debug, warn};

/// Safety cap on engine steps within one round; a legal policy finishes a
/// round in a few hundred.
const MAX_STEPS_PER_ROUND: u32 = 5_000;

/// Result of one simulated match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub match_no: u32,
    pub seed: u64,
    /// Team that passed Ace, if the match completed.
    pub winning_team: Option<u8>,
    pub rounds_played: u32,
    pub final_levels: (u8, u8),
    /// Rounds that ended in a failed pass-Ace attempt.
    pub ace_retries: u32,
}

pub struct Simulator {
    engine: GuandanEngine,
    seed: u64,
    max_rounds: u32,
}

impl Simulator {
    pub fn new(
        ai_types: [&'static str; 4],
        seed: u64,
        max_rounds: u32,
    ) -> Result<Self, engine::DomainError> {
        let engine = GuandanEngine::start_match(MatchConfig {
            ai_types,
            seed: Some(seed),
            ..MatchConfig::default()
        })?;
        Ok(Self {
            engine,
            seed,
            max_rounds,
        })
    }

    /// Play rounds until a team passes Ace or the round cap trips.
    pub fn run(mut self, match_no: u32) -> MatchResult {
        let mut rounds_played = 0;
        let mut ace_retries = 0;

        loop {
            if !self.play_one_round() {
                warn!(match_no, "round exceeded step cap, aborting match");
                break;
            }
            rounds_played += 1;

            let snap = self.engine.snapshot();
            if snap.needs_retry {
                ace_retries += 1;
            }
            debug!(
                match_no,
                round = snap.round_no,
                winner = ?self.engine.winner(),
                levels = ?self.engine.team_levels(),
                "round finished"
            );

            if self.engine.is_match_over() || rounds_played >= self.max_rounds {
                break;
            }
            self.engine.next_round();
        }

        let winning_team = if self.engine.is_match_over() {
            self.engine.winner().map(|seat| seat % 2)
        } else {
            None
        };
        let final_levels = self.engine.team_levels();
        MatchResult {
            match_no,
            seed: self.seed,
            winning_team,
            rounds_played,
            final_levels,
            ace_retries,
        }
    }

    /// Advance automated seats until the current round ends.
    fn play_one_round(&mut self) -> bool {
        for _ in 0..MAX_STEPS_PER_ROUND {
            if self.engine.is_round_over() {
                return true;
            }
            self.engine.advance_one_automated_seat();
        }
        false
    }
}

//! Random AI player - makes uniformly random legal moves.
//!
//! Reference implementation of the [`AiPlayer`] trait: seedable for
//! reproducible tests, thread-safe via interior mutability, never panics,
//! and only ever picks from the view's legal helpers.

use std::sync::Mutex;

use rand::prelude::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::trait_def::{AiError, AiPlayer};
use crate::domain::combos::Combination;
use crate::domain::player_view::SeatView;

pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`, so the RNG sits behind a mutex.
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible behavior; `None` uses OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Combination>, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        if view.must_lead() {
            let leads = view.legal_leads();
            let choice = leads
                .choose(&mut *rng)
                .cloned()
                .ok_or_else(|| AiError::InvalidMove("no legal lead".into()))?;
            return Ok(Some(choice));
        }

        // Responding: passing is always legal, so it joins the draw as one
        // extra option.
        let answers = view.legal_beats();
        if answers.is_empty() {
            return Ok(None);
        }
        let idx = rand::Rng::random_range(&mut *rng, 0..=answers.len());
        Ok(answers.get(idx).cloned())
    }
}

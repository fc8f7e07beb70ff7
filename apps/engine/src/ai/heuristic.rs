//! Heuristic — the default deterministic AI.
//!
//! Goals:
//! - Stay 100% legal using the view's `legal_*()` helpers.
//! - Be deterministic (no RNG) so scenarios are reproducible.
//!
//! Leading:
//! - Dispose of the lowest-power candidate of the largest card count that
//!   does not break up a reserved bomb, conserving bombs and high singles.
//! - A single always exists, so the policy always makes progress.
//!
//! Responding:
//! - Prefer the minimal same-category beat that leaves reserved bombs
//!   intact; fall back to the weakest bomb only when no same-category
//!   answer exists; otherwise pass.

use std::collections::HashSet;

use crate::ai::trait_def::{AiError, AiPlayer};
use crate::domain::cards_types::{Card, CardId, Rank};
use crate::domain::combos::Combination;
use crate::domain::player_view::SeatView;

#[derive(Clone, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    /// Card ids tied up in natural bombs (4+ of one rank, and the joker
    /// bomb when all four jokers are held). Wildcards are never reserved.
    fn reserved_bomb_ids(hand: &[Card], level: Rank) -> HashSet<CardId> {
        let mut reserved = HashSet::new();
        for &anchor in hand {
            if anchor.is_wildcard(level) || anchor.rank.is_joker() {
                continue;
            }
            let same: Vec<CardId> = hand
                .iter()
                .filter(|c| c.rank == anchor.rank && !c.is_wildcard(level))
                .map(|c| c.id)
                .collect();
            if same.len() >= 4 {
                reserved.extend(same);
            }
        }
        let jokers: Vec<CardId> = hand
            .iter()
            .filter(|c| c.rank.is_joker())
            .map(|c| c.id)
            .collect();
        if jokers.len() == 4 {
            reserved.extend(jokers);
        }
        reserved
    }

    fn touches(combo: &Combination, reserved: &HashSet<CardId>) -> bool {
        combo.cards.iter().any(|c| reserved.contains(&c.id))
    }
}

impl AiPlayer for Heuristic {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Combination>, AiError> {
        let reserved = Self::reserved_bomb_ids(&view.hand, view.level_rank);

        if view.must_lead() {
            let leads = view.legal_leads();
            if leads.is_empty() {
                return Err(AiError::InvalidMove("no legal lead".into()));
            }
            // Largest disposal first, cheapest at that size; keep bombs and
            // bomb material in reserve.
            let pick = leads
                .iter()
                .filter(|c| !c.is_bomb() && !Self::touches(c, &reserved))
                .max_by(|a, b| {
                    a.size()
                        .cmp(&b.size())
                        .then(b.power.cmp(&a.power))
                        .then_with(|| b.cards.cmp(&a.cards))
                });
            if let Some(combo) = pick {
                return Ok(Some(combo.clone()));
            }
            // Hand is nothing but bomb material: shed its lowest single.
            let fallback = leads
                .iter()
                .filter(|c| c.size() == 1)
                .min_by_key(|c| (c.power, c.cards[0].id))
                .ok_or_else(|| AiError::InvalidMove("no single in non-empty hand".into()))?;
            return Ok(Some(fallback.clone()));
        }

        // Responding: answers come back weakest-first, same category before
        // bombs (see `enumerate_beats`).
        let answers = view.legal_beats();
        let pick = answers
            .iter()
            .find(|c| !c.is_bomb() && !Self::touches(c, &reserved))
            .or_else(|| answers.iter().find(|c| !c.is_bomb()))
            .or_else(|| answers.first());
        Ok(pick.cloned())
    }
}

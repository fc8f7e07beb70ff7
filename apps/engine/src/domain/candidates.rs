//! Deterministic enumeration of playable combinations from a hand.
//!
//! Candidate card-sets are generated per category and every set is pushed
//! through [`classify`], so the enumeration can never disagree with the
//! rules: whatever comes back is legal by construction. Output order is
//! deterministic for a given hand ordering, which keeps AI decisions
//! reproducible.

use std::collections::{BTreeMap, HashSet};

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::combos::{classify, ComboKind, Combination};
use crate::domain::compare::{beats, bomb_order};

/// Lead candidates generated per category. Tractors and plates are
/// enumerated at their minimal lengths (3 pairs, 2 triples); longer runs
/// are still accepted by the classifier if a caller selects them by hand.
const TRACTOR_PAIRS: usize = 3;
const PLATE_TRIPLES: usize = 2;

struct HandIndex {
    /// Non-wildcard cards grouped by rank, each group in canonical order.
    by_rank: BTreeMap<Rank, Vec<Card>>,
    /// Hearts at the level rank.
    wildcards: Vec<Card>,
    level: Rank,
}

impl HandIndex {
    fn new(hand: &[Card], level: Rank) -> Self {
        let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        let mut wildcards = Vec::new();
        let mut sorted = hand.to_vec();
        sorted.sort();
        for card in sorted {
            if card.is_wildcard(level) {
                wildcards.push(card);
            } else {
                by_rank.entry(card.rank).or_default().push(card);
            }
        }
        Self {
            by_rank,
            wildcards,
            level,
        }
    }

    fn naturals_of(&self, rank: Rank) -> &[Card] {
        self.by_rank.get(&rank).map_or(&[], Vec::as_slice)
    }

    /// Ranks that can anchor a same-rank set (every held rank plus the
    /// level rank, which pure wildcards can form on their own).
    fn anchor_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.by_rank.keys().copied().collect();
        if !self.wildcards.is_empty() && !ranks.contains(&self.level) {
            ranks.push(self.level);
        }
        ranks
    }

    /// Build a same-rank set of `size` cards, topping up with wildcards.
    fn same_rank_set(&self, rank: Rank, size: usize) -> Option<Vec<Card>> {
        let naturals = self.naturals_of(rank);
        let take = naturals.len().min(size);
        let fill = size - take;
        if rank.is_joker() && fill > 0 {
            return None;
        }
        if fill > self.wildcards.len() {
            return None;
        }
        let mut set: Vec<Card> = naturals[..take].to_vec();
        set.extend_from_slice(&self.wildcards[..fill]);
        Some(set)
    }

    /// Build a sequence set over the face window ending at `top`, needing
    /// `per_rank` cards of each face; `suit` restricts natural picks for
    /// straight-flush candidates.
    fn window_set(
        &self,
        top: u8,
        len: u8,
        per_rank: usize,
        suit: Option<Suit>,
    ) -> Option<Vec<Card>> {
        let mut set = Vec::with_capacity(len as usize * per_rank);
        let mut fill = 0usize;
        for face in (top + 1 - len)..=top {
            let rank = Rank::from_face(face)?;
            let naturals: Vec<Card> = self
                .naturals_of(rank)
                .iter()
                .filter(|c| suit.is_none_or(|s| c.suit == s))
                .copied()
                .collect();
            let take = naturals.len().min(per_rank);
            fill += per_rank - take;
            set.extend_from_slice(&naturals[..take]);
        }
        if fill > self.wildcards.len() {
            return None;
        }
        set.extend_from_slice(&self.wildcards[..fill]);
        Some(set)
    }
}

fn push_candidate(
    out: &mut Vec<Combination>,
    seen: &mut HashSet<Vec<u8>>,
    level: Rank,
    set: Vec<Card>,
) {
    let Ok(combo) = classify(&set, level) else {
        return;
    };
    let mut key: Vec<u8> = combo.cards.iter().map(|c| c.id.0).collect();
    key.sort_unstable();
    if seen.insert(key) {
        out.push(combo);
    }
}

/// All lead candidates from a hand, one representative set per
/// (category, anchor). Sorted by card count then power, ascending.
pub fn enumerate_leads(hand: &[Card], level: Rank) -> Vec<Combination> {
    let index = HandIndex::new(hand, level);
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    // Singles, pairs, triples, bombs.
    for rank in index.anchor_ranks() {
        for size in 1..=8usize {
            if let Some(set) = index.same_rank_set(rank, size) {
                push_candidate(&mut out, &mut seen, level, set);
            }
        }
    }
    // Wildcard singles play as themselves.
    if let Some(&wild) = index.wildcards.first() {
        push_candidate(&mut out, &mut seen, level, vec![wild]);
    }

    // Straights and straight flushes.
    for top in 7..=14u8 {
        if let Some(set) = index.window_set(top, 5, 1, None) {
            push_candidate(&mut out, &mut seen, level, set);
        }
        for suit in Suit::NATURAL {
            if let Some(set) = index.window_set(top, 5, 1, Some(suit)) {
                push_candidate(&mut out, &mut seen, level, set);
            }
        }
    }

    // Tractors and plates at minimal lengths.
    for top in (2 + TRACTOR_PAIRS as u8)..=14u8 {
        if let Some(set) = index.window_set(top, TRACTOR_PAIRS as u8, 2, None) {
            push_candidate(&mut out, &mut seen, level, set);
        }
    }
    for top in (2 + PLATE_TRIPLES as u8)..=14u8 {
        if let Some(set) = index.window_set(top, PLATE_TRIPLES as u8, 3, None) {
            push_candidate(&mut out, &mut seen, level, set);
        }
    }

    // Joker bomb.
    let jokers: Vec<Card> = hand
        .iter()
        .filter(|c| c.rank.is_joker())
        .copied()
        .collect();
    if jokers.len() == 4 {
        push_candidate(&mut out, &mut seen, level, jokers);
    }

    out.sort_by_key(|c| (c.size(), c.is_bomb(), c.power));
    out
}

/// All candidates from the hand that beat `target`, minimal beats first:
/// same-category answers ascending by power, then bomb-class answers
/// ascending by strength.
pub fn enumerate_beats(hand: &[Card], target: &Combination, level: Rank) -> Vec<Combination> {
    let index = HandIndex::new(hand, level);
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    // Same-category, same-size answers.
    match target.kind {
        ComboKind::Single | ComboKind::Pair | ComboKind::Triple => {
            for rank in index.anchor_ranks() {
                if let Some(set) = index.same_rank_set(rank, target.size()) {
                    push_candidate(&mut out, &mut seen, level, set);
                }
            }
            if target.kind == ComboKind::Single {
                if let Some(&wild) = index.wildcards.first() {
                    push_candidate(&mut out, &mut seen, level, vec![wild]);
                }
            }
        }
        ComboKind::Straight => {
            for top in 7..=14u8 {
                if let Some(set) = index.window_set(top, 5, 1, None) {
                    push_candidate(&mut out, &mut seen, level, set);
                }
            }
        }
        ComboKind::Tractor => {
            let pairs = (target.size() / 2) as u8;
            for top in (2 + pairs)..=14u8 {
                if let Some(set) = index.window_set(top, pairs, 2, None) {
                    push_candidate(&mut out, &mut seen, level, set);
                }
            }
        }
        ComboKind::Plate => {
            let triples = (target.size() / 3) as u8;
            for top in (2 + triples)..=14u8 {
                if let Some(set) = index.window_set(top, triples, 3, None) {
                    push_candidate(&mut out, &mut seen, level, set);
                }
            }
        }
        // Bomb-class targets have no same-category non-bomb answers.
        ComboKind::Bomb | ComboKind::StraightFlush | ComboKind::JokerBomb => {}
    }

    // Bomb-class answers beat anything below them.
    for rank in index.anchor_ranks() {
        for size in 4..=8usize {
            if let Some(set) = index.same_rank_set(rank, size) {
                push_candidate(&mut out, &mut seen, level, set);
            }
        }
    }
    for top in 7..=14u8 {
        for suit in Suit::NATURAL {
            if let Some(set) = index.window_set(top, 5, 1, Some(suit)) {
                push_candidate(&mut out, &mut seen, level, set);
            }
        }
    }
    let jokers: Vec<Card> = hand
        .iter()
        .filter(|c| c.rank.is_joker())
        .copied()
        .collect();
    if jokers.len() == 4 {
        push_candidate(&mut out, &mut seen, level, jokers);
    }

    out.retain(|c| beats(c, target));
    // Weakest answers first: same-category beats by power, then bombs by
    // their cross-category strength order.
    out.sort_by_key(|c| match bomb_order(c) {
        Some((tier, power)) => (1u8, tier, power),
        None => (0u8, 0, c.power),
    });
    out
}

//! Combination classifier: decides whether a multiset of cards forms a
//! legal Guandan combination and computes its comparison power.
//!
//! Classification is pure and order-independent. Hearts at the round's
//! level rank are universal substitutes (逢人配) and may fill any non-joker
//! rank; at most two exist, so the substitution search is a plain scan over
//! candidate face windows. When several interpretations are legal the
//! highest-value one is reported.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{magnitude, Card, Rank};
use crate::errors::domain::{DomainError, ValidationKind};

/// Combination categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ComboKind {
    Single,
    Pair,
    Triple,
    /// Five consecutive face ranks (3..A), one card each.
    Straight,
    /// N ≥ 3 consecutive pairs.
    Tractor,
    /// N ≥ 2 consecutive triples (钢板).
    Plate,
    /// 4..=8 cards of one rank.
    Bomb,
    /// Straight with all natural cards of a single suit.
    StraightFlush,
    /// Both Small and both Big Jokers.
    JokerBomb,
}

/// A classified play: category, the physical cards, and the power value
/// used to compare combinations of the same category and size.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Combination {
    pub kind: ComboKind,
    pub cards: Vec<Card>,
    pub power: u8,
}

impl Combination {
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Bomb-class combinations beat any non-bomb.
    pub fn is_bomb(&self) -> bool {
        matches!(
            self.kind,
            ComboKind::Bomb | ComboKind::StraightFlush | ComboKind::JokerBomb
        )
    }

    /// Human-readable description for logs and dialogs, e.g. `红桃5（一对）`.
    pub fn describe(&self) -> String {
        let first = &self.cards[0];
        let name = if first.rank.is_joker() {
            first.rank.display_name().to_string()
        } else {
            format!("{}{}", first.suit.display_name(), first.rank.display_name())
        };
        match self.kind {
            ComboKind::Single => name,
            ComboKind::Pair => format!("{name}（一对）"),
            ComboKind::Triple => format!("{name}（三个）"),
            ComboKind::Straight => format!("{name}等（顺子）"),
            ComboKind::Tractor => format!("{name}等（连对）"),
            ComboKind::Plate => format!("{name}等（钢板）"),
            ComboKind::Bomb => format!("{name}（{}张炸弹）", self.size()),
            ComboKind::StraightFlush => format!("{name}等（同花顺）"),
            ComboKind::JokerBomb => "天王炸".to_string(),
        }
    }
}

/// Classify a selection of cards under the round's level rank.
pub fn classify(cards: &[Card], level: Rank) -> Result<Combination, DomainError> {
    let no_match = |detail: &str| {
        Err(DomainError::validation(
            ValidationKind::NoMatchingPattern,
            detail.to_string(),
        ))
    };

    if cards.is_empty() {
        return no_match("empty selection");
    }

    let mut sorted: Vec<Card> = cards.to_vec();
    sorted.sort();

    let wildcards = sorted.iter().filter(|c| c.is_wildcard(level)).count();
    let naturals: Vec<Card> = sorted
        .iter()
        .filter(|c| !c.is_wildcard(level))
        .copied()
        .collect();
    let n = sorted.len();

    // Natural rank histogram; wildcards are handled as free fill.
    let mut counts: BTreeMap<Rank, usize> = BTreeMap::new();
    for c in &naturals {
        *counts.entry(c.rank).or_insert(0) += 1;
    }

    let built = |kind: ComboKind, power: u8| {
        Ok(Combination {
            kind,
            cards: sorted.clone(),
            power,
        })
    };

    if n == 1 {
        return built(ComboKind::Single, magnitude(sorted[0].rank, level));
    }

    // Joker bomb: exactly both Small and both Big Jokers.
    if n == 4
        && counts.get(&Rank::SmallJoker) == Some(&2)
        && counts.get(&Rank::BigJoker) == Some(&2)
    {
        return built(ComboKind::JokerBomb, magnitude(Rank::BigJoker, level));
    }

    // Same-rank shapes: pair, triple, bomb. All naturals share one rank and
    // wildcards fill the rest; wildcards never substitute for a joker rank.
    let same_rank = match counts.len() {
        0 => Some(level),
        1 => {
            let (&rank, _) = counts.iter().next().expect("one entry");
            (!(rank.is_joker() && wildcards > 0)).then_some(rank)
        }
        _ => None,
    };
    if let Some(rank) = same_rank {
        match n {
            2 => return built(ComboKind::Pair, magnitude(rank, level)),
            3 => return built(ComboKind::Triple, magnitude(rank, level)),
            4..=8 if !rank.is_joker() => {
                return built(ComboKind::Bomb, magnitude(rank, level));
            }
            _ => {}
        }
    }

    // Sequence shapes over face windows. A window fits when every natural
    // rank lies inside it with count at most `per_rank`; the wildcard count
    // then matches the deficit automatically because the totals agree.
    // Scanning top-down yields the highest-value interpretation.
    let fit_window = |top: u8, len: u8, per_rank: usize| -> bool {
        let bottom = top + 1 - len;
        counts.iter().all(|(rank, &cnt)| {
            rank.face()
                .is_some_and(|f| f >= bottom && f <= top && cnt <= per_rank)
        })
    };
    let best_window = |len: u8, per_rank: usize| -> Option<u8> {
        (2 + len..=14).rev().find(|&top| fit_window(top, len, per_rank))
    };

    if n == 5 {
        // Straight flush outranks a plain 5-bomb, so it is checked first.
        let one_suit = {
            let mut suits = naturals.iter().map(|c| c.suit);
            let first = suits.next();
            first.is_some() && suits.all(|s| Some(s) == first)
        };
        if one_suit {
            if let Some(top) = best_window(5, 1) {
                return built(ComboKind::StraightFlush, top);
            }
        }
        if let Some(top) = best_window(5, 1) {
            return built(ComboKind::Straight, top);
        }
    }

    if n >= 6 {
        // Plate before tractor: a wildcard-filled multiset can satisfy
        // both, and the triple-based reading is the stronger shape.
        if n % 3 == 0 {
            if let Some(top) = best_window((n / 3) as u8, 3) {
                return built(ComboKind::Plate, top);
            }
        }
        if n % 2 == 0 {
            if let Some(top) = best_window((n / 2) as u8, 2) {
                return built(ComboKind::Tractor, top);
            }
        }
    }

    no_match("no matching pattern")
}

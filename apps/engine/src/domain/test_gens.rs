// Proptest generators for domain types. Card generators draw from the real
// 108-card double deck, so duplicate suit/rank pairs carry distinct ids
// exactly as dealt cards do.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, CardId, Rank, Suit};
use crate::domain::rules::DECK_SIZE;

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(vec![Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades])
}

/// Ranks that can serve as a level rank (2..A).
pub fn level() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::NATURAL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE as u8).prop_map(|raw| Card::from_id(CardId(raw)).expect("deck id"))
}

/// `count` distinct cards from the double deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence((0..DECK_SIZE as u8).collect::<Vec<_>>(), count).prop_map(|ids| {
        ids.into_iter()
            .map(|raw| Card::from_id(CardId(raw)).expect("deck id"))
            .collect()
    })
}

/// 1..=max distinct cards.
pub fn unique_cards_up_to(max: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max).prop_flat_map(unique_cards)
}

//! Deterministic dealing of the 108-card double deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{Card, CardId};
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};

/// The full double deck in canonical id order.
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE as u8)
        .map(|raw| Card::from_id(CardId(raw)).expect("canonical deck id"))
        .collect()
}

/// Shuffle and deal 27 cards to each of the four seats. Deterministic for a
/// given seed; hands come back sorted in canonical order (display re-sorts
/// under the round's level separately).
pub fn deal_hands(seed: u64) -> [Vec<Card>; PLAYERS] {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    hands
}

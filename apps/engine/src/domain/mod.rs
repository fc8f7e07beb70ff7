//! Domain layer: pure rule logic — cards, combinations, tricks, scoring.

pub mod candidates;
pub mod cards_parsing;
pub mod cards_types;
pub mod combos;
pub mod compare;
pub mod dealing;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_combos;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_types::{magnitude, sort_for_display, Card, CardId, Rank, Suit};
pub use combos::{classify, ComboKind, Combination};
pub use compare::beats;
pub use dealing::{deal_hands, full_deck};
pub use player_view::SeatView;
pub use seed_derivation::derive_dealing_seed;
pub use state::{next_seat, partner_of, team_of, GameState, Phase, SeatId, Team, TrickState};

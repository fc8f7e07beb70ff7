#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod engine;
pub mod errors;

// Re-exports for public API
pub use ai::{create_ai, AiError, AiPlayer};
pub use domain::combos::{classify, Combination, ComboKind};
pub use domain::compare::beats;
pub use domain::snapshot::RoundSnapshot;
pub use domain::{Card, CardId, Rank, Suit};
pub use engine::{GuandanEngine, MatchConfig};
pub use errors::domain::{DomainError, ValidationKind};

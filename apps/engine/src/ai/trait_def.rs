//! AI player trait definition.

use std::fmt;

use crate::domain::combos::Combination;
use crate::domain::player_view::SeatView;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced or found no valid move where one was required
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for automated players.
///
/// Implementations receive the state visible to their seat and choose a
/// combination to play, or `None` to pass. Passing is illegal on an open
/// trick (`view.must_lead()`); implementations should pick from the
/// `legal_*` helpers on [`SeatView`] so choices stay legal by construction.
/// The engine routes every choice through the same validation path as human
/// plays.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Combination>, AiError>;
}

//! Seat view of the round — what an automated player is allowed to see.
//!
//! This is the interface between the engine and [`crate::ai::AiPlayer`]
//! implementations. AIs should always query the `legal_*` helpers instead
//! of re-implementing rules; every returned combination is classifiable and
//! (when responding) beats the combination on the table.

use crate::domain::candidates::{enumerate_beats, enumerate_leads};
use crate::domain::cards_types::{Card, Rank};
use crate::domain::combos::Combination;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, SeatId, TrickState};

/// Information visible to one seat at its decision point.
#[derive(Debug, Clone)]
pub struct SeatView {
    pub seat: SeatId,
    /// The seat's own hand.
    pub hand: Vec<Card>,
    /// Rank being played this round; its hearts are wildcards.
    pub level_rank: Rank,
    /// Combination to beat; None when the trick is open (must lead).
    pub to_beat: Option<Combination>,
    /// Remaining card counts for all seats (public information).
    pub remaining: [u8; PLAYERS],
    /// Pass flags since the last accepted play.
    pub passed: [bool; PLAYERS],
}

impl SeatView {
    pub fn for_seat(state: &GameState, seat: SeatId) -> SeatView {
        let to_beat = match &state.round.trick {
            TrickState::OpenForFirstPlay => None,
            TrickState::AwaitingResponse { combo, .. } => Some(combo.clone()),
        };
        let mut remaining = [0u8; PLAYERS];
        for (idx, hand) in state.hands.iter().enumerate() {
            remaining[idx] = hand.len() as u8;
        }
        SeatView {
            seat,
            hand: state.hands[seat as usize].clone(),
            level_rank: state.level_rank,
            to_beat,
            remaining,
            passed: state.passed,
        }
    }

    /// Whether this seat must lead (open trick: passing is illegal).
    pub fn must_lead(&self) -> bool {
        self.to_beat.is_none()
    }

    /// Lead candidates; non-empty whenever the hand is non-empty.
    pub fn legal_leads(&self) -> Vec<Combination> {
        enumerate_leads(&self.hand, self.level_rank)
    }

    /// Candidates beating the combination on the table, weakest first.
    /// Empty means the only legal action is to pass.
    pub fn legal_beats(&self) -> Vec<Combination> {
        match &self.to_beat {
            None => Vec::new(),
            Some(target) => enumerate_beats(&self.hand, target, self.level_rank),
        }
    }

    /// Everything this seat may play right now.
    pub fn legal_plays(&self) -> Vec<Combination> {
        if self.must_lead() {
            self.legal_leads()
        } else {
            self.legal_beats()
        }
    }
}

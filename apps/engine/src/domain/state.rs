//! Game state containers and seat math.

use crate::domain::cards_types::{Card, Rank};
use crate::domain::combos::Combination;
use crate::domain::rules::{PLAYERS, TEAMS};
use crate::errors::domain::DomainError;

pub type SeatId = u8; // 0..=3
pub type Team = u8; // 0..=1; seats 0/2 vs seats 1/3

/// Overall progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Created but no round dealt yet.
    Init,
    /// Trick play in progress.
    Playing,
    /// Three seats have finished; the round awaits settlement/redeal.
    RoundOver,
    /// A team passed Ace; the match is decided.
    MatchOver,
}

/// State of the current trick.
#[derive(Debug, Clone, PartialEq)]
pub enum TrickState {
    /// Board is clear; the seat on turn may play any legal combination.
    OpenForFirstPlay,
    /// A combination is on the table and must be beaten.
    AwaitingResponse { combo: Combination, seat: SeatId },
}

/// Per-trick state that resets when the board clears.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub trick: TrickState,
    /// Accepted plays of the current trick, in order, for display.
    pub trick_plays: Vec<(SeatId, Combination)>,
    /// The previous trick's plays, kept for display until the next close.
    pub last_trick: Option<Vec<(SeatId, Combination)>>,
    /// All cards played this round. Cards never return to a hand.
    pub graveyard: Vec<Card>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            trick: TrickState::OpenForFirstPlay,
            trick_plays: Vec::new(),
            last_trick: None,
            graveyard: Vec::new(),
        }
    }
}

/// Entire round container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Round number, 1-based across the match.
    pub round_no: u32,
    /// Seats' hands. A dealt card lives in exactly one hand until played.
    pub hands: [Vec<Card>; PLAYERS],
    /// Seat expected to act; None when nobody can (Init/RoundOver/MatchOver).
    pub turn: Option<SeatId>,
    /// Seat that led the round (determines the round's level rank).
    pub first_seat: SeatId,
    /// Pass flags since the last accepted play of the current trick.
    pub passed: [bool; PLAYERS],
    /// Seats in finishing order (1st..), filled as hands empty.
    pub finish_order: Vec<SeatId>,
    /// The rank being played this round; its hearts are wildcards.
    pub level_rank: Rank,
    /// Team levels, 2..=14.
    pub team_levels: [u8; TEAMS],
    /// Set when a failed pass-Ace attempt forces a replay at level 2.
    pub needs_retry: bool,
    pub round: RoundState,
}

impl GameState {
    pub fn is_finished(&self, seat: SeatId) -> bool {
        self.finish_order.contains(&seat)
    }
}

/// Seat math helpers (4 fixed seats, clockwise positive).
#[inline]
pub fn seat_offset(seat: SeatId, delta: i8) -> SeatId {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as SeatId
}

#[inline]
pub fn next_seat(seat: SeatId) -> SeatId {
    seat_offset(seat, 1)
}

/// Seat i and seat i+2 are partners.
#[inline]
pub fn partner_of(seat: SeatId) -> SeatId {
    seat_offset(seat, 2)
}

#[inline]
pub fn team_of(seat: SeatId) -> Team {
    seat % 2
}

/// First non-finished seat strictly after `seat` in seating order.
/// None when every other seat has finished.
pub fn next_active_seat(state: &GameState, seat: SeatId) -> Option<SeatId> {
    (1..PLAYERS as i8)
        .map(|step| seat_offset(seat, step))
        .find(|&s| !state.is_finished(s))
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<SeatId, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

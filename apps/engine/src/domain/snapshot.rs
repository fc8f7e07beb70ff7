//! Public snapshot API for observing round state without exposing
//! internals. Pure function of the game state; never panics.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{sort_for_display, Card, Rank};
use crate::domain::combos::Combination;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, SeatId, TrickState};

/// Public info about one seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: SeatId,
    /// Remaining hand in display order (level-adjusted sort).
    pub hand: Vec<Card>,
    pub remaining: u8,
    pub passed: bool,
    pub finished: bool,
    pub is_ai: bool,
}

/// Snapshot phase mirrors [`Phase`] without internal payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseSnapshot {
    Init,
    Playing,
    RoundOver,
    MatchOver,
}

/// Top-level snapshot consumed by UIs and the simulator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round_no: u32,
    pub phase: PhaseSnapshot,
    /// Rank being played this round; its hearts are wildcards.
    pub level_rank: Rank,
    pub team_levels: [u8; 2],
    pub seats: Vec<SeatSnapshot>,
    /// Seat expected to act, if any.
    pub turn: Option<SeatId>,
    /// Last accepted combination and who played it (the play to beat).
    pub last_play: Option<(SeatId, Combination)>,
    /// Accepted plays of the current trick, in order.
    pub trick_plays: Vec<(SeatId, Combination)>,
    /// The previous trick, until the next one closes.
    pub last_trick: Option<Vec<(SeatId, Combination)>>,
    /// Seats in finishing order so far.
    pub finish_order: Vec<SeatId>,
    /// A failed pass-Ace attempt forces a replay at level 2.
    pub needs_retry: bool,
}

/// Produce a snapshot. `is_ai` flags come from the controller's seat
/// configuration; the domain state does not track them.
pub fn snapshot(state: &GameState, is_ai: &[bool; PLAYERS]) -> RoundSnapshot {
    let seats = (0..PLAYERS as SeatId)
        .map(|seat| {
            let mut hand = state.hands[seat as usize].clone();
            sort_for_display(&mut hand, state.level_rank);
            SeatSnapshot {
                seat,
                remaining: hand.len() as u8,
                hand,
                passed: state.passed[seat as usize],
                finished: state.is_finished(seat),
                is_ai: is_ai[seat as usize],
            }
        })
        .collect();

    let last_play = match &state.round.trick {
        TrickState::OpenForFirstPlay => None,
        TrickState::AwaitingResponse { combo, seat } => Some((*seat, combo.clone())),
    };

    RoundSnapshot {
        round_no: state.round_no,
        phase: match state.phase {
            Phase::Init => PhaseSnapshot::Init,
            Phase::Playing => PhaseSnapshot::Playing,
            Phase::RoundOver => PhaseSnapshot::RoundOver,
            Phase::MatchOver => PhaseSnapshot::MatchOver,
        },
        level_rank: state.level_rank,
        team_levels: state.team_levels,
        seats,
        turn: state.turn,
        last_play,
        trick_plays: state.round.trick_plays.clone(),
        last_trick: state.round.last_trick.clone(),
        finish_order: state.finish_order.clone(),
        needs_retry: state.needs_retry,
    }
}

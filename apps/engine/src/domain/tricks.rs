//! Trick play: attempting a combination, passing, and trick closure.
//!
//! All validation happens before any mutation; every error leaves the state
//! untouched so the caller can re-prompt the same seat.

use tracing::debug;

use crate::domain::cards_types::{Card, CardId};
use crate::domain::combos::{classify, Combination};
use crate::domain::compare::beats;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    next_active_seat, require_turn, GameState, Phase, SeatId, TrickState,
};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an accepted play.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub combo: Combination,
    /// The playing seat emptied its hand.
    pub seat_finished: bool,
    /// Three seats have now finished; the round is over.
    pub round_over: bool,
}

/// Result of an accepted pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// Every other active seat had passed, so the board cleared.
    pub trick_closed: bool,
    /// Seat that leads the next trick, when one closed.
    pub next_leader: Option<SeatId>,
}

/// Resolve selected card ids against the seat's hand. Rejects unknown ids
/// and the same id selected twice.
fn resolve_selection(
    hand: &[Card],
    card_ids: &[CardId],
) -> Result<Vec<Card>, DomainError> {
    let mut picked: Vec<Card> = Vec::with_capacity(card_ids.len());
    for &id in card_ids {
        if picked.iter().any(|c| c.id == id) {
            return Err(DomainError::validation(
                ValidationKind::CardsNotInHand,
                format!("card {} selected twice", id.0),
            ));
        }
        let Some(card) = hand.iter().find(|c| c.id == id) else {
            return Err(DomainError::validation(
                ValidationKind::CardsNotInHand,
                format!("card {} not in hand", id.0),
            ));
        };
        picked.push(*card);
    }
    Ok(picked)
}

/// Play the selected cards into the current trick.
pub fn attempt_play(
    state: &mut GameState,
    seat: SeatId,
    card_ids: &[CardId],
) -> Result<PlayOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "no round in progress",
        ));
    }
    let turn = require_turn(state, "attempt_play")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "not this seat's turn",
        ));
    }

    let cards = resolve_selection(&state.hands[seat as usize], card_ids)?;

    let combo = classify(&cards, state.level_rank).map_err(|e| {
        DomainError::validation(
            ValidationKind::IllegalCombination,
            format!("selection does not classify: {e}"),
        )
    })?;

    if let TrickState::AwaitingResponse { combo: current, .. } = &state.round.trick {
        if !beats(&combo, current) {
            return Err(DomainError::validation(
                ValidationKind::DoesNotBeat,
                format!("{} does not beat {}", combo.describe(), current.describe()),
            ));
        }
    }

    // Validation done; mutate.
    let hand = &mut state.hands[seat as usize];
    hand.retain(|c| !card_ids.contains(&c.id));
    state.round.graveyard.extend(combo.cards.iter().copied());
    state.passed = [false; PLAYERS];
    state.round.trick_plays.push((seat, combo.clone()));
    state.round.trick = TrickState::AwaitingResponse {
        combo: combo.clone(),
        seat,
    };

    let seat_finished = state.hands[seat as usize].is_empty();
    if seat_finished {
        state.finish_order.push(seat);
        debug!(seat, place = state.finish_order.len(), "seat finished");
    }

    let round_over = state.finish_order.len() >= PLAYERS - 1;
    if round_over {
        // 4th place by elimination.
        if let Some(last) = (0..PLAYERS as SeatId).find(|&s| !state.is_finished(s)) {
            state.finish_order.push(last);
        }
        state.phase = Phase::RoundOver;
        state.turn = None;
    } else {
        let next = next_active_seat(state, seat);
        debug_assert!(next.is_some(), "round not over but no active seat");
        state.turn = next;
    }

    debug!(seat, play = %combo.describe(), round_over, "play accepted");
    Ok(PlayOutcome {
        combo,
        seat_finished,
        round_over,
    })
}

/// Pass on the combination currently on the table.
pub fn pass_turn(state: &mut GameState, seat: SeatId) -> Result<PassOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "no round in progress",
        ));
    }
    let turn = require_turn(state, "pass_turn")?;
    if turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "not this seat's turn",
        ));
    }
    let TrickState::AwaitingResponse { seat: last_seat, .. } = state.round.trick else {
        return Err(DomainError::validation(
            ValidationKind::PassNotAllowed,
            "cannot pass on an open trick",
        ));
    };

    state.passed[seat as usize] = true;

    // The trick closes once every seat that is neither finished nor the
    // last player has passed since the last accepted play.
    let all_others_passed = (0..PLAYERS as SeatId)
        .filter(|&s| s != last_seat && !state.is_finished(s))
        .all(|s| state.passed[s as usize]);

    if all_others_passed {
        let leader = if state.is_finished(last_seat) {
            next_active_seat(state, last_seat)
                .expect("trick closed with no active seat")
        } else {
            last_seat
        };
        state.passed = [false; PLAYERS];
        state.round.last_trick = Some(std::mem::take(&mut state.round.trick_plays));
        state.round.trick = TrickState::OpenForFirstPlay;
        state.turn = Some(leader);
        debug!(seat, leader, "trick closed");
        return Ok(PassOutcome {
            trick_closed: true,
            next_leader: Some(leader),
        });
    }

    // Advance to the next seat still in the trick.
    let next = (1..PLAYERS as i8)
        .map(|step| crate::domain::state::seat_offset(seat, step))
        .find(|&s| !state.is_finished(s) && !state.passed[s as usize]);
    debug_assert!(next.is_some(), "trick open but nobody left to act");
    state.turn = next;
    Ok(PassOutcome {
        trick_closed: false,
        next_leader: None,
    })
}

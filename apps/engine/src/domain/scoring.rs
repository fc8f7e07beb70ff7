//! Round settlement: placements, level advancement, and the pass-Ace gate.

use crate::domain::rules::{
    is_valid_level, level_delta_for_partner_place, MAX_LEVEL, MIN_LEVEL, PLAYERS, TEAMS,
};
use crate::domain::state::{partner_of, team_of, SeatId, Team};
use crate::errors::domain::DomainError;

/// Outcome of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Seats in placement order: 头游, 二游, 三游, 末游.
    pub placements: [SeatId; PLAYERS],
    pub winning_team: Team,
    /// Placement of the winner's partner (2..=4).
    pub partner_place: u8,
    /// Levels gained by the winning team (before clamping at Ace).
    pub level_delta: u8,
    pub levels_after: [u8; TEAMS],
    /// Winning team was at Ace and the partner placed 1st–3rd: match won.
    pub passed_ace: bool,
    /// Winning team was at Ace but the partner placed last: the attempt
    /// failed, the level regresses to 2, and the round is replayed.
    pub needs_retry: bool,
}

/// Settle a finished round from its finishing order and the team levels
/// going in. Pure; the caller applies `levels_after`.
pub fn settle_round(
    finish_order: &[SeatId],
    levels: [u8; TEAMS],
) -> Result<RoundOutcome, DomainError> {
    if finish_order.len() != PLAYERS {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: settle_round needs 4 placements, got {}",
            finish_order.len()
        )));
    }
    for level in levels {
        if !is_valid_level(level) {
            return Err(DomainError::validation_other(format!(
                "Invariant violated: team level {level} outside 2..=14"
            )));
        }
    }

    let placements: [SeatId; PLAYERS] = [
        finish_order[0],
        finish_order[1],
        finish_order[2],
        finish_order[3],
    ];
    let winner = placements[0];
    let winning_team = team_of(winner);
    let partner = partner_of(winner);
    let partner_place = placements
        .iter()
        .position(|&s| s == partner)
        .map(|idx| idx as u8 + 1)
        .ok_or_else(|| {
            DomainError::validation_other("Invariant violated: partner missing from placements")
        })?;

    let level_before = levels[winning_team as usize];
    let level_delta = level_delta_for_partner_place(partner_place);

    let mut levels_after = levels;
    let mut passed_ace = false;
    let mut needs_retry = false;

    if level_before == MAX_LEVEL {
        if partner_place <= 3 {
            passed_ace = true;
        } else {
            needs_retry = true;
            levels_after[winning_team as usize] = MIN_LEVEL;
        }
    } else {
        levels_after[winning_team as usize] = (level_before + level_delta).min(MAX_LEVEL);
    }

    Ok(RoundOutcome {
        placements,
        winning_team,
        partner_place,
        level_delta,
        levels_after,
        passed_ace,
        needs_retry,
    })
}

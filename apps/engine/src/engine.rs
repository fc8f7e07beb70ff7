//! Round & match controller: the boundary consumed by UIs.
//!
//! The engine is single-threaded and synchronous: every operation completes
//! before returning and mutates nothing on error. Pacing of automated seats
//! (delays between plays, serializing calls) is the caller's concern;
//! [`GuandanEngine::advance_one_automated_seat`] performs exactly one
//! seat's decision-and-play atomically.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::ai::{create_ai, AiPlayer};
use crate::domain::cards_types::CardId;
use crate::domain::rules::{is_valid_level, level_rank, PLAYERS};
use crate::domain::scoring::{settle_round, RoundOutcome};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::snapshot::{snapshot, RoundSnapshot};
use crate::domain::state::{team_of, GameState, Phase, RoundState, SeatId, TrickState};
use crate::domain::tricks::{attempt_play, pass_turn};
use crate::domain::{deal_hands, SeatView};
use crate::errors::domain::{DomainError, ValidationKind};

/// Match setup. Seats with `humans[i] == true` are driven through
/// [`GuandanEngine::attempt_play`]/[`GuandanEngine::pass`] by the caller;
/// the rest act on [`GuandanEngine::advance_one_automated_seat`].
#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub humans: [bool; PLAYERS],
    /// AI type name per seat (see [`crate::ai::create_ai`]); only read for
    /// non-human seats.
    pub ai_types: [&'static str; PLAYERS],
    /// Team levels, 2..=14 (2 is the conventional start).
    pub initial_levels: (u8, u8),
    pub first_seat: SeatId,
    /// Match seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            humans: [false; PLAYERS],
            ai_types: ["heuristic"; PLAYERS],
            initial_levels: (2, 2),
            first_seat: 0,
            seed: None,
        }
    }
}

/// Owns the round state, the per-seat AI instances, and the match seed.
/// Not internally synchronized; callers must serialize access.
pub struct GuandanEngine {
    state: GameState,
    is_ai: [bool; PLAYERS],
    ai: [Option<Box<dyn AiPlayer>>; PLAYERS],
    match_seed: u64,
    last_outcome: Option<RoundOutcome>,
}

impl std::fmt::Debug for GuandanEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuandanEngine")
            .field("state", &self.state)
            .field("is_ai", &self.is_ai)
            .field("match_seed", &self.match_seed)
            .field("last_outcome", &self.last_outcome)
            .finish_non_exhaustive()
    }
}

impl GuandanEngine {
    /// Start a match and deal the first round.
    pub fn start_match(config: MatchConfig) -> Result<Self, DomainError> {
        let (l0, l1) = config.initial_levels;
        if !is_valid_level(l0) || !is_valid_level(l1) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLevel,
                format!("levels ({l0}, {l1}) outside 2..=14"),
            ));
        }
        if config.first_seat as usize >= PLAYERS {
            return Err(DomainError::validation_other("first seat outside 0..=3"));
        }

        let mut ai: [Option<Box<dyn AiPlayer>>; PLAYERS] = [None, None, None, None];
        for seat in 0..PLAYERS {
            if config.humans[seat] {
                continue;
            }
            let kind = config.ai_types[seat];
            ai[seat] = Some(create_ai(kind, config.seed).ok_or_else(|| {
                DomainError::validation_other(format!("unknown AI type {kind:?}"))
            })?);
        }

        let match_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut engine = Self {
            state: GameState {
                phase: Phase::Init,
                round_no: 0,
                hands: Default::default(),
                turn: None,
                first_seat: config.first_seat,
                passed: [false; PLAYERS],
                finish_order: Vec::new(),
                level_rank: crate::domain::Rank::Two,
                team_levels: [l0, l1],
                needs_retry: false,
                round: RoundState::empty(),
            },
            is_ai: [
                !config.humans[0],
                !config.humans[1],
                !config.humans[2],
                !config.humans[3],
            ],
            ai,
            match_seed,
            last_outcome: None,
        };
        engine.deal_round(config.first_seat);
        info!(seed = engine.match_seed, "match started");
        Ok(engine)
    }

    /// Shuffle and deal the next round with `first_seat` leading.
    fn deal_round(&mut self, first_seat: SeatId) {
        let state = &mut self.state;
        state.round_no += 1;
        state.hands = deal_hands(derive_dealing_seed(self.match_seed, state.round_no));
        state.turn = Some(first_seat);
        state.first_seat = first_seat;
        state.passed = [false; PLAYERS];
        state.finish_order.clear();
        state.needs_retry = false;
        state.round = RoundState::empty();
        state.phase = Phase::Playing;
        // The round plays the level of the team that leads it.
        let level = state.team_levels[team_of(first_seat) as usize];
        state.level_rank = level_rank(level).expect("validated team level");
        info!(
            round = state.round_no,
            first_seat,
            level,
            "round dealt"
        );
    }

    /// Attempt to play the selected cards for a seat.
    pub fn attempt_play(
        &mut self,
        seat: SeatId,
        selected: &[CardId],
    ) -> Result<RoundSnapshot, DomainError> {
        let outcome = attempt_play(&mut self.state, seat, selected)?;
        if outcome.round_over {
            self.settle_round();
        }
        Ok(self.snapshot())
    }

    /// Pass on the combination currently on the table.
    pub fn pass(&mut self, seat: SeatId) -> Result<RoundSnapshot, DomainError> {
        pass_turn(&mut self.state, seat)?;
        Ok(self.snapshot())
    }

    /// Let the active seat act once if it is automated. No-op (current
    /// snapshot) when the active seat is human or no round is in progress.
    pub fn advance_one_automated_seat(&mut self) -> RoundSnapshot {
        let (Phase::Playing, Some(seat)) = (self.state.phase, self.state.turn) else {
            return self.snapshot();
        };
        if !self.is_ai[seat as usize] {
            return self.snapshot();
        }

        let view = SeatView::for_seat(&self.state, seat);
        let choice = match self.ai[seat as usize].as_ref() {
            Some(player) => player.choose_move(&view),
            None => Err(crate::ai::AiError::Internal("AI seat without player".into())),
        };

        match choice {
            Ok(Some(combo)) => {
                let ids: Vec<CardId> = combo.cards.iter().map(|c| c.id).collect();
                match self.attempt_play(seat, &ids) {
                    Ok(snap) => snap,
                    Err(err) => {
                        warn!(seat, %err, "AI move rejected, falling back");
                        self.fallback_move(seat)
                    }
                }
            }
            Ok(None) => match self.pass(seat) {
                Ok(snap) => snap,
                Err(err) => {
                    warn!(seat, %err, "AI pass rejected, falling back");
                    self.fallback_move(seat)
                }
            },
            Err(err) => {
                warn!(seat, %err, "AI failed to decide, falling back");
                self.fallback_move(seat)
            }
        }
    }

    /// Deterministic containment for a misbehaving policy: pass when
    /// responding, shed the lowest single when leading.
    fn fallback_move(&mut self, seat: SeatId) -> RoundSnapshot {
        if matches!(
            self.state.round.trick,
            TrickState::AwaitingResponse { .. }
        ) {
            if let Ok(snap) = self.pass(seat) {
                return snap;
            }
        }
        let view = SeatView::for_seat(&self.state, seat);
        let single = view
            .legal_leads()
            .into_iter()
            .filter(|c| c.size() == 1)
            .min_by_key(|c| (c.power, c.cards[0].id));
        if let Some(combo) = single {
            let ids: Vec<CardId> = combo.cards.iter().map(|c| c.id).collect();
            if let Ok(snap) = self.attempt_play(seat, &ids) {
                return snap;
            }
        }
        debug_assert!(false, "fallback move failed for seat {seat}");
        self.snapshot()
    }

    /// Apply the level rules for the finished round.
    fn settle_round(&mut self) {
        let outcome = settle_round(&self.state.finish_order, self.state.team_levels)
            .expect("finished round settles");
        self.state.team_levels = outcome.levels_after;
        self.state.needs_retry = outcome.needs_retry;
        if outcome.passed_ace {
            self.state.phase = Phase::MatchOver;
            info!(team = outcome.winning_team, "passed Ace, match over");
        } else {
            info!(
                team = outcome.winning_team,
                delta = outcome.level_delta,
                retry = outcome.needs_retry,
                levels = ?outcome.levels_after,
                "round settled"
            );
        }
        self.last_outcome = Some(outcome);
    }

    /// Deal the next round. The previous round's 头游 leads; after a failed
    /// pass-Ace attempt this replays at the regressed level. No-op once the
    /// match is over or while a round is still in progress.
    pub fn next_round(&mut self) -> RoundSnapshot {
        if self.state.phase != Phase::RoundOver {
            return self.snapshot();
        }
        let first = self
            .last_outcome
            .as_ref()
            .map(|o| o.placements[0])
            .unwrap_or(self.state.first_seat);
        self.deal_round(first);
        self.snapshot()
    }

    /// Redeal immediately with `first_seat` leading, discarding any round
    /// in progress. Supports the UI's "same levels, new shuffle" restart
    /// (typically after [`GuandanEngine::set_team_levels`]).
    pub fn deal_new_round(&mut self, first_seat: SeatId) -> Result<RoundSnapshot, DomainError> {
        if first_seat as usize >= PLAYERS {
            return Err(DomainError::validation_other("first seat outside 0..=3"));
        }
        self.deal_round(first_seat);
        Ok(self.snapshot())
    }

    pub fn is_round_over(&self) -> bool {
        matches!(self.state.phase, Phase::RoundOver | Phase::MatchOver)
    }

    pub fn is_match_over(&self) -> bool {
        self.state.phase == Phase::MatchOver
    }

    /// 头游 seat of the last settled round.
    pub fn winner(&self) -> Option<SeatId> {
        self.last_outcome.as_ref().map(|o| o.placements[0])
    }

    pub fn team_levels(&self) -> (u8, u8) {
        (self.state.team_levels[0], self.state.team_levels[1])
    }

    /// State setter used for externally triggered restarts ("same levels,
    /// new shuffle"). Validates the range only; takes effect at next deal.
    pub fn set_team_levels(&mut self, level0: u8, level1: u8) -> Result<(), DomainError> {
        if !is_valid_level(level0) || !is_valid_level(level1) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLevel,
                format!("levels ({level0}, {level1}) outside 2..=14"),
            ));
        }
        self.state.team_levels = [level0, level1];
        debug!(level0, level1, "team levels set");
        Ok(())
    }

    /// Settlement details of the last finished round.
    pub fn round_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        snapshot(&self.state, &self.is_ai)
    }
}

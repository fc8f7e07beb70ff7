use crate::domain::cards_parsing::parse_cards;
use crate::domain::cards_types::{Card, CardId};
use crate::domain::state::{GameState, Phase, TrickState};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::tricks::{attempt_play, pass_turn};
use crate::errors::domain::ValidationKind;

fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(|c| c.id).collect()
}

fn small_state() -> GameState {
    let h0 = parse_cards(&["3C", "3D", "9S"]);
    let h1 = parse_cards(&["5C", "5D", "TS"]);
    let h2 = parse_cards(&["7C", "7D", "JS"]);
    let h3 = parse_cards(&["8C", "8D", "QS"]);
    make_game_state([h0, h1, h2, h3], MakeGameStateArgs::default())
}

#[test]
fn play_rejects_out_of_turn_and_foreign_cards() {
    let mut state = small_state();

    let foreign = state.hands[1][0].id;
    let err = attempt_play(&mut state, 1, &[foreign]).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::NotYourTurn));

    // Seat 0 selecting a card seat 1 holds.
    let err = attempt_play(&mut state, 0, &[foreign]).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::CardsNotInHand));

    // Same card twice.
    let own = state.hands[0][0].id;
    let err = attempt_play(&mut state, 0, &[own, own]).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::CardsNotInHand));

    // Errors left the state untouched.
    assert_eq!(state.hands[0].len(), 3);
    assert_eq!(state.turn, Some(0));
}

#[test]
fn play_rejects_illegal_combination() {
    let mut state = small_state();
    // 3C + 9S is no combination.
    let pick = vec![state.hands[0][0].id, state.hands[0][2].id];
    let err = attempt_play(&mut state, 0, &pick).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::IllegalCombination));
    assert_eq!(state.hands[0].len(), 3);
}

#[test]
fn response_must_beat_the_table() {
    let mut state = small_state();
    // Seat 0 leads the pair of threes.
    let pair = ids(&state.hands[0][..2]);
    attempt_play(&mut state, 0, &pair).unwrap();
    assert_eq!(state.turn, Some(1));

    // A single does not answer a pair.
    let single = vec![state.hands[1][2].id];
    let err = attempt_play(&mut state, 1, &single).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::DoesNotBeat));

    // The pair of fives does.
    let fives = ids(&state.hands[1][..2]);
    attempt_play(&mut state, 1, &fives).unwrap();
    assert_eq!(state.turn, Some(2));
}

#[test]
fn pair_does_not_beat_single() {
    let mut state = small_state();
    // Seat 0 opens with a single.
    let c0 = state.hands[0][2].id;
    attempt_play(&mut state, 0, &[c0]).unwrap();
    // Seat 1 answers with a pair of fives: category mismatch, no bomb.
    let fives = ids(&state.hands[1][..2]);
    let err = attempt_play(&mut state, 1, &fives).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::DoesNotBeat));
}

#[test]
fn accepted_play_moves_cards_and_resets_passes() {
    let mut state = small_state();
    let c0 = state.hands[0][2].id;
    attempt_play(&mut state, 0, &[c0]).unwrap();
    pass_turn(&mut state, 1).unwrap();
    assert!(state.passed[1]);

    // Seat 2 beats the single; every pass flag clears.
    let c2 = state.hands[2][2].id;
    attempt_play(&mut state, 2, &[c2]).unwrap();
    assert_eq!(state.passed, [false; 4]);
    assert_eq!(state.round.graveyard.len(), 2);
    assert_eq!(state.hands[0].len(), 2);
    assert_eq!(state.hands[2].len(), 2);
}

#[test]
fn pass_rejected_on_open_trick() {
    let mut state = small_state();
    let err = pass_turn(&mut state, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PassNotAllowed));
}

#[test]
fn trick_closes_back_to_last_player() {
    let mut state = small_state();
    let c0 = state.hands[0][2].id;
    attempt_play(&mut state, 0, &[c0]).unwrap();
    pass_turn(&mut state, 1).unwrap();
    pass_turn(&mut state, 2).unwrap();
    let outcome = pass_turn(&mut state, 3).unwrap();

    assert!(outcome.trick_closed);
    assert_eq!(outcome.next_leader, Some(0));
    assert_eq!(state.turn, Some(0));
    assert_eq!(state.round.trick, TrickState::OpenForFirstPlay);
    assert_eq!(state.passed, [false; 4]);
    assert!(state.round.trick_plays.is_empty());
    assert_eq!(state.round.last_trick.as_ref().map(Vec::len), Some(1));
    // Played cards stay out of play.
    assert_eq!(state.round.graveyard.len(), 1);
}

#[test]
fn finished_leader_cedes_lead_to_next_active_seat() {
    let h0 = parse_cards(&["9S"]);
    let h1 = parse_cards(&["5C", "5D"]);
    let h2 = parse_cards(&["7C", "7D"]);
    let h3 = parse_cards(&["8C", "8D"]);
    let mut state = make_game_state([h0, h1, h2, h3], MakeGameStateArgs::default());

    // Seat 0 goes out on its last card.
    let c0 = state.hands[0][0].id;
    let outcome = attempt_play(&mut state, 0, &[c0]).unwrap();
    assert!(outcome.seat_finished);
    assert!(!outcome.round_over);
    assert_eq!(state.finish_order, vec![0]);
    assert_eq!(state.turn, Some(1));

    // Everyone else passes; the lead falls to seat 1, not the finished 0.
    pass_turn(&mut state, 1).unwrap();
    pass_turn(&mut state, 2).unwrap();
    let closed = pass_turn(&mut state, 3).unwrap();
    assert!(closed.trick_closed);
    assert_eq!(closed.next_leader, Some(1));
    assert_eq!(state.turn, Some(1));
}

#[test]
fn turn_advancement_skips_finished_seats() {
    let h0 = parse_cards(&["9S"]);
    let h1 = parse_cards(&["TS", "5C"]);
    let h2 = parse_cards(&["JS", "7C"]);
    let h3 = parse_cards(&["QS", "8C"]);
    let mut state = make_game_state([h0, h1, h2, h3], MakeGameStateArgs::default());

    let c0 = state.hands[0][0].id;
    attempt_play(&mut state, 0, &[c0]).unwrap();
    // Seat 1 beats, seats 2 and 3 pass: trick closes to seat 1.
    let c1 = state.hands[1][0].id;
    attempt_play(&mut state, 1, &[c1]).unwrap();
    pass_turn(&mut state, 2).unwrap();
    let closed = pass_turn(&mut state, 3).unwrap();
    assert!(closed.trick_closed);
    assert_eq!(state.turn, Some(1));

    // Seat 1 goes out; the turn skips finished seats 0 and 1.
    let c1b = state.hands[1][0].id;
    attempt_play(&mut state, 1, &[c1b]).unwrap();
    assert_eq!(state.finish_order, vec![0, 1]);
    assert_eq!(state.turn, Some(2));
}

#[test]
fn round_ends_when_three_seats_finish() {
    let h0 = parse_cards(&["3C"]);
    let h1 = parse_cards(&["5C"]);
    let h2 = parse_cards(&["7C"]);
    let h3 = parse_cards(&["9C", "9D"]);
    let mut state = make_game_state([h0, h1, h2, h3], MakeGameStateArgs::default());

    let c0 = state.hands[0][0].id;
    attempt_play(&mut state, 0, &[c0]).unwrap();
    let c1 = state.hands[1][0].id;
    attempt_play(&mut state, 1, &[c1]).unwrap();
    let c2 = state.hands[2][0].id;
    let outcome = attempt_play(&mut state, 2, &[c2]).unwrap();

    assert!(outcome.round_over);
    assert_eq!(state.phase, Phase::RoundOver);
    assert_eq!(state.turn, None);
    // The seat that never finished is 4th by elimination.
    assert_eq!(state.finish_order, vec![0, 1, 2, 3]);

    // No further plays accepted.
    let c3 = state.hands[3][0].id;
    let err = attempt_play(&mut state, 3, &[c3]).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

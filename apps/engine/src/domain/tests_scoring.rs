use crate::domain::scoring::settle_round;

#[test]
fn partner_second_advances_three() {
    // Seats 0 and 2 are partners; 0 wins, 2 is right behind.
    let outcome = settle_round(&[0, 2, 1, 3], [5, 9]).unwrap();
    assert_eq!(outcome.winning_team, 0);
    assert_eq!(outcome.partner_place, 2);
    assert_eq!(outcome.level_delta, 3);
    assert_eq!(outcome.levels_after, [8, 9]);
    assert!(!outcome.passed_ace);
    assert!(!outcome.needs_retry);
}

#[test]
fn partner_third_advances_two() {
    let outcome = settle_round(&[1, 0, 3, 2], [5, 9]).unwrap();
    assert_eq!(outcome.winning_team, 1);
    assert_eq!(outcome.partner_place, 3);
    assert_eq!(outcome.levels_after, [5, 11]);
}

#[test]
fn partner_last_advances_one() {
    let outcome = settle_round(&[0, 1, 3, 2], [5, 9]).unwrap();
    assert_eq!(outcome.partner_place, 4);
    assert_eq!(outcome.levels_after, [6, 9]);
}

#[test]
fn advancement_clamps_at_ace() {
    // Queen (12) plus three stops at Ace, it does not wrap.
    let outcome = settle_round(&[0, 2, 1, 3], [12, 9]).unwrap();
    assert_eq!(outcome.levels_after, [14, 9]);
    assert!(!outcome.passed_ace);
}

#[test]
fn failed_ace_attempt_regresses_to_two() {
    // At Ace with the partner finishing last: back to 2 and replay.
    let outcome = settle_round(&[0, 1, 3, 2], [14, 9]).unwrap();
    assert!(outcome.needs_retry);
    assert!(!outcome.passed_ace);
    assert_eq!(outcome.levels_after, [2, 9]);
}

#[test]
fn ace_passed_with_partner_in_top_three() {
    for order in [[0, 2, 1, 3], [0, 1, 2, 3]] {
        let outcome = settle_round(&order, [14, 9]).unwrap();
        assert!(outcome.passed_ace, "order {order:?}");
        assert!(!outcome.needs_retry);
        // Levels stay put; the match is decided.
        assert_eq!(outcome.levels_after, [14, 9]);
    }
}

#[test]
fn losing_team_level_never_moves() {
    let outcome = settle_round(&[3, 1, 0, 2], [7, 13]).unwrap();
    assert_eq!(outcome.winning_team, 1);
    assert_eq!(outcome.levels_after[0], 7);
}

#[test]
fn settle_requires_four_placements() {
    assert!(settle_round(&[0, 1, 2], [5, 5]).is_err());
}

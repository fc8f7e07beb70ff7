use crate::domain::cards_parsing::parse_cards;
use crate::domain::cards_types::Rank;
use crate::domain::combos::{classify, ComboKind};
use crate::errors::domain::ValidationKind;

#[test]
fn empty_selection_is_rejected() {
    let err = classify(&[], Rank::Two).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::NoMatchingPattern));
}

#[test]
fn singles_pairs_triples() {
    let single = classify(&parse_cards(&["9C"]), Rank::Two).unwrap();
    assert_eq!(single.kind, ComboKind::Single);

    let pair = classify(&parse_cards(&["5C", "5D"]), Rank::Two).unwrap();
    assert_eq!(pair.kind, ComboKind::Pair);

    let triple = classify(&parse_cards(&["KC", "KD", "KS"]), Rank::Two).unwrap();
    assert_eq!(triple.kind, ComboKind::Triple);

    // Mixed ranks never pair.
    assert!(classify(&parse_cards(&["5C", "6C"]), Rank::Two).is_err());
}

#[test]
fn two_wildcard_hearts_classify_as_level_pair() {
    // Hand {♥3, ♥3} with level 3: the two wildcards form a pair.
    let combo = classify(&parse_cards(&["3H", "3H"]), Rank::Three).unwrap();
    assert_eq!(combo.kind, ComboKind::Pair);
    // Level pair outranks an ace pair but not a joker pair.
    let aces = classify(&parse_cards(&["AC", "AD"]), Rank::Three).unwrap();
    let jokers = classify(&parse_cards(&["SJ", "SJ"]), Rank::Three).unwrap();
    assert!(combo.power > aces.power);
    assert!(combo.power < jokers.power);
}

#[test]
fn wildcard_completes_a_bomb() {
    // Hand {♥3, ♠3, ♠3, ♣3} with level 3: four-card bomb of threes.
    let combo = classify(&parse_cards(&["3H", "3S", "3S", "3C"]), Rank::Three).unwrap();
    assert_eq!(combo.kind, ComboKind::Bomb);
    assert_eq!(combo.size(), 4);
}

#[test]
fn wildcard_pairs_with_any_rank() {
    let combo = classify(&parse_cards(&["5H", "KS"]), Rank::Five).unwrap();
    assert_eq!(combo.kind, ComboKind::Pair);
    // The pair plays as kings, not as fives.
    let queens = classify(&parse_cards(&["QC", "QD"]), Rank::Five).unwrap();
    assert!(combo.power > queens.power);
}

#[test]
fn wildcards_never_substitute_jokers() {
    // {SJ, SJ, ♥3, ♥3} at level 3 is not a joker bomb or any bomb.
    assert!(classify(&parse_cards(&["SJ", "SJ", "3H", "3H"]), Rank::Three).is_err());
    // Wildcard cannot extend a joker pair into a triple either.
    assert!(classify(&parse_cards(&["BJ", "BJ", "3H"]), Rank::Three).is_err());
}

#[test]
fn joker_pair_legal_mixed_jokers_not() {
    assert_eq!(
        classify(&parse_cards(&["BJ", "BJ"]), Rank::Two).unwrap().kind,
        ComboKind::Pair
    );
    assert!(classify(&parse_cards(&["SJ", "BJ"]), Rank::Two).is_err());
}

#[test]
fn straights() {
    let low = classify(&parse_cards(&["3C", "4D", "5H", "6S", "7C"]), Rank::Two).unwrap();
    assert_eq!(low.kind, ComboKind::Straight);

    let high = classify(&parse_cards(&["TC", "JD", "QH", "KS", "AC"]), Rank::Two).unwrap();
    assert_eq!(high.kind, ComboKind::Straight);
    assert!(high.power > low.power);

    // 2 never joins a straight; no wrap-around.
    assert!(classify(&parse_cards(&["JC", "QD", "KH", "AS", "2C"]), Rank::Three).is_err());
    assert!(classify(&parse_cards(&["AC", "2D", "3H", "4S", "5C"]), Rank::Three).is_err());
    // Six cards are never a straight.
    assert!(classify(&parse_cards(&["3C", "4D", "5H", "6S", "7C", "8D"]), Rank::Two).is_err());
}

#[test]
fn wildcard_straight_reports_highest_window() {
    // Naturals 4,5,6,7 plus a wildcard: the wildcard fills the 8, not the 3.
    let combo = classify(&parse_cards(&["4C", "5D", "6S", "7C", "9H"]), Rank::Nine).unwrap();
    assert_eq!(combo.kind, ComboKind::Straight);
    assert_eq!(combo.power, 8);
}

#[test]
fn straight_flush_detected() {
    let combo = classify(&parse_cards(&["5S", "6S", "7S", "8S", "9S"]), Rank::Two).unwrap();
    assert_eq!(combo.kind, ComboKind::StraightFlush);

    // A wildcard heart may fill a spade straight flush.
    let filled = classify(&parse_cards(&["5S", "6S", "7S", "8S", "4H"]), Rank::Four).unwrap();
    assert_eq!(filled.kind, ComboKind::StraightFlush);
    assert_eq!(filled.power, 9);
}

#[test]
fn tractors() {
    let combo = classify(
        &parse_cards(&["4C", "4D", "5H", "5S", "6C", "6D"]),
        Rank::Two,
    )
    .unwrap();
    assert_eq!(combo.kind, ComboKind::Tractor);
    assert_eq!(combo.power, 6);

    // Non-consecutive pairs are not a tractor.
    assert!(classify(
        &parse_cards(&["4C", "4D", "5H", "5S", "7C", "7D"]),
        Rank::Two
    )
    .is_err());

    // Four consecutive pairs are a longer tractor.
    let long = classify(
        &parse_cards(&["4C", "4D", "5H", "5S", "6C", "6D", "7H", "7S"]),
        Rank::Two,
    )
    .unwrap();
    assert_eq!(long.kind, ComboKind::Tractor);
    assert_eq!(long.size(), 8);
}

#[test]
fn tractor_with_wildcard_fill() {
    let combo = classify(
        &parse_cards(&["4C", "4D", "5H", "5S", "6C", "2H"]),
        Rank::Two,
    )
    .unwrap();
    assert_eq!(combo.kind, ComboKind::Tractor);
}

#[test]
fn plates() {
    let combo = classify(
        &parse_cards(&["9C", "9D", "9S", "TC", "TD", "TS"]),
        Rank::Two,
    )
    .unwrap();
    assert_eq!(combo.kind, ComboKind::Plate);
    assert_eq!(combo.power, 10);

    // Two triples a gap apart are no plate.
    assert!(classify(
        &parse_cards(&["9C", "9D", "9S", "JC", "JD", "JS"]),
        Rank::Two
    )
    .is_err());
}

#[test]
fn ambiguous_six_cards_prefer_plate() {
    // ♠3♦3♠4♦4 plus both wildcard hearts: plate 333444 wins over the
    // tractor reading.
    let combo = classify(
        &parse_cards(&["3S", "3D", "4S", "4D", "5H", "5H"]),
        Rank::Five,
    )
    .unwrap();
    assert_eq!(combo.kind, ComboKind::Plate);
}

#[test]
fn bombs_four_through_eight() {
    for tokens in [
        &["8C", "8D", "8H", "8S"][..],
        &["8C", "8D", "8H", "8S", "8C"][..],
        &["8C", "8D", "8H", "8S", "8C", "8D"][..],
        &["8C", "8D", "8H", "8S", "8C", "8D", "8H"][..],
        &["8C", "8D", "8H", "8S", "8C", "8D", "8H", "8S"][..],
    ] {
        let combo = classify(&parse_cards(tokens), Rank::Two).unwrap();
        assert_eq!(combo.kind, ComboKind::Bomb, "{} cards", tokens.len());
        assert_eq!(combo.size(), tokens.len());
    }
}

#[test]
fn joker_bomb_is_exactly_all_four_jokers() {
    let combo = classify(&parse_cards(&["SJ", "SJ", "BJ", "BJ"]), Rank::Two).unwrap();
    assert_eq!(combo.kind, ComboKind::JokerBomb);
    assert!(classify(&parse_cards(&["SJ", "SJ", "BJ"]), Rank::Two).is_err());
}

#[test]
fn classification_is_order_independent() {
    let a = classify(&parse_cards(&["6C", "4D", "5H", "7S", "8C"]), Rank::Two).unwrap();
    let b = classify(&parse_cards(&["8C", "7S", "6C", "5H", "4D"]), Rank::Two).unwrap();
    assert_eq!(a.kind, b.kind);
    assert_eq!(a.power, b.power);
}

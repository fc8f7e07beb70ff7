//! Compact text tokens for cards: rank char then suit char (`3H`, `TD`,
//! `AS`), with `SJ`/`BJ` for the Small and Big Joker. Used by tests,
//! fixtures and log output; snapshots serialize the full struct instead so
//! instance ids survive the round trip.

use std::fmt;
use std::str::FromStr;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Two => '2',
        Rank::Three => '3',
        Rank::Four => '4',
        Rank::Five => '5',
        Rank::Six => '6',
        Rank::Seven => '7',
        Rank::Eight => '8',
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
        // Joker tokens are whole-token cases, not rank chars.
        Rank::SmallJoker | Rank::BigJoker => 'X',
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Rank::SmallJoker => write!(f, "SJ"),
            Rank::BigJoker => write!(f, "BJ"),
            rank => {
                let suit = match self.suit {
                    Suit::Hearts => 'H',
                    Suit::Diamonds => 'D',
                    Suit::Clubs => 'C',
                    Suit::Spades => 'S',
                    Suit::Joker => return Err(fmt::Error),
                };
                write!(f, "{}{}", rank_char(rank), suit)
            }
        }
    }
}

/// Parses copy 0 of the token's card. Tests that need the duplicate copy use
/// [`parse_cards`], which hands out copy 1 on a repeated token.
impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_card_token(s, 0)
    }
}

fn parse_card_token(s: &str, copy: u8) -> Result<Card, DomainError> {
    let invalid = || DomainError::validation(ValidationKind::ParseCard, s.to_string());

    match s {
        "SJ" => return Card::new(Suit::Joker, Rank::SmallJoker, copy).ok_or_else(invalid),
        "BJ" => return Card::new(Suit::Joker, Rank::BigJoker, copy).ok_or_else(invalid),
        _ => {}
    }

    let mut chars = s.chars();
    let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let rank = match rank_ch {
        '2' => Rank::Two,
        '3' => Rank::Three,
        '4' => Rank::Four,
        '5' => Rank::Five,
        '6' => Rank::Six,
        '7' => Rank::Seven,
        '8' => Rank::Eight,
        '9' => Rank::Nine,
        'T' => Rank::Ten,
        'J' => Rank::Jack,
        'Q' => Rank::Queen,
        'K' => Rank::King,
        'A' => Rank::Ace,
        _ => return Err(invalid()),
    };
    let suit = match suit_ch {
        'H' => Suit::Hearts,
        'D' => Suit::Diamonds,
        'C' => Suit::Clubs,
        'S' => Suit::Spades,
        _ => return Err(invalid()),
    };
    Card::new(suit, rank, copy).ok_or_else(invalid)
}

/// Parse a fixture list of tokens. The first occurrence of a token takes
/// deck copy 0, the second copy 1, so `["5H", "5H"]` yields two physically
/// distinct cards. A third occurrence panics: the double deck has no such
/// card, and fixtures are hardcoded.
#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    let mut seen: std::collections::HashMap<&str, u8> = std::collections::HashMap::new();
    tokens
        .iter()
        .map(|t| {
            let copy = seen.entry(t).or_insert(0);
            let card = parse_card_token(t, *copy).expect("hardcoded valid card token");
            *copy += 1;
            assert!(*copy <= 2, "token {t} appears more than twice");
            card
        })
        .collect()
}

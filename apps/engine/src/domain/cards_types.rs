//! Core card types: Suit, Rank, Card, CardId.

use serde::{Deserialize, Serialize};

/// Suits of the double deck. Jokers carry the dedicated `Joker` suit and no
/// conventional suit semantics beyond Small/Big.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
}

impl Suit {
    pub const NATURAL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Display symbol (♥ ♦ ♣ ♠, 👑 for jokers).
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Joker => "👑",
        }
    }

    /// Chinese display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Suit::Hearts => "红桃",
            Suit::Diamonds => "方块",
            Suit::Clubs => "梅花",
            Suit::Spades => "黑桃",
            Suit::Joker => "王",
        }
    }
}

/// Ranks in default order: 3 lowest, then up to A, then 2, then the jokers.
/// `value()` gives the default strictly increasing scale; in-game magnitude
/// additionally promotes the round's level rank (see [`magnitude`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
    SmallJoker,
    BigJoker,
}

impl Rank {
    /// The 13 per-suit ranks in deck order (3..A, 2).
    pub const NATURAL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Default comparable value: 3..=14 for 3..A, 15 for 2, 16/17 for jokers.
    pub fn value(self) -> u8 {
        match self {
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Two => 15,
            Rank::SmallJoker => 16,
            Rank::BigJoker => 17,
        }
    }

    /// Face position 3..=14 for ranks that participate in straights and
    /// tractors (3..A; 2 and jokers have no face position).
    pub fn face(self) -> Option<u8> {
        match self {
            Rank::Two | Rank::SmallJoker | Rank::BigJoker => None,
            other => Some(other.value()),
        }
    }

    /// Inverse of [`Rank::face`].
    pub fn from_face(face: u8) -> Option<Rank> {
        Rank::NATURAL.iter().copied().find(|r| r.value() == face)
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Rank::SmallJoker | Rank::BigJoker)
    }

    /// Display name (10 shown as "10"; jokers in Chinese, as on the cards).
    pub fn display_name(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::SmallJoker => "小王",
            Rank::BigJoker => "大王",
        }
    }
}

/// Level-adjusted magnitude used for power comparison of singles, pairs,
/// triples and bombs. The round's level rank sorts above 2 and below the
/// Small Joker; every other rank keeps its default position. Values are
/// doubled so the level rank fits between 2 (30) and the Small Joker (32).
pub fn magnitude(rank: Rank, level: Rank) -> u8 {
    if rank == level && !rank.is_joker() {
        31
    } else {
        rank.value() * 2
    }
}

/// Identity of one physical card: its index in the canonical unshuffled
/// double deck (0..=107). Two copies of the same suit/rank differ only here.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct CardId(pub u8);

/// Cards per copy of the deck (52 suited + 2 jokers).
const HALF_DECK: u8 = 54;

/// One physical card. Suit/rank drive the rules; `id` tracks instance
/// identity so duplicate suit/rank cards stay distinguishable for selection
/// and removal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Build the card for (suit, rank) from deck copy 0 or 1, deriving the
    /// canonical id. Joker ranks require the Joker suit and vice versa.
    pub fn new(suit: Suit, rank: Rank, copy: u8) -> Option<Card> {
        debug_assert!(copy < 2, "double deck has copies 0 and 1");
        let offset = match (suit, rank) {
            (Suit::Joker, Rank::SmallJoker) => 52,
            (Suit::Joker, Rank::BigJoker) => 53,
            (Suit::Joker, _) | (_, Rank::SmallJoker) | (_, Rank::BigJoker) => return None,
            (suit, rank) => {
                let suit_idx = Suit::NATURAL.iter().position(|&s| s == suit)? as u8;
                let rank_idx = Rank::NATURAL.iter().position(|&r| r == rank)? as u8;
                suit_idx * 13 + rank_idx
            }
        };
        Some(Card {
            id: CardId(copy * HALF_DECK + offset),
            suit,
            rank,
        })
    }

    /// Decode a canonical deck id back into its card.
    pub fn from_id(id: CardId) -> Option<Card> {
        if id.0 >= 2 * HALF_DECK {
            return None;
        }
        let copy = id.0 / HALF_DECK;
        let offset = id.0 % HALF_DECK;
        let (suit, rank) = match offset {
            52 => (Suit::Joker, Rank::SmallJoker),
            53 => (Suit::Joker, Rank::BigJoker),
            n => (
                Suit::NATURAL[(n / 13) as usize],
                Rank::NATURAL[(n % 13) as usize],
            ),
        };
        Card::new(suit, rank, copy)
    }

    /// Whether this card is the round's universal substitute (逢人配): a
    /// heart at the current level rank. Round-scoped and derived, never a
    /// stored attribute.
    pub fn is_wildcard(&self, level: Rank) -> bool {
        self.suit == Suit::Hearts && self.rank == level
    }

    /// Short display form, e.g. `♥3` or `大王`.
    pub fn short_name(&self) -> String {
        if self.rank.is_joker() {
            self.rank.display_name().to_string()
        } else {
            format!("{}{}", self.suit.symbol(), self.rank.display_name())
        }
    }
}

// Note: Ord on Card is only the canonical level-independent order (rank then
// suit then copy) for stable sorting. In-game comparisons must go through
// `magnitude` / the combination comparator, which honor the level rank.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.rank, self.suit, self.id).cmp(&(other.rank, other.suit, other.id))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort a hand for display: level-adjusted magnitude ascending, then suit,
/// then instance id for stability.
pub fn sort_for_display(hand: &mut [Card], level: Rank) {
    hand.sort_by_key(|c| (magnitude(c.rank, level), c.suit, c.id));
}

//! Playing-card entity and its precomputed faces.
//!
//! A `Card` is created once when the deck is generated and lives for the whole
//! session. Only its face-up flag and its bounding box ever change.

use super::color::Rgb;
use super::geometry::{Bounds, Point};
use crate::config::Palette;
use std::fmt;

/// The 13 ranks, in generation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
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
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
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
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
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
        }
    }
}

/// The 4 suits, in generation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

/// Display color class of a suit; resolved to an `Rgb` through the palette
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuitColor {
    Black,
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }

    pub fn color(self) -> SuitColor {
        match self {
            Suit::Spades | Suit::Clubs => SuitColor::Black,
            Suit::Hearts | Suit::Diamonds => SuitColor::Red,
        }
    }
}

/// Stable identity of a card: unique per (rank, suit) pair.
///
/// The table and the drag state refer to cards by `CardId` so that
/// mutating a card in place is seen through both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u8);

impl CardId {
    pub fn of(rank: Rank, suit: Suit) -> Self {
        Self(suit as u8 * Rank::ALL.len() as u8 + rank as u8)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One rendered side of a card, prepared once at construction.
///
/// This is what a frontend blits: a fill, a border, and optional ink
/// (a corner label plus a centered pip).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFace {
    pub fill: Rgb,
    pub border: Rgb,
    pub ink: Rgb,
    pub corner: String,
    pub pip: Option<char>,
}

impl CardFace {
    pub fn front(rank: Rank, suit: Suit, palette: &Palette) -> Self {
        Self {
            fill: palette.card_front,
            border: palette.outline,
            ink: palette.suit_ink(suit.color()),
            corner: format!("{}{}", rank.label(), suit.glyph()),
            pip: Some(suit.glyph()),
        }
    }

    pub fn back(palette: &Palette) -> Self {
        Self {
            fill: palette.card_back,
            border: palette.back_outline,
            ink: palette.back_outline,
            corner: String::new(),
            pip: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    /// True when the rank/suit side is showing
    pub face_up: bool,
    pub bounds: Bounds,
    front: CardFace,
    back: CardFace,
}

impl Card {
    /// New face-down card at the origin
    pub fn new(rank: Rank, suit: Suit, width: i32, height: i32, palette: &Palette) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
            bounds: Bounds::new(0, 0, width, height),
            front: CardFace::front(rank, suit, palette),
            back: CardFace::back(palette),
        }
    }

    pub fn id(&self) -> CardId {
        CardId::of(self.rank, self.suit)
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Hit-test against the card's current bounding box
    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// The face a renderer should show right now
    pub fn visible_face(&self) -> &CardFace {
        if self.face_up {
            &self.front
        } else {
            &self.back
        }
    }

    pub fn back_face(&self) -> &CardFace {
        &self.back
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit, 80, 120, &Palette::default())
    }

    #[test]
    fn test_new_card_is_face_down() {
        let c = card(Rank::Queen, Suit::Hearts);
        assert!(!c.face_up);
        assert_eq!(c.visible_face(), c.back_face());
        assert_eq!(c.bounds, Bounds::new(0, 0, 80, 120));
    }

    #[test]
    fn test_flip_twice_restores_flag_and_keeps_position() {
        let mut c = card(Rank::Seven, Suit::Clubs);
        c.bounds.move_to(Point::new(200, 300));

        c.flip();
        assert!(c.face_up);
        assert_eq!(c.visible_face().corner, "7♣");

        c.flip();
        assert!(!c.face_up);
        assert_eq!(c.bounds.origin(), Point::new(200, 300));
    }

    #[test]
    fn test_contains_point_follows_moves() {
        let mut c = card(Rank::Ace, Suit::Spades);
        assert!(c.contains_point(Point::new(10, 10)));

        c.bounds.move_to(Point::new(500, 500));
        assert!(!c.contains_point(Point::new(10, 10)));
        assert!(c.contains_point(Point::new(540, 560)));
    }

    #[test]
    fn test_front_face_uses_suit_color() {
        let palette = Palette::default();
        let heart = CardFace::front(Rank::Ten, Suit::Hearts, &palette);
        let spade = CardFace::front(Rank::King, Suit::Spades, &palette);

        assert_eq!(heart.ink, palette.red_suit);
        assert_eq!(heart.corner, "10♥");
        assert_eq!(spade.ink, palette.black_suit);
        assert_eq!(spade.pip, Some('♠'));
    }

    #[test]
    fn test_card_ids_are_unique() {
        let mut ids: Vec<CardId> = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| CardId::of(r, s)))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 52);
        assert_eq!(ids.first(), Some(&CardId(0)));
        assert_eq!(ids.last(), Some(&CardId(51)));
    }
}

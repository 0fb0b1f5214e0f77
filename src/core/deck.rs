//! The draw pile.
//!
//! Owns every undrawn card. The last element of `cards` is the top of the
//! pile and is the next card `draw_top` hands out. Drawn cards never return.

use crate::config::Palette;
use crate::data::{Bounds, Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    region: Bounds,
}

impl Deck {
    /// Generate all 52 cards and shuffle them once
    pub fn new<R: Rng + ?Sized>(region: Bounds, palette: &Palette, rng: &mut R) -> Self {
        let mut deck = Self {
            cards: Self::generate(region.width, region.height, palette),
            region,
        };
        deck.shuffle(rng);
        deck
    }

    /// One face-down card per (rank, suit) pair, suits outermost
    pub fn generate(width: i32, height: i32, palette: &Palette) -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| {
                Rank::ALL
                    .iter()
                    .map(move |&rank| Card::new(rank, suit, width, height, palette))
            })
            .collect()
    }

    /// Uniformly permute the remaining cards
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card, or `None` once the pile is exhausted
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Next card `draw_top` would return
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn region(&self) -> Bounds {
        self.region
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

//! Table session: the cards in play and the drag state machine.
//!
//! The in-play sequence is ordered back-to-front. Rendering walks it forward,
//! hit-testing walks it backward, and bringing a card to the front is a
//! remove + push. There is no separate z-index.
//!
//! ```text
//!            primary down on deck / card
//!   Idle ─────────────────────────────────► Dragging { card, offset }
//!    ▲                                            │  move: origin = pos - offset
//!    └────────────── primary up ──────────────────┘
//! ```
//!
//! Secondary presses flip the topmost card under the pointer and never touch
//! the drag state.

use super::deck::Deck;
use crate::config::{CardConfig, Config, Palette};
use crate::data::{Card, CardId, InputEvent, Offset, Point, PointerButton};
use rand::Rng;

/// Whether a card is currently held by the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card: CardId,
        /// Grab point minus the card's origin at pickup
        offset: Offset,
    },
}

pub struct Session {
    deck: Deck,
    /// Cards in play, back to front
    table: Vec<Card>,
    drag: DragState,
    palette: Palette,
    card_style: CardConfig,
    /// Cleared by the quit signal; the frame loop exits after the current frame
    pub running: bool,
}

impl Session {
    /// Start a session with a freshly shuffled deck
    pub fn new<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let deck = Deck::new(config.deck_region(), &config.palette, rng);
        Self::with_deck(deck, config)
    }

    pub fn with_deck(deck: Deck, config: &Config) -> Self {
        Self {
            deck,
            table: Vec::with_capacity(52),
            drag: DragState::Idle,
            palette: config.palette,
            card_style: config.card,
            running: true,
        }
    }

    /// Apply one pointer event. Inputs that match nothing are no-ops.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Down {
                button: PointerButton::Primary,
                pos,
            } => self.press_primary(pos),
            InputEvent::Down {
                button: PointerButton::Secondary,
                pos,
            } => self.flip_at(pos),
            InputEvent::Up { button } => self.release(button),
            InputEvent::Move { pos } => self.drag_to(pos),
        }
    }

    pub fn request_quit(&mut self) {
        tracing::info!("Quit requested");
        self.running = false;
    }

    fn press_primary(&mut self, pos: Point) {
        // The pile owns its region: a press there never reaches table cards
        if self.deck.region().contains(pos) {
            self.draw_at(pos);
            return;
        }

        let Some(index) = self.hit_test(pos) else {
            tracing::trace!(x = pos.x, y = pos.y, "Press on empty table");
            return;
        };

        let card = self.table.remove(index);
        let id = card.id();
        let offset = pos - card.bounds.origin();
        self.table.push(card);
        self.drag = DragState::Dragging { card: id, offset };

        tracing::debug!(%id, index, ?offset, "Picked up card");
    }

    fn draw_at(&mut self, pos: Point) {
        let Some(mut card) = self.deck.draw_top() else {
            tracing::debug!("Deck is empty, nothing to draw");
            return;
        };

        // Drawn cards stay face down
        card.bounds.center_on(pos);
        let id = card.id();
        let offset = pos - card.bounds.origin();
        self.table.push(card);
        self.drag = DragState::Dragging { card: id, offset };

        tracing::debug!(%id, remaining = self.deck.len(), "Drew card from deck");
    }

    fn release(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if let DragState::Dragging { card, .. } = self.drag {
            tracing::debug!(id = %card, "Released card");
        }
        self.drag = DragState::Idle;
    }

    fn drag_to(&mut self, pos: Point) {
        let DragState::Dragging { card, offset } = self.drag else {
            return;
        };
        if let Some(held) = self.card_mut(card) {
            held.bounds.move_to(pos.minus(offset));
        }
    }

    fn flip_at(&mut self, pos: Point) {
        if let Some(index) = self.hit_test(pos) {
            let card = &mut self.table[index];
            card.flip();
            tracing::debug!(id = %card.id(), face_up = card.face_up, "Flipped card");
        }
    }

    /// Index of the topmost in-play card under `pos`
    fn hit_test(&self, pos: Point) -> Option<usize> {
        self.table.iter().rposition(|card| card.contains_point(pos))
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.table.iter_mut().find(|card| card.id() == id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.table.iter().find(|card| card.id() == id)
    }

    /// The card under an active drag, if any
    pub fn held_card(&self) -> Option<&Card> {
        match self.drag {
            DragState::Dragging { card, .. } => self.card(card),
            DragState::Idle => None,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Cards in play, back to front
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn card_style(&self) -> &CardConfig {
        &self.card_style
    }
}

//! Frame rendering against an abstract drawing surface.
//!
//! Frontends implement `Surface`; the session decides what gets drawn and in
//! which order. Every frame is drawn in full: background, pile, in-play cards
//! back to front, then the highlight of the held card on top of everything.

use super::deck::Deck;
use super::session::Session;
use crate::config::CardConfig;
use crate::data::{Bounds, Card, CardFace, Rgb};

/// Drawing primitives a frontend provides
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    /// Paint a prepared card face into `bounds`
    fn blit(&mut self, face: &CardFace, bounds: Bounds);

    /// Draw a border around `bounds` without touching its interior
    fn outline(&mut self, bounds: Bounds, color: Rgb, width: u16, radius: u16);
}

impl Card {
    /// Draw whichever face is showing at the card's current position
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.blit(self.visible_face(), self.bounds);
    }

    pub fn render_highlight(&self, surface: &mut dyn Surface, color: Rgb, style: &CardConfig) {
        surface.outline(self.bounds, color, style.highlight_width, style.corner_radius);
    }
}

impl Deck {
    /// Card back while cards remain, an empty outline afterwards
    pub fn render(&self, surface: &mut dyn Surface, placeholder: Rgb, style: &CardConfig) {
        match self.peek_top() {
            Some(top) => surface.blit(top.back_face(), self.region()),
            None => surface.outline(
                self.region(),
                placeholder,
                style.outline_width,
                style.corner_radius,
            ),
        }
    }
}

/// Draw one full frame of the session
pub fn render_frame(session: &Session, surface: &mut dyn Surface) {
    let palette = session.palette();
    let style = session.card_style();

    surface.clear(palette.background);
    session.deck().render(surface, palette.back_outline, style);

    for card in session.table() {
        card.render(surface);
    }

    if let Some(held) = session.held_card() {
        held.render_highlight(surface, palette.highlight, style);
    }
}

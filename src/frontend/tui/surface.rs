//! Maps the logical table onto terminal cells and paints it into a ratatui
//! `Buffer`.

use crate::config::TerminalConfig;
use crate::core::Surface;
use crate::data::{Bounds, CardFace, Point, Rgb};
use ratatui::{buffer::Buffer, style::Color, symbols::border};

/// Conversion between terminal cells and logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cell_width: i32,
    cell_height: i32,
}

/// Inclusive span of cells covered by a logical box. May extend past the
/// terminal; painting clips per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CellSpan {
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

impl Viewport {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            cell_width: config.cell_width.max(1),
            cell_height: config.cell_height.max(1),
        }
    }

    /// Logical point at the center of a cell
    pub fn to_logical(&self, column: u16, row: u16) -> Point {
        Point::new(
            i32::from(column) * self.cell_width + self.cell_width / 2,
            i32::from(row) * self.cell_height + self.cell_height / 2,
        )
    }

    /// Cells touched by a logical box, or `None` for an empty box
    pub fn to_cells(&self, bounds: Bounds) -> Option<CellSpan> {
        if bounds.width <= 0 || bounds.height <= 0 {
            return None;
        }
        Some(CellSpan {
            left: bounds.x.div_euclid(self.cell_width),
            top: bounds.y.div_euclid(self.cell_height),
            right: (bounds.right() - 1).div_euclid(self.cell_width),
            bottom: (bounds.bottom() - 1).div_euclid(self.cell_height),
        })
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// `Surface` over a ratatui buffer
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    viewport: Viewport,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, viewport: Viewport) -> Self {
        Self { buf, viewport }
    }

    /// Write to one cell; anything off-screen is dropped
    fn put(&mut self, x: i32, y: i32, ch: Option<char>, fg: Option<Color>, bg: Option<Color>) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            if let Some(ch) = ch {
                cell.set_char(ch);
            }
            if let Some(fg) = fg {
                cell.set_fg(fg);
            }
            if let Some(bg) = bg {
                cell.set_bg(bg);
            }
        }
    }

    fn border(&mut self, span: CellSpan, set: border::Set, fg: Color) {
        for x in span.left..=span.right {
            self.put(x, span.top, first_char(set.horizontal_top), Some(fg), None);
            self.put(x, span.bottom, first_char(set.horizontal_bottom), Some(fg), None);
        }
        for y in span.top..=span.bottom {
            self.put(span.left, y, first_char(set.vertical_left), Some(fg), None);
            self.put(span.right, y, first_char(set.vertical_right), Some(fg), None);
        }

        if span.width() > 1 && span.height() > 1 {
            self.put(span.left, span.top, first_char(set.top_left), Some(fg), None);
            self.put(span.right, span.top, first_char(set.top_right), Some(fg), None);
            self.put(span.left, span.bottom, first_char(set.bottom_left), Some(fg), None);
            self.put(span.right, span.bottom, first_char(set.bottom_right), Some(fg), None);
        }
    }
}

fn first_char(symbol: &str) -> Option<char> {
    symbol.chars().next()
}

/// Heavy lines for thick outlines, rounded corners when a radius is asked for
fn border_set(width: u16, radius: u16) -> border::Set {
    if width >= 3 {
        border::THICK
    } else if radius > 0 {
        border::ROUNDED
    } else {
        border::PLAIN
    }
}

impl Surface for BufferSurface<'_> {
    fn clear(&mut self, color: Rgb) {
        let area = self.buf.area;
        let bg = to_color(color);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn blit(&mut self, face: &CardFace, bounds: Bounds) {
        let Some(span) = self.viewport.to_cells(bounds) else {
            return;
        };
        let fill = to_color(face.fill);
        let ink = to_color(face.ink);

        for y in span.top..=span.bottom {
            for x in span.left..=span.right {
                self.put(x, y, Some(' '), Some(ink), Some(fill));
            }
        }
        self.border(span, border::ROUNDED, to_color(face.border));

        // Ink only fits inside the border
        if span.width() < 3 || span.height() < 3 {
            return;
        }
        for (i, ch) in face.corner.chars().enumerate() {
            let x = span.left + 1 + i as i32;
            if x >= span.right {
                break;
            }
            self.put(x, span.top + 1, Some(ch), Some(ink), None);
        }
        if let Some(pip) = face.pip {
            let cx = span.left + span.width() / 2;
            let cy = span.top + span.height() / 2;
            self.put(cx, cy, Some(pip), Some(ink), None);
        }
    }

    fn outline(&mut self, bounds: Bounds, color: Rgb, width: u16, radius: u16) {
        if let Some(span) = self.viewport.to_cells(bounds) {
            self.border(span, border_set(width, radius), to_color(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crate::data::{Rank, Suit};
    use ratatui::layout::Rect;

    fn viewport() -> Viewport {
        Viewport::new(&TerminalConfig::default())
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).map(|c| c.symbol()).unwrap_or("")
    }

    #[test]
    fn test_cell_to_logical_is_cell_center() {
        let v = viewport();
        assert_eq!(v.to_logical(0, 0), Point::new(5, 10));
        assert_eq!(v.to_logical(7, 4), Point::new(75, 90));
    }

    #[test]
    fn test_card_covers_eight_by_six_cells() {
        let span = viewport().to_cells(Bounds::new(30, 30, 80, 120)).unwrap();
        assert_eq!(
            span,
            CellSpan {
                left: 3,
                top: 1,
                right: 10,
                bottom: 7
            }
        );
        assert_eq!(span.width(), 8);

        let aligned = viewport().to_cells(Bounds::new(40, 40, 80, 120)).unwrap();
        assert_eq!((aligned.width(), aligned.height()), (8, 6));
    }

    #[test]
    fn test_negative_positions_floor() {
        let span = viewport().to_cells(Bounds::new(-15, -5, 80, 120)).unwrap();
        assert_eq!((span.left, span.top), (-2, -1));
        assert!(viewport().to_cells(Bounds::new(0, 0, 0, 10)).is_none());
    }

    #[test]
    fn test_clear_paints_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        BufferSurface::new(&mut buf, viewport()).clear(Rgb(0, 100, 0));
        assert!(buf.content().iter().all(|c| c.bg == Color::Rgb(0, 100, 0)));
    }

    #[test]
    fn test_blit_front_face() {
        let palette = Palette::default();
        let face = CardFace::front(Rank::Ten, Suit::Hearts, &palette);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));

        BufferSurface::new(&mut buf, viewport()).blit(&face, Bounds::new(0, 0, 80, 120));

        assert_eq!(symbol(&buf, 0, 0), "╭");
        assert_eq!(symbol(&buf, 7, 5), "╯");
        assert_eq!(symbol(&buf, 1, 1), "1");
        assert_eq!(symbol(&buf, 2, 1), "0");
        assert_eq!(symbol(&buf, 3, 1), "♥");
        assert_eq!(symbol(&buf, 4, 3), "♥");
        assert_eq!(buf.cell((4, 3)).map(|c| c.fg), Some(Color::Rgb(200, 0, 0)));
        assert_eq!(buf.cell((2, 2)).map(|c| c.bg), Some(Color::Rgb(255, 255, 255)));
        // Outside the card is untouched
        assert_eq!(symbol(&buf, 8, 0), " ");
    }

    #[test]
    fn test_blit_clips_at_terminal_edge() {
        let face = CardFace::back(&Palette::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 3));

        BufferSurface::new(&mut buf, viewport()).blit(&face, Bounds::new(20, 20, 80, 120));

        assert_eq!(symbol(&buf, 2, 1), "╭");
        assert_eq!(buf.cell((4, 2)).map(|c| c.bg), Some(Color::Rgb(20, 50, 150)));
    }

    #[test]
    fn test_thick_highlight_keeps_interior() {
        let palette = Palette::default();
        let face = CardFace::front(Rank::Ace, Suit::Spades, &palette);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        let bounds = Bounds::new(0, 0, 80, 120);

        let mut surface = BufferSurface::new(&mut buf, viewport());
        surface.blit(&face, bounds);
        surface.outline(bounds, palette.highlight, 4, 5);

        assert_eq!(symbol(&buf, 0, 0), "┏");
        assert_eq!(buf.cell((0, 0)).map(|c| c.fg), Some(Color::Rgb(255, 255, 0)));
        assert_eq!(symbol(&buf, 1, 1), "A");
        assert_eq!(symbol(&buf, 4, 3), "♠");
    }

    #[test]
    fn test_thin_outline_is_rounded() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        BufferSurface::new(&mut buf, viewport()).outline(
            Bounds::new(30, 30, 80, 120),
            Rgb(150, 150, 150),
            2,
            5,
        );
        assert_eq!(symbol(&buf, 3, 1), "╭");
        assert_eq!(symbol(&buf, 5, 1), "─");
        assert_eq!(symbol(&buf, 5, 3), " ");
    }
}

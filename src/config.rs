//! Configuration loader plus strongly typed settings structures.
//!
//! Every tunable (window size, card metrics, deck position, palette, frame
//! rate, terminal cell size) ships in `defaults/config.toml`, which is
//! embedded at compile time. Nothing is read from disk at runtime.

use crate::data::{Bounds, Rgb, SuitColor};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

/// Logical size of the table surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default = "default_card_width")]
    pub width: i32,
    #[serde(default = "default_card_height")]
    pub height: i32,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u16,
    #[serde(default = "default_outline_width")]
    pub outline_width: u16,
    #[serde(default = "default_highlight_width")]
    pub highlight_width: u16,
}

/// Top-left corner of the draw pile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    #[serde(default = "default_deck_x")]
    pub x: i32,
    #[serde(default = "default_deck_y")]
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_background")]
    pub background: Rgb,
    #[serde(default = "default_card_front")]
    pub card_front: Rgb,
    #[serde(default = "default_card_back")]
    pub card_back: Rgb,
    #[serde(default = "default_outline")]
    pub outline: Rgb,
    #[serde(default = "default_back_outline")]
    pub back_outline: Rgb, // Back border and empty-pile placeholder
    #[serde(default = "default_highlight")]
    pub highlight: Rgb,
    #[serde(default = "default_black_suit")]
    pub black_suit: Rgb,
    #[serde(default = "default_red_suit")]
    pub red_suit: Rgb,
}

/// How many logical units one terminal cell covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_cell_width")]
    pub cell_width: i32,
    #[serde(default = "default_cell_height")]
    pub cell_height: i32,
}

fn default_frame_rate() -> u32 {
    60
}
fn default_window_width() -> i32 {
    1200
}
fn default_window_height() -> i32 {
    900
}
fn default_card_width() -> i32 {
    80
}
fn default_card_height() -> i32 {
    120
}
fn default_corner_radius() -> u16 {
    5
}
fn default_outline_width() -> u16 {
    2
}
fn default_highlight_width() -> u16 {
    4
}
fn default_deck_x() -> i32 {
    30
}
fn default_deck_y() -> i32 {
    30
}
fn default_background() -> Rgb {
    Rgb(0, 100, 0)
}
fn default_card_front() -> Rgb {
    Rgb::WHITE
}
fn default_card_back() -> Rgb {
    Rgb(20, 50, 150)
}
fn default_outline() -> Rgb {
    Rgb::BLACK
}
fn default_back_outline() -> Rgb {
    Rgb(150, 150, 150)
}
fn default_highlight() -> Rgb {
    Rgb(255, 255, 0)
}
fn default_black_suit() -> Rgb {
    Rgb::BLACK
}
fn default_red_suit() -> Rgb {
    Rgb(200, 0, 0)
}
fn default_cell_width() -> i32 {
    10
}
fn default_cell_height() -> i32 {
    20
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: default_card_width(),
            height: default_card_height(),
            corner_radius: default_corner_radius(),
            outline_width: default_outline_width(),
            highlight_width: default_highlight_width(),
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            x: default_deck_x(),
            y: default_deck_y(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: default_background(),
            card_front: default_card_front(),
            card_back: default_card_back(),
            outline: default_outline(),
            back_outline: default_back_outline(),
            highlight: default_highlight(),
            black_suit: default_black_suit(),
            red_suit: default_red_suit(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            window: WindowConfig::default(),
            card: CardConfig::default(),
            deck: DeckConfig::default(),
            palette: Palette::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl Palette {
    pub fn suit_ink(&self, color: SuitColor) -> Rgb {
        match color {
            SuitColor::Black => self.black_suit,
            SuitColor::Red => self.red_suit,
        }
    }
}

impl Config {
    /// Load the embedded defaults
    pub fn load() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG).context("Failed to load embedded config.toml")
    }

    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the session cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            bail!("frame_rate must be at least 1");
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            bail!(
                "window size must be positive (got {}x{})",
                self.window.width,
                self.window.height
            );
        }
        if self.card.width <= 0 || self.card.height <= 0 {
            bail!(
                "card size must be positive (got {}x{})",
                self.card.width,
                self.card.height
            );
        }
        if self.terminal.cell_width <= 0 || self.terminal.cell_height <= 0 {
            bail!("terminal cell size must be positive");
        }

        let table = Bounds::new(0, 0, self.window.width, self.window.height);
        if !table.encloses(&self.deck_region()) {
            bail!(
                "deck at ({}, {}) does not fit inside the {}x{} window",
                self.deck.x,
                self.deck.y,
                self.window.width,
                self.window.height
            );
        }

        Ok(())
    }

    /// Screen region of the draw pile
    pub fn deck_region(&self) -> Bounds {
        Bounds::new(self.deck.x, self.deck.y, self.card.width, self.card.height)
    }

    /// Time budget for one frame
    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}

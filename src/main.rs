//! Card Sandbox - draw, drag and flip a deck of playing cards in the terminal
//!
//! No rules, no scoring: one shuffled deck, a table, and the mouse.

mod config;
mod core;
mod data;
mod frontend;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use frontend::{Frontend, FrontendEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "card-sandbox")]
#[command(about = "Draw, drag and flip playing cards on a virtual table", long_about = None)]
struct Cli {
    /// Seed for the deck shuffle (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write diagnostic logs to FILE (use RUST_LOG to control the level)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

/// Route tracing output to a file, or discard it
///
/// TUI apps can't log to stdout, so logging is off unless a file is given.
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false) // No color codes in log file
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = config::Config::load()?;

    let mut rng = match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "Shuffling with fixed seed");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    run_tui(config, &mut rng)
}

/// TUI main loop: drain input, update the session, draw, repeat
fn run_tui(config: config::Config, rng: &mut ChaCha8Rng) -> Result<()> {
    use crate::core::Session;
    use frontend::TuiFrontend;

    let mut session = Session::new(&config, rng);
    let mut frontend = TuiFrontend::new(&config)?;

    let (width, height) = frontend.size();
    tracing::info!(
        width,
        height,
        cards = session.deck().len(),
        "Card sandbox started"
    );
    if let Some(needed) = frontend.viewport().to_cells(data::Bounds::new(
        0,
        0,
        config.window.width,
        config.window.height,
    )) {
        if needed.width() > i32::from(width) || needed.height() > i32::from(height) {
            tracing::warn!(
                "Terminal is {}x{} cells, the table needs {}x{}; the edges will be clipped",
                width,
                height,
                needed.width(),
                needed.height()
            );
        }
    }

    while session.running {
        for event in frontend.poll_events()? {
            match event {
                FrontendEvent::Pointer(input) => session.handle_input(input),
                FrontendEvent::Resize { width, height } => {
                    tracing::debug!(width, height, "Terminal resized");
                }
                FrontendEvent::Quit => session.request_quit(),
            }
        }

        // Every frame is drawn in full, changed or not
        frontend.render(&session)?;
    }

    frontend.cleanup()?;
    tracing::info!(
        in_play = session.table().len(),
        remaining = session.deck().len(),
        "Card sandbox stopped"
    );

    Ok(())
}

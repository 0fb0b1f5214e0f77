use super::surface::{BufferSurface, Viewport};
use crate::config::Config;
use crate::core::{render_frame, Session};
use crate::data::{InputEvent, PointerButton};
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

const WINDOW_TITLE: &str = "Card Sandbox";

/// TUI Frontend using ratatui
///
/// Renders the table into the terminal and turns crossterm mouse events into
/// table input.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    frame_budget: Duration,
    viewport: Viewport,
    restored: bool,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new(config: &Config) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(WINDOW_TITLE)
        )
        .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            frame_budget: config.frame_budget(),
            viewport: Viewport::new(&config.terminal),
            restored: false,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Convert crossterm event to FrontendEvent
    pub(crate) fn convert_event(event: Event, viewport: &Viewport) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                // The only keys the sandbox listens to are the quit signal
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(FrontendEvent::Quit),
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(FrontendEvent::Quit)
                    }
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => {
                let pos = viewport.to_logical(mouse_event.column, mouse_event.row);
                let input = match mouse_event.kind {
                    MouseEventKind::Down(button) => InputEvent::Down {
                        button: pointer_button(button)?,
                        pos,
                    },
                    MouseEventKind::Up(button) => InputEvent::Up {
                        button: pointer_button(button)?,
                    },
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => InputEvent::Move { pos },
                    _ => return None,
                };
                Some(FrontendEvent::Pointer(input))
            }
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => None,
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Drain until the frame budget runs out
        let deadline = Instant::now() + self.frame_budget;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining).context("Failed to poll terminal events")? {
                break;
            }
            match event::read() {
                Ok(ev) => {
                    if let Some(frontend_event) = Self::convert_event(ev, &self.viewport) {
                        events.push(frontend_event);
                    }
                }
                Err(e) => tracing::warn!("Skipping unreadable terminal event: {}", e),
            }
        }

        Ok(events)
    }

    fn render(&mut self, session: &Session) -> Result<()> {
        let viewport = self.viewport;
        self.terminal
            .draw(|f| {
                let mut surface = BufferSurface::new(f.buffer_mut(), viewport);
                render_frame(session, &mut surface);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

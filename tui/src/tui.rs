//! TUI runner: ratatui event loop with terminal setup and cleanup.
//!
//! The [`Tui`] struct owns the ratatui terminal and the [`Session`]. It runs
//! the main loop: draw frames, poll for keyboard events, feed them to the
//! session, and expire status messages on each tick.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use log::info;
use ratatui::prelude::*;
use ratatui::Terminal;

use noteboard_core::KeyValueStore;

use crate::app::Key;
use crate::session::Session;
use crate::view;


/// The main TUI application runner.
///
/// Manages terminal raw mode, the alternate screen, the ratatui terminal
/// backend and the session being shown.
pub struct Tui<S: KeyValueStore> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    session: Session<S>,
    tick_rate: Duration,
    started: Instant,
}


impl<S: KeyValueStore> Tui<S> {
    /// Create a new TUI, entering raw mode and the alternate screen.
    ///
    /// If any step after enabling raw mode fails, the terminal is restored
    /// before the error is returned.
    pub fn new(session: Session<S>) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let terminal = restore_on_error(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                Terminal::new(CrosstermBackend::new(stdout))
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = terminal::disable_raw_mode();
            },
        )?;

        Ok(Self {
            terminal,
            session,
            tick_rate: Duration::from_millis(250),
            started: Instant::now(),
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the main event loop until quit is requested.
    pub fn run(&mut self) -> Result<(), io::Error> {
        info!(
            "event=tui_start module=tui notes={}",
            self.session.store().len()
        );
        loop {
            let size = self.terminal.size()?;
            self.session.set_board_width(size.width);

            let session = &self.session;
            self.terminal.draw(|frame| view::render_frame(frame, session))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    // Ctrl-C always quits immediately.
                    if key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    let key = crossterm_to_key(key_event.code, key_event.modifiers);
                    if self.session.handle_key(key, self.now_ms()) {
                        break;
                    }
                }
            }

            let now = self.now_ms();
            self.session.tick(now);
        }

        info!("event=tui_stop module=tui");
        self.shutdown()
    }

    /// Milliseconds since the TUI started.
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}


impl<S: KeyValueStore> Drop for Tui<S> {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}


/// Run `setup`; if it fails, run `restore` before handing back the error.
fn restore_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    let result = setup();
    if result.is_err() {
        restore();
    }
    result
}


// ---------------------------------------------------------------------------
// Key conversion
// ---------------------------------------------------------------------------

/// Convert a crossterm `KeyCode` + `KeyModifiers` into our domain `Key` type.
pub fn crossterm_to_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = code {
            return Key::Ctrl(ch);
        }
    }
    if modifiers.contains(KeyModifiers::ALT) {
        return Key::Char('\0');
    }
    match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Char('\0'), // unmapped keys produce a null char
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

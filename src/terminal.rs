//! Thin crossterm shell around the simulation core.
//!
//! Owns the terminal-global state (raw mode, alternate screen, cursor
//! visibility) and translates between key presses and [`InputEvent`]s on one
//! side, and [`TileView`] snapshots and colored glyphs on the other. The
//! core never depends on anything in this module.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::game::{Game, InputEvent, TileView};

/// Terminal front end. Raw mode and the alternate screen are entered on
/// construction and restored on drop, so the terminal comes back even when
/// the loop exits through an error.
pub struct TerminalShell {
    stdout: Stdout,
    poll_timeout: Duration,
}

impl TerminalShell {
    pub fn new(poll_ms: u64) -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(TerminalShell {
            stdout,
            poll_timeout: Duration::from_millis(poll_ms),
        })
    }

    /// Draw a full-grid frame from the game's render snapshot
    pub fn draw(&mut self, game: &Game) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        let width = game.grid.width as usize;
        for (i, tile) in game.render_snapshot().iter().enumerate() {
            let (glyph, color) = match tile {
                TileView::Cursor => ("X ", Color::Blue),
                TileView::Empty => ("0 ", Color::White),
                TileView::Obstacle => ("1 ", Color::Green),
                TileView::Enemy => ("E ", Color::Red),
            };
            queue!(self.stdout, SetForegroundColor(color), Print(glyph))?;
            if (i + 1) % width == 0 {
                queue!(self.stdout, Print("\r\n"))?;
            }
        }

        queue!(
            self.stdout,
            ResetColor,
            Print("\r\narrows: move  space: tower  r: spawn  q: quit\r\n")
        )?;
        self.stdout.flush()
    }

    /// Wait up to the configured timeout for one key event and translate it.
    /// The timeout doubles as the simulation tick clock; an expired wait
    /// yields [`InputEvent::NoOp`].
    pub fn poll_input(&self) -> io::Result<InputEvent> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                return Ok(match code {
                    KeyCode::Up => InputEvent::MoveCursor { dx: 0, dy: -1 },
                    KeyCode::Down => InputEvent::MoveCursor { dx: 0, dy: 1 },
                    KeyCode::Left => InputEvent::MoveCursor { dx: -1, dy: 0 },
                    KeyCode::Right => InputEvent::MoveCursor { dx: 1, dy: 0 },
                    KeyCode::Char(' ') => InputEvent::ToggleObstacle,
                    KeyCode::Char('r') => InputEvent::SpawnEnemy,
                    KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
                    _ => InputEvent::NoOp,
                });
            }
        }
        Ok(InputEvent::NoOp)
    }
}

impl Drop for TerminalShell {
    fn drop(&mut self) {
        // Restore the terminal no matter how the loop ended
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("failed to disable raw mode: {}", err);
        }
    }
}

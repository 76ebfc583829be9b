//! Terminal lifecycle: raw mode, alternate screen and event polling.
//!
//! The only place that touches the real terminal. Everything it produces is
//! plain crossterm events; mapping them to messages happens in `app`.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

pub type Backend = CrosstermBackend<Stdout>;

pub struct Tui {
    terminal: Terminal<Backend>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        io::stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor().context("Failed to hide cursor")?;
        self.terminal.clear().context("Failed to clear terminal")?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        io::stdout()
            .execute(LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    /// Wait up to `timeout` for the next terminal event.
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Size> {
        self.terminal.size().context("Failed to read terminal size")
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Best-effort terminal restoration for the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

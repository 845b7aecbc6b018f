use std::io::{self, Stdout};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::debug;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen, restored on drop and on panic.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        undo_on_error(execute!(stdout, EnterAlternateScreen), restore_terminal)
            .context("failed to enter alternate screen")?;
        let terminal = undo_on_error(
            Terminal::new(CrosstermBackend::new(stdout)),
            restore_terminal,
        )
        .context("failed to initialize terminal")?;
        install_panic_hook();
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(render)
            .context("failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
        debug!("terminal session restored");
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            previous(panic_info);
        }));
    });
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Runs `undo` when a setup step fails, before the session exists to do it on drop.
fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_step_restores_the_terminal() {
        let restored = Cell::new(false);
        let failed: Result<(), io::Error> = Err(io::Error::other("no alternate screen"));
        assert!(undo_on_error(failed, || restored.set(true)).is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_step_keeps_raw_mode() {
        let restored = Cell::new(false);
        let value = undo_on_error(Ok::<_, io::Error>(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}

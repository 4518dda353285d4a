//! Terminal setup and restoration
//!
//! Mouse capture is a process-wide registration: it must be released on
//! every exit path (normal quit, error, panic), otherwise the user's shell
//! keeps receiving mouse escape sequences.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use vitrine_core::prelude::*;

/// Initialize the terminal: alternate screen, raw mode, mouse capture
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;
    Ok(terminal)
}

/// Restore the terminal, releasing mouse capture first
pub fn restore() {
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
}

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

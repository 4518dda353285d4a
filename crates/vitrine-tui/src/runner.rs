//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use vitrine_app::config::Settings;
use vitrine_app::message::Message;
use vitrine_app::state::AppState;
use vitrine_app::{process, signals};
use vitrine_core::prelude::*;
use vitrine_store::StoreClient;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client = StoreClient::new(&settings.api.url, settings.api.timeout())?;
    info!("Using product endpoint: {}", client.endpoint());

    // Initialize terminal (alternate screen + mouse capture)
    let mut term = terminal::init()?;

    let mut state = AppState::new(settings);

    // Seed the column count from the current terminal size; resize events
    // keep it current from here on.
    if let Ok(size) = term.size() {
        state.handle_resize(size.width);
    }

    // Unified message channel (fetch task, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Issue the one product fetch of the session
    process::process_message(&mut state, Message::FetchRequested, &msg_tx, &client);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    // Restore terminal (releases mouse capture). An in-flight fetch is
    // discarded along with the channel receiver.
    terminal::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &StoreClient,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (fetch results, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}

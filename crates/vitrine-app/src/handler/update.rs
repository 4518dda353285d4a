//! Main update function - handles state transitions (TEA pattern)

use tracing::{error, info};

use crate::message::Message;
use crate::state::AppState;

use super::{keys, pointer, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Pointer(event) => {
            if let Some(msg) = pointer::handle_pointer(state, event) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Resized { width, .. } => {
            state.handle_resize(width);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchRequested => UpdateResult::action(UpdateAction::FetchProducts),

        Message::ProductsLoaded(response) => {
            info!(
                "Loaded {} products (HTTP {} {})",
                response.data.len(),
                response.status,
                response.status_text
            );
            state.set_loaded(response.data);
            UpdateResult::none()
        }

        Message::ProductsLoadFailed { error } => {
            error!("Product fetch failed: {}", error);
            state.set_failed(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Gallery Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(direction) => {
            state.move_focus(direction);
            UpdateResult::none()
        }

        Message::Activate { id } => {
            state.activate_product(id);
            UpdateResult::none()
        }

        Message::Swap {
            source_id,
            target_id,
        } => {
            state.swap_products(source_id, target_id);
            UpdateResult::none()
        }
    }
}

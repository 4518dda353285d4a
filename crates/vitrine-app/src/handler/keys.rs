//! Key event handlers for the gallery phases

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, GalleryPhase};
use vitrine_core::grid::Direction;

/// Convert key events to messages based on the current phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.phase {
        GalleryPhase::Ready => handle_key_gallery(state, key),
        // Loading and Failed views are non-interactive apart from quitting
        GalleryPhase::Loading | GalleryPhase::Failed { .. } => handle_key_inactive(key),
    }
}

fn handle_key_inactive(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_gallery(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Arrow navigation. The handler fires regardless of focus; with no
        // focused cell the move is a no-op by contract.
        InputKey::Up => Some(Message::Navigate(Direction::Up)),
        InputKey::Down => Some(Message::Navigate(Direction::Down)),
        InputKey::Left => Some(Message::Navigate(Direction::Left)),
        InputKey::Right => Some(Message::Navigate(Direction::Right)),

        // Keyboard click-equivalent: activate the focused product
        InputKey::Enter | InputKey::Char(' ') => state
            .focused_product()
            .map(|product| Message::Activate { id: product.id }),

        _ => None,
    }
}

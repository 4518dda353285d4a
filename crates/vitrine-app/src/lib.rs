//! vitrine-app - Application state and orchestration for Vitrine
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a `Message` enum, an `update()` function over `AppState`,
//! and an action layer that spawns the async product fetch.

pub mod actions;
pub mod config;
pub mod gallery_view_state;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pointer;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use gallery_view_state::GalleryViewState;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use pointer::PointerEvent;
pub use state::{AppState, DragState, GalleryPhase};

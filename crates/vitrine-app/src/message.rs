//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::pointer::PointerEvent;
use vitrine_core::grid::Direction;
use vitrine_core::product::{ProductApiResponse, ProductId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer (mouse) event from terminal
    Pointer(PointerEvent),

    /// Terminal was resized
    Resized { width: u16, height: u16 },

    /// Tick event for periodic updates (loading animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Fetch Messages
    // ─────────────────────────────────────────────────────────
    /// Kick off the product fetch (sent once at startup)
    FetchRequested,
    /// Product fetch completed
    ProductsLoaded(ProductApiResponse),
    /// Product fetch failed; `error` is already user-presentable
    ProductsLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Gallery Messages
    // ─────────────────────────────────────────────────────────
    /// Move the focused cell with an arrow key
    Navigate(Direction),
    /// Activate the product with the given id and focus its cell
    Activate { id: ProductId },
    /// Swap two products by id (drag gesture ended over a different item)
    Swap {
        source_id: ProductId,
        target_id: ProductId,
    },
}

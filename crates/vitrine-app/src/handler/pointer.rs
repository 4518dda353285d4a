//! Pointer event handling: click-vs-drag resolution
//!
//! A press remembers the cell under the pointer; a release resolves the
//! gesture. Down and up on the same cell with no movement in between is a
//! click (activate); a moved gesture released over a different cell is a
//! drag end (swap by ids). Everything else is discarded: release outside
//! the grid, release back over the source, or a click that slid off its
//! cell.

use crate::message::Message;
use crate::pointer::PointerEvent;
use crate::state::{AppState, DragState};

/// Convert pointer events to messages, tracking drag state along the way
pub fn handle_pointer(state: &mut AppState, event: PointerEvent) -> Option<Message> {
    if !state.phase.is_ready() {
        return None;
    }

    match event {
        PointerEvent::Down { x, y } => {
            if let Some(index) = state.gallery_view.cell_at(x, y) {
                if let Some(product) = state.products.get(index) {
                    state.drag = Some(DragState {
                        source_id: product.id,
                        source_index: index,
                        position: (x, y),
                        moved: false,
                    });
                }
            }
            None
        }

        PointerEvent::Drag { x, y } => {
            if let Some(drag) = state.drag.as_mut() {
                drag.position = (x, y);
                drag.moved = true;
            }
            None
        }

        PointerEvent::Up { x, y } => {
            let drag = state.drag.take()?;
            let index = state.gallery_view.cell_at(x, y)?;

            if !drag.moved {
                // Click: only resolves on the cell that was pressed.
                return (index == drag.source_index)
                    .then_some(Message::Activate { id: drag.source_id });
            }

            let target_id = state.products.get(index)?.id;
            (target_id != drag.source_id).then_some(Message::Swap {
                source_id: drag.source_id,
                target_id,
            })
        }
    }
}

//! Scrollable product grid widget
//!
//! Lays the collection out row-major across the current column count,
//! renders one [`ProductCard`] per visible cell, and records the resulting
//! geometry in [`GalleryViewState`] so the app layer can hit-test pointer
//! events against exactly what was drawn. The focused cell is scrolled
//! into view here, which is the terminal analog of moving input focus to
//! the focused grid cell.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use vitrine_app::gallery_view_state::GalleryViewState;
use vitrine_core::product::Product;

use crate::theme::styles;
use crate::widgets::ProductCard;

/// Minimum card height that can still show a border and one content row
const MIN_CARD_HEIGHT: u16 = 3;

/// The product grid (stateful: scroll offset + hit-test geometry)
pub struct ProductGrid<'a> {
    products: &'a [Product],
    columns: u16,
    card_height: u16,
    focus: Option<usize>,
    drag_source: Option<usize>,
    drop_target: Option<usize>,
}

impl<'a> ProductGrid<'a> {
    pub fn new(products: &'a [Product], columns: u16) -> Self {
        Self {
            products,
            columns: columns.max(1),
            card_height: 8,
            focus: None,
            drag_source: None,
            drop_target: None,
        }
    }

    pub fn card_height(mut self, card_height: u16) -> Self {
        self.card_height = card_height.max(MIN_CARD_HEIGHT);
        self
    }

    pub fn focus(mut self, focus: Option<usize>) -> Self {
        self.focus = focus;
        self
    }

    /// Highlight an in-flight drag: its source cell and the hovered target
    pub fn drag(mut self, source: Option<usize>, target: Option<usize>) -> Self {
        self.drag_source = source;
        self.drop_target = target;
        self
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let message = "No products";
        let x = area.x + area.width.saturating_sub(message.len() as u16) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, message, styles::text_muted());
    }
}

impl StatefulWidget for ProductGrid<'_> {
    type State = GalleryViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let columns = self.columns as usize;
        let cell_width = area.width / self.columns;
        let total_rows = self.products.len().div_ceil(columns);
        let visible_rows = (area.height / self.card_height).max(1) as usize;

        // Update state with content dimensions and last-rendered geometry
        state.total_rows = total_rows;
        state.visible_rows = visible_rows;
        state.origin_x = area.x;
        state.origin_y = area.y;
        state.cell_width = cell_width;
        state.cell_height = self.card_height;
        state.columns = self.columns;
        state.item_count = self.products.len();

        if self.products.is_empty() {
            self.render_empty(area, buf);
            return;
        }
        if cell_width == 0 {
            return;
        }

        state.clamp_offset();

        // Keep the focused cell on screen
        if let Some(focus) = self.focus {
            state.ensure_row_visible(focus / columns);
        }

        for screen_row in 0..visible_rows {
            let row = state.row_offset + screen_row;
            for col in 0..columns {
                let index = row * columns + col;
                if index >= self.products.len() {
                    break;
                }

                let cell = Rect::new(
                    area.x + col as u16 * cell_width,
                    area.y + screen_row as u16 * self.card_height,
                    cell_width,
                    self.card_height,
                )
                .intersection(area);
                if cell.is_empty() {
                    continue;
                }

                ProductCard::new(&self.products[index])
                    .focused(self.focus == Some(index))
                    .drag_source(self.drag_source == Some(index))
                    .drop_target(self.drop_target == Some(index))
                    .render(cell, buf);
            }
        }

        // Scrollbar only when the collection overflows the viewport
        if total_rows > visible_rows {
            let mut scrollbar_state =
                ScrollbarState::new(total_rows.saturating_sub(visible_rows)).position(state.row_offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight).render(
                area,
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

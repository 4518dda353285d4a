//! Bottom status bar: keybinding hints and the focused product

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use vitrine_app::{AppState, GalleryPhase};

use crate::theme::styles;

/// Single-row status bar
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.phase {
            GalleryPhase::Loading => " fetching products · q quit",
            GalleryPhase::Failed { .. } => " q quit",
            GalleryPhase::Ready => " ↑↓←→ move · enter activate · drag to swap · q quit",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.state.settings.ui.show_hints {
            let hints = Line::from(Span::styled(self.hints(), styles::text_muted()));
            buf.set_line(area.x, area.y, &hints, area.width);
        }

        // Right side: the focused product, when there is one
        if let Some(product) = self.state.focused_product() {
            let info = format!("{} — ${:.2} ", product.title, product.price);
            let info_width = info.width() as u16;
            if info_width < area.width {
                let line = Line::from(Span::styled(info, styles::text_secondary()));
                buf.set_line(area.right() - info_width, area.y, &line, info_width);
            }
        }
    }
}

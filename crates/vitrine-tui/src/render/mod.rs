//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use vitrine_app::{AppState, GalleryPhase};
use vitrine_core::error::GENERIC_ERROR_MESSAGE;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{Header, ProductGrid, StatusBar};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it only mutates widget state that
/// tracks rendering info (scroll offset and grid geometry).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        Header::new(&state.phase, state.products.len(), state.columns),
        areas.header,
    );

    match &state.phase {
        GalleryPhase::Loading => render_loading(frame, state.loading_frame, areas.gallery),

        GalleryPhase::Failed { message } => render_error(frame, message, areas.gallery),

        GalleryPhase::Ready => {
            let drag_source = state.drag.as_ref().map(|d| d.source_index);
            let drop_target = state.drag_hover();

            let grid = ProductGrid::new(&state.products, state.columns)
                .card_height(state.settings.ui.card_height)
                .focus(state.focus)
                .drag(drag_source, drop_target);
            frame.render_stateful_widget(grid, areas.gallery, &mut state.gallery_view);
        }
    }

    frame.render_widget(StatusBar::new(state), areas.status);
}

/// Centered spinner while the fetch is in flight
fn render_loading(frame: &mut Frame, loading_frame: usize, area: Rect) {
    if area.height == 0 {
        return;
    }
    let spinner = SPINNER_FRAMES[loading_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(palette::STATUS_YELLOW)),
        Span::styled(" Fetching products…", styles::text_secondary()),
    ]);

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(paragraph, row);
}

/// Terminal error view: there is no retry, only restart
fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    if area.height == 0 {
        return;
    }
    let message = if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE
    } else {
        message
    };

    let error_line = Line::from(Span::styled(
        format!("Error: {}", message),
        Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    ));
    let hint_line = Line::from(Span::styled(
        "The gallery could not be loaded. Restart to try again.",
        styles::text_muted(),
    ));

    let paragraph = Paragraph::new(vec![error_line, hint_line]).alignment(Alignment::Center);
    let rows = Rect::new(
        area.x,
        area.y + (area.height / 2).saturating_sub(1),
        area.width,
        2.min(area.height),
    );
    frame.render_widget(paragraph, rows);
}

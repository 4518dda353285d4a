//! Semantic style builders for the gallery theme

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use vitrine_app::GalleryPhase;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_focused() -> Style {
    Style::default()
        .fg(palette::BORDER_ACTIVE)
        .add_modifier(Modifier::BOLD)
}

pub fn border_drag_source() -> Style {
    Style::default().fg(palette::BORDER_DRAG)
}

pub fn border_drop_target() -> Style {
    Style::default()
        .fg(palette::BORDER_DROP)
        .add_modifier(Modifier::BOLD)
}

// --- Blocks ---

/// Rounded bordered block used by the header and cards
pub fn rounded_block(border_style: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

// --- Phase indicator ---

/// Status dot and style for the header phase indicator
pub fn phase_indicator(phase: &GalleryPhase) -> (&'static str, Style) {
    match phase {
        GalleryPhase::Loading => ("◌", Style::default().fg(palette::STATUS_YELLOW)),
        GalleryPhase::Ready => ("●", Style::default().fg(palette::STATUS_GREEN)),
        GalleryPhase::Failed { .. } => ("✗", Style::default().fg(palette::STATUS_RED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_indicator_symbols() {
        assert_eq!(phase_indicator(&GalleryPhase::Loading).0, "◌");
        assert_eq!(phase_indicator(&GalleryPhase::Ready).0, "●");
        assert_eq!(
            phase_indicator(&GalleryPhase::Failed {
                message: "x".to_string()
            })
            .0,
            "✗"
        );
    }
}

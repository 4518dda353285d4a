//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use vitrine_app::GalleryPhase;

use crate::theme::{palette, styles};

/// Main header showing app title, phase indicator, and collection stats
pub struct Header<'a> {
    phase: &'a GalleryPhase,
    product_count: usize,
    columns: u16,
}

impl<'a> Header<'a> {
    pub fn new(phase: &'a GalleryPhase, product_count: usize, columns: u16) -> Self {
        Self {
            phase,
            product_count,
            columns,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::rounded_block(styles::border_inactive()).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = styles::phase_indicator(self.phase);

        let title = Line::from(vec![
            Span::styled(format!(" {} ", status_icon), status_style),
            Span::styled(
                "Vitrine",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · product gallery", styles::text_secondary()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right-aligned stats, only once the collection is loaded
        if self.phase.is_ready() {
            let stats = format!(
                "{} items · {} col ",
                self.product_count, self.columns
            );
            let stats_width = stats.width() as u16;
            if stats_width < inner.width {
                let line = Line::from(Span::styled(stats, styles::text_secondary()));
                buf.set_line(inner.right() - stats_width, inner.y, &line, stats_width);
            }
        }
    }
}

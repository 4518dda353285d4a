//! A single product card
//!
//! Cards mirror the gallery's activation presentation: inactive products
//! render dimmed with a "CLICK TO ACTIVATE" overlay across the image band
//! and no title; active products show their title, price, rating, and
//! category. The focused cell gets a highlighted outline, and an in-flight
//! drag recolors the source and the hovered drop target.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use vitrine_core::product::Product;

use crate::theme::{palette, styles};

const ACTIVATE_OVERLAY: &str = "CLICK TO ACTIVATE";

/// One product cell in the gallery grid
pub struct ProductCard<'a> {
    product: &'a Product,
    focused: bool,
    drag_source: bool,
    drop_target: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            focused: false,
            drag_source: false,
            drop_target: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn drag_source(mut self, drag_source: bool) -> Self {
        self.drag_source = drag_source;
        self
    }

    pub fn drop_target(mut self, drop_target: bool) -> Self {
        self.drop_target = drop_target;
        self
    }

    fn border_style(&self) -> Style {
        if self.drop_target {
            styles::border_drop_target()
        } else if self.drag_source {
            styles::border_drag_source()
        } else if self.focused {
            styles::border_focused()
        } else {
            styles::border_inactive()
        }
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::rounded_block(self.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Split the inner area into an image band and up to three text rows.
        let text_rows = match inner.height {
            0..=1 => 0,
            2..=4 => 1,
            _ => 3,
        };
        let image_rows = inner.height - text_rows;

        let fill_style = Style::default().fg(palette::IMAGE_FILL);
        for row in 0..image_rows {
            let texture = "▒".repeat(inner.width as usize);
            buf.set_string(inner.x, inner.y + row, texture, fill_style);
        }

        if !self.product.active {
            // Dimmed card: overlay across the image band, nothing else.
            if image_rows > 0 {
                let overlay = fit_to_width(ACTIVATE_OVERLAY, inner.width as usize);
                let overlay_width = overlay.width() as u16;
                let x = inner.x + inner.width.saturating_sub(overlay_width) / 2;
                let y = inner.y + image_rows / 2;
                buf.set_string(
                    x,
                    y,
                    overlay,
                    Style::default()
                        .fg(palette::OVERLAY_FG)
                        .add_modifier(Modifier::BOLD),
                );
            }
            return;
        }

        // Active card: title, price + rating, category.
        let mut y = inner.y + image_rows;
        if text_rows >= 1 {
            let title = fit_to_width(&self.product.title, inner.width as usize);
            buf.set_string(
                inner.x,
                y,
                title,
                styles::text_primary().add_modifier(Modifier::BOLD),
            );
            y += 1;
        }
        if text_rows >= 3 {
            let price_line = Line::from(vec![
                Span::styled(
                    format!("${:.2}", self.product.price),
                    Style::default().fg(palette::PRICE),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(
                        "★ {:.1} ({})",
                        self.product.rating.rate, self.product.rating.count
                    ),
                    Style::default().fg(palette::RATING),
                ),
            ]);
            buf.set_line(inner.x, y, &price_line, inner.width);
            y += 1;

            let category = fit_to_width(&self.product.category, inner.width as usize);
            buf.set_string(inner.x, y, category, styles::text_muted());
        }
    }
}

/// Truncate to a display width, appending an ellipsis when cut short.
fn fit_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::product::Rating;

    fn product(active: bool) -> Product {
        Product {
            id: 1,
            title: "Fjallraven Backpack".to_string(),
            price: 109.95,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: "https://example.com/1.jpg".to_string(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
            active,
        }
    }

    fn render_to_string(card: ProductCard, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);

        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_inactive_card_shows_overlay_and_no_title() {
        let p = product(false);
        let rendered = render_to_string(ProductCard::new(&p), 30, 8);
        assert!(rendered.contains("CLICK TO ACTIVATE"));
        assert!(!rendered.contains("Fjallraven"));
    }

    #[test]
    fn test_active_card_shows_details() {
        let p = product(true);
        let rendered = render_to_string(ProductCard::new(&p), 30, 8);
        assert!(rendered.contains("Fjallraven Backpack"));
        assert!(rendered.contains("$109.95"));
        assert!(rendered.contains("★ 3.9 (120)"));
        assert!(rendered.contains("men's clothing"));
        assert!(!rendered.contains("CLICK TO ACTIVATE"));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let mut p = product(true);
        p.title = "An Exceptionally Long Product Title That Cannot Fit".to_string();
        let rendered = render_to_string(ProductCard::new(&p), 20, 8);
        assert!(rendered.contains('…'));
    }

    #[test]
    fn test_tiny_card_renders_without_panic() {
        let p = product(false);
        let rendered = render_to_string(ProductCard::new(&p), 4, 3);
        assert!(!rendered.is_empty());
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("short", 10), "short");
        assert_eq!(fit_to_width("exactly-10", 10), "exactly-10");
        let cut = fit_to_width("definitely too long", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }
}

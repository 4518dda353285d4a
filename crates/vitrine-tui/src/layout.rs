//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + phase indicator)
    pub header: Rect,

    /// Main content area (product grid, loading spinner, or error view)
    pub gallery: Rect,

    /// Bottom status bar (keybinding hints + focused product)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(3), // Header (bordered, single content row)
        Constraint::Min(3),    // Gallery
        Constraint::Length(1), // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        gallery: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.gallery.height, 20); // 24 - 3 - 1
        assert_eq!(layout.gallery.y, 3);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.gallery.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_layout_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let layout = create(area);

        // Header and status keep their fixed sizes; the gallery absorbs
        // whatever remains.
        assert_eq!(layout.header.height + layout.gallery.height + layout.status.height, 5);
    }
}

//! Render tests over a test backend

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use vitrine_app::{AppState, Settings};
use vitrine_core::product::{Product, Rating};

use super::view;

fn product(id: u64, active: bool) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        price: id as f64 * 10.0,
        description: String::new(),
        category: "test".to_string(),
        image: String::new(),
        rating: Rating::default(),
        active,
    }
}

fn draw(state: &mut AppState, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    let mut out = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            out.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_loading_view() {
    let mut state = AppState::new(Settings::default());
    let rendered = buffer_to_string(&draw(&mut state, 80, 24));

    assert!(rendered.contains("Vitrine"));
    assert!(rendered.contains("Fetching products"));
}

#[test]
fn test_failed_view_shows_message() {
    let mut state = AppState::new(Settings::default());
    state.set_failed("connection refused".to_string());

    let rendered = buffer_to_string(&draw(&mut state, 80, 24));
    assert!(rendered.contains("Error: connection refused"));
    assert!(rendered.contains("Restart to try again"));
}

#[test]
fn test_failed_view_falls_back_to_generic_message() {
    let mut state = AppState::new(Settings::default());
    state.set_failed(String::new());

    let rendered = buffer_to_string(&draw(&mut state, 80, 24));
    assert!(rendered.contains("An unknown error occurred"));
}

#[test]
fn test_ready_view_renders_grid_and_status() {
    let mut state = AppState::new(Settings::default());
    state.set_loaded(vec![product(1, true), product(2, false)]);
    state.columns = 2;

    let rendered = buffer_to_string(&draw(&mut state, 80, 24));
    assert!(rendered.contains("Product 1"));
    assert!(rendered.contains("CLICK TO ACTIVATE"));
    assert!(rendered.contains("2 items"));
    assert!(rendered.contains("drag to swap"));
}

#[test]
fn test_ready_view_updates_hit_test_geometry() {
    let mut state = AppState::new(Settings::default());
    state.set_loaded((1..=4).map(|id| product(id, false)).collect());
    state.columns = 2;

    draw(&mut state, 80, 24);

    assert_eq!(state.gallery_view.columns, 2);
    assert_eq!(state.gallery_view.item_count, 4);
    assert!(state.gallery_view.cell_width > 0);
    // The gallery area starts below the 3-row header.
    assert_eq!(state.gallery_view.origin_y, 3);
}

#[test]
fn test_render_survives_tiny_terminal() {
    let mut state = AppState::new(Settings::default());
    state.set_loaded(vec![product(1, false)]);

    // Should not panic on degenerate sizes.
    draw(&mut state, 10, 4);
    draw(&mut state, 4, 2);
}

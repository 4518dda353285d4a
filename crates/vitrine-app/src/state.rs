//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::gallery_view_state::GalleryViewState;
use vitrine_core::grid::{self, Direction};
use vitrine_core::product::{Product, ProductId};
use vitrine_core::{catalog, column_count, logical_width};

/// Lifecycle phase of the gallery view.
///
/// `Loading` is the initial phase, entered when the fetch is issued.
/// `Failed` is terminal for the session: there is no retry path short of
/// restarting the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryPhase {
    /// Waiting for the product fetch to complete
    #[default]
    Loading,

    /// Products loaded, gallery is interactive
    Ready,

    /// Fetch failed; `message` is shown in the error view
    Failed { message: String },
}

impl GalleryPhase {
    /// Short human-readable label used in the header indicator.
    pub fn label(&self) -> &'static str {
        match self {
            GalleryPhase::Loading => "Loading",
            GalleryPhase::Ready => "Ready",
            GalleryPhase::Failed { .. } => "Failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, GalleryPhase::Ready)
    }
}

/// An in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Id of the product under the initial press
    pub source_id: ProductId,
    /// Index of the product under the initial press
    pub source_index: usize,
    /// Most recent pointer position (terminal cells)
    pub position: (u16, u16),
    /// Whether the pointer moved since the press; distinguishes a drag
    /// from a click
    pub moved: bool,
}

/// Top-level application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded settings
    pub settings: Settings,

    /// Gallery lifecycle phase
    pub phase: GalleryPhase,

    /// The product collection, order significant. Replaced wholesale on
    /// every change; never mutated in place.
    pub products: Vec<Product>,

    /// Focused cell, as a position in `products`. Starts as `None`, set by
    /// click or arrow navigation, never cleared in normal flow. Positional:
    /// a swap does not remap it to follow the moved product.
    pub focus: Option<usize>,

    /// Current grid column count, derived from the terminal width
    pub columns: u16,

    /// In-progress drag gesture, if any
    pub drag: Option<DragState>,

    /// Grid scroll position and last-rendered geometry
    pub gallery_view: GalleryViewState,

    /// Animation frame for the loading spinner
    pub loading_frame: usize,

    should_quit: bool,
}

impl AppState {
    /// Create the initial state: `Loading`, empty collection, no focus.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            phase: GalleryPhase::Loading,
            products: Vec::new(),
            focus: None,
            columns: 1,
            drag: None,
            gallery_view: GalleryViewState::new(),
            loading_frame: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────────────
    // Fetch transitions
    // ─────────────────────────────────────────────────────────────────

    /// Enter `Ready` with a freshly fetched collection.
    ///
    /// Activation is client-side state: every product starts inactive
    /// regardless of what the payload carried.
    pub fn set_loaded(&mut self, mut products: Vec<Product>) {
        for product in &mut products {
            product.active = false;
        }
        self.products = products;
        self.phase = GalleryPhase::Ready;
    }

    /// Enter `Failed` with a user-presentable message.
    pub fn set_failed(&mut self, message: String) {
        self.products = Vec::new();
        self.focus = None;
        self.phase = GalleryPhase::Failed { message };
    }

    // ─────────────────────────────────────────────────────────────────
    // Gallery transitions
    // ─────────────────────────────────────────────────────────────────

    /// Activate the product with `id` and focus its cell.
    pub fn activate_product(&mut self, id: ProductId) {
        if !self.phase.is_ready() {
            return;
        }
        self.products = catalog::activate(&self.products, id);
        if let Some(index) = self.products.iter().position(|p| p.id == id) {
            self.focus = Some(index);
        }
    }

    /// Move the focused cell with an arrow key. Ignored while nothing is
    /// focused.
    pub fn move_focus(&mut self, direction: Direction) {
        if !self.phase.is_ready() {
            return;
        }
        self.focus = grid::next_index(
            self.focus,
            direction,
            self.columns as usize,
            self.products.len(),
        );
    }

    /// Swap two products by id. The focus index is intentionally left
    /// untouched: it tracks a position, not a product.
    pub fn swap_products(&mut self, source_id: ProductId, target_id: ProductId) {
        if !self.phase.is_ready() {
            return;
        }
        self.products = catalog::swap(&self.products, source_id, target_id);
    }

    /// Recompute the column count from a new terminal width. Resize alters
    /// no other state.
    pub fn handle_resize(&mut self, terminal_cols: u16) {
        self.columns = column_count(logical_width(terminal_cols));
    }

    /// Advance the loading spinner. Only meaningful while `Loading`.
    pub fn tick(&mut self) {
        if self.phase == GalleryPhase::Loading {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    /// The currently focused product, if any.
    pub fn focused_product(&self) -> Option<&Product> {
        self.focus.and_then(|index| self.products.get(index))
    }

    /// The grid row of the focused cell, for scroll-into-view.
    pub fn focused_row(&self) -> Option<usize> {
        let focus = self.focus?;
        Some(focus / self.columns.max(1) as usize)
    }

    /// Index of the cell the active drag is currently hovering, if the
    /// pointer is over a cell other than the drag source.
    pub fn drag_hover(&self) -> Option<usize> {
        let drag = self.drag.as_ref()?;
        if !drag.moved {
            return None;
        }
        let (x, y) = drag.position;
        let index = self.gallery_view.cell_at(x, y)?;
        (index != drag.source_index).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::product::Rating;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 9.99,
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
            rating: Rating::default(),
            active: false,
        }
    }

    fn ready_state(count: u64) -> AppState {
        let mut state = AppState::new(Settings::default());
        state.set_loaded((1..=count).map(product).collect());
        state.columns = 2;
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.phase, GalleryPhase::Loading);
        assert!(state.products.is_empty());
        assert_eq!(state.focus, None);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_set_loaded_resets_active_flags() {
        let mut state = AppState::new(Settings::default());
        let mut products = vec![product(1), product(2)];
        products[0].active = true; // payload claims an active product

        state.set_loaded(products);
        assert_eq!(state.phase, GalleryPhase::Ready);
        assert!(state.products.iter().all(|p| !p.active));
    }

    #[test]
    fn test_set_failed_clears_collection() {
        let mut state = ready_state(4);
        state.focus = Some(2);

        state.set_failed("boom".to_string());
        assert_eq!(
            state.phase,
            GalleryPhase::Failed {
                message: "boom".to_string()
            }
        );
        assert!(state.products.is_empty());
        assert_eq!(state.focus, None);
    }

    #[test]
    fn test_activate_sets_focus_to_position() {
        let mut state = ready_state(4);
        state.activate_product(2);

        assert_eq!(state.focus, Some(1));
        assert!(state.products[1].active);
        assert!(!state.products[0].active);
    }

    #[test]
    fn test_activate_missing_id_leaves_focus() {
        let mut state = ready_state(4);
        state.activate_product(99);
        assert_eq!(state.focus, None);
    }

    #[test]
    fn test_move_focus_requires_focus() {
        let mut state = ready_state(4);
        state.move_focus(Direction::Down);
        assert_eq!(state.focus, None);
    }

    #[test]
    fn test_swap_does_not_remap_focus() {
        let mut state = ready_state(4);
        state.focus = Some(0);

        state.swap_products(1, 4);

        // The product at the focused position changed; focus did not follow.
        assert_eq!(state.focus, Some(0));
        assert_eq!(state.products[0].id, 4);
    }

    #[test]
    fn test_resize_recomputes_columns_only() {
        let mut state = ready_state(4);
        state.focus = Some(1);
        let products_before = state.products.clone();

        state.handle_resize(120);
        assert_eq!(state.columns, 4);
        assert_eq!(state.focus, Some(1));
        assert_eq!(state.products, products_before);

        state.handle_resize(60);
        assert_eq!(state.columns, 1);
    }

    #[test]
    fn test_tick_only_animates_while_loading() {
        let mut state = AppState::new(Settings::default());
        state.tick();
        assert_eq!(state.loading_frame, 1);

        state.set_loaded(vec![product(1)]);
        state.tick();
        assert_eq!(state.loading_frame, 1);
    }

    #[test]
    fn test_focused_row() {
        let mut state = ready_state(6);
        state.focus = Some(5);
        assert_eq!(state.focused_row(), Some(2));
        state.focus = None;
        assert_eq!(state.focused_row(), None);
    }

    #[test]
    fn test_transitions_ignored_outside_ready() {
        let mut state = AppState::new(Settings::default());
        state.activate_product(1);
        state.move_focus(Direction::Down);
        state.swap_products(1, 2);
        assert_eq!(state.phase, GalleryPhase::Loading);
        assert!(state.products.is_empty());
    }
}

//! Custom widget components

mod header;
mod product_card;
mod product_grid;
mod status_bar;

pub use header::Header;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use status_bar::StatusBar;

// Re-export state types from app layer (used by render/)
pub use vitrine_app::gallery_view_state::GalleryViewState;

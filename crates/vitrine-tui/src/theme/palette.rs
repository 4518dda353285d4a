//! Color palette for the gallery theme

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive card borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused cell outline
pub const BORDER_DRAG: Color = Color::Magenta; // Cell being dragged
pub const BORDER_DROP: Color = Color::Yellow; // Drop target under the pointer

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Titles on active cards
pub const TEXT_SECONDARY: Color = Color::Gray; // Category, counts
pub const TEXT_MUTED: Color = Color::DarkGray; // Dimmed/inactive content

// --- Accents ---
pub const ACCENT: Color = Color::Cyan; // Header title
pub const PRICE: Color = Color::Green; // Price tags
pub const RATING: Color = Color::Yellow; // Rating stars

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Ready
pub const STATUS_RED: Color = Color::Red; // Failed
pub const STATUS_YELLOW: Color = Color::Yellow; // Loading

// --- Card image band ---
pub const IMAGE_FILL: Color = Color::DarkGray; // Placeholder texture
pub const OVERLAY_FG: Color = Color::White; // "CLICK TO ACTIVATE" overlay

//! vitrine-tui - Terminal UI for Vitrine
//!
//! This crate provides the ratatui-based terminal interface: terminal and
//! mouse-capture lifecycle, event polling, the render (view) function, and
//! the main event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;

//! # vitrine-core - Core Domain Types
//!
//! Foundation crate for Vitrine. Provides the product model, the pure
//! gallery operations (activation, reordering, grid navigation), error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`product`)
//! - [`Product`] - A catalog entry with identity, display metadata, and an
//!   activation flag
//! - [`Rating`] - Average rating and vote count for a product
//! - [`ProductApiResponse`] - Response envelope from the product endpoint
//!
//! ### Catalog Operations (`catalog`)
//! - [`activate()`] - Mark one product active, leaving all others untouched
//! - [`swap()`] - Exchange the positions of two products by id
//!
//! ### Grid Navigation (`grid`)
//! - [`Direction`] - Arrow-key navigation direction
//! - [`next_index()`] - Compute the next focused cell for a direction
//! - [`column_count()`] - Column count for a given layout width
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum covering transport and infrastructure
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use vitrine_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod grid;
pub mod logging;
pub mod product;

/// Prelude for common imports used throughout all Vitrine crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{activate, swap};
pub use error::{Error, Result};
pub use grid::{column_count, logical_width, next_index, Direction, CELL_WIDTH_PX};
pub use product::{Product, ProductApiResponse, ProductId, Rating, ResponseHeaders};

//! Pure operations over the product collection.
//!
//! Every operation returns a fresh collection and leaves its input
//! untouched, so the view layer can detect changes by comparison. The
//! collection's order is significant: it drives grid position and swap
//! semantics.

use crate::product::{Product, ProductId};

/// Mark the product with `id` as active.
///
/// The first element whose id matches gets `active = true`; every other
/// element is carried over unchanged. Already-active elements are never
/// cleared. If `id` is absent the result is element-wise equal to the
/// input.
pub fn activate(products: &[Product], id: ProductId) -> Vec<Product> {
    let mut updated = products.to_vec();
    if let Some(product) = updated.iter_mut().find(|p| p.id == id) {
        product.active = true;
    }
    updated
}

/// Exchange the positions of the products with ids `source` and `target`.
///
/// This is a two-element transposition: every other position is left
/// untouched (not the insert-shift semantics of typical list reordering).
/// If the ids are equal, or either id is absent, the result is element-wise
/// equal to the input.
pub fn swap(products: &[Product], source: ProductId, target: ProductId) -> Vec<Product> {
    let mut updated = products.to_vec();

    if source == target {
        return updated;
    }

    let source_index = updated.iter().position(|p| p.id == source);
    let target_index = updated.iter().position(|p| p.id == target);

    if let (Some(a), Some(b)) = (source_index, target_index) {
        updated.swap(a, b);
    }
    updated
}

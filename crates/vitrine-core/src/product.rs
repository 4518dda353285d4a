//! Product model and API response envelope

use serde::{Deserialize, Serialize};

/// Unique, stable product identifier
pub type ProductId = u64;

/// Average rating and vote count for a product
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog entry with identity, display metadata, and an activation flag.
///
/// `active` is never delivered by the API; it defaults to `false` on load
/// and is only ever set client-side.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// URI of the product image
    pub image: String,
    pub rating: Rating,
    #[serde(default)]
    pub active: bool,
}

/// Transport metadata attached to the fetched product list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ResponseHeaders {
    #[serde(rename = "content-type")]
    pub content_type: String,
}

/// Response envelope from the product endpoint.
///
/// Only `data` is consumed by the gallery; status and headers are carried
/// for logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductApiResponse {
    pub data: Vec<Product>,
    pub status: u16,
    pub status_text: String,
    pub headers: ResponseHeaders,
}

//! vitrine-store - Product API client for Vitrine
//!
//! A thin HTTP layer: one GET against the configured product endpoint,
//! returning the response envelope or a transport-class error. No retries
//! and no response caching; the app decides what a failure means.

pub mod client;

pub use client::{parse_products, StoreClient};

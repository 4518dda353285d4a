//! HTTP client for the product endpoint

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use vitrine_core::error::{Error, Result};
use vitrine_core::product::{Product, ProductApiResponse, ResponseHeaders};

/// Client for fetching the product list.
///
/// Cheap to clone (uses `Arc` internally) so a fetch task can own a copy
/// while the event loop keeps another.
#[derive(Clone, Debug)]
pub struct StoreClient {
    inner: Arc<StoreClientInner>,
}

#[derive(Debug)]
struct StoreClientInner {
    endpoint: Url,
    http_client: Client,
    timeout: Duration,
}

impl StoreClient {
    /// Create a client for the given product endpoint.
    ///
    /// Fails with a configuration error when the endpoint is not a valid
    /// absolute URL.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::config(format!("Invalid product endpoint '{}': {}", endpoint, e)))?;

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(StoreClientInner {
                endpoint,
                http_client,
                timeout,
            }),
        })
    }

    /// The configured product endpoint.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint.as_str()
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Fetch the full product list.
    ///
    /// Issues a single GET; network failures and non-2xx statuses both
    /// surface as transport-class errors. On success the response envelope
    /// carries the parsed products plus status and content-type metadata.
    pub async fn fetch_products(&self) -> Result<ProductApiResponse> {
        debug!("GET {}", self.inner.endpoint);

        let response = self
            .inner
            .http_client
            .get(self.inner.endpoint.clone())
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or_default()
            .to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), body));
        }

        let data = parse_products(&body)?;
        info!("Fetched {} products from {}", data.len(), self.inner.endpoint);

        Ok(ProductApiResponse {
            data,
            status: status.as_u16(),
            status_text,
            headers: ResponseHeaders { content_type },
        })
    }
}

/// Parse a JSON product-array body.
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(body)?)
}

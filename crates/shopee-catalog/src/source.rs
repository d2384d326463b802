//! # Catalog Source
//!
//! The one asynchronous boundary of the storefront: fetching the product
//! list.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HttpCatalogSource::fetch_products()                                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  GET <endpoint> ── transport failure ──► CatalogError::Request          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  status 2xx? ───── no ─────────────────► CatalogError::HttpStatus       │
//! │        │                                 "HTTP error! status: 500"      │
//! │        ▼                                                                │
//! │  decode Vec<Product> ── bad body ──────► CatalogError::Decode           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Ok(products)  (no validation, no retry)                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;

use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use shopee_core::Product;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Anything that can produce the product catalog.
pub trait CatalogSource {
    fn fetch_products(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;
}

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    /// Builds a source from validated configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;

        Ok(HttpCatalogSource {
            client,
            endpoint: config.endpoint_url()?,
        })
    }

    /// Builds a source for an endpoint with no timeout.
    pub fn with_endpoint(endpoint: Url) -> Self {
        HttpCatalogSource {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalogSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog endpoint returned an error status");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let products: Vec<Product> = response.json().await?;
        debug!(count = products.len(), "Catalog payload decoded");
        Ok(products)
    }
}

//! # Catalog Error Types
//!
//! Error types for the catalog fetch and for configuration loading.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Transport    │  │    Response     │  │    Configuration        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Request        │  │  HttpStatus     │  │  InvalidConfig          │ │
//! │  │                 │  │  Decode         │  │  InvalidUrl             │ │
//! │  │                 │  │                 │  │  ConfigLoadFailed       │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Transport and response errors end up as the catalog store's error     │
//! │  string. Configuration errors stop bootstrap before any fetch.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Fetch Errors
    // =========================================================================
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Failed to fetch products: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The body was not a JSON product array.
    #[error("Failed to decode products: {0}")]
    Decode(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogError::HttpStatus {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// Returns true if this error came from the fetch itself, as opposed to
    /// configuration.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Request(_) | CatalogError::HttpStatus { .. } | CatalogError::Decode(_)
        )
    }
}

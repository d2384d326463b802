//! # API Error Type
//!
//! Unified error type for storefront intents.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View Layer                  Intent Layer                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  dispatch(add_to_cart(id))                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Intent Function                                                 │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown product? ─── ApiError::not_found ─────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Fetch failed? ─── CatalogError::HttpStatus ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store operations themselves never fail: removing or adjusting an absent
//! product is a no-op. Errors only come from lookups, input parsing, and
//! the catalog fetch.

use serde::Serialize;
use shopee_catalog::CatalogError;
use shopee_core::CoreError;

/// API error returned from intents.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FETCH_FAILED",
///   "message": "HTTP error! status: 500"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product is not in the catalog, or not in the wishlist
    NotFound,

    /// Input could not be parsed (sort key, exchange rate)
    ValidationError,

    /// The catalog fetch was rejected
    FetchFailed,

    /// Configuration could not be loaded or is invalid
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if err.is_fetch_error() {
            ApiError::new(ErrorCode::FetchFailed, err.to_string())
        } else {
            tracing::error!("Catalog configuration error: {}", err);
            ApiError::new(ErrorCode::ConfigError, err.to_string())
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_screaming_code() {
        let err = ApiError::not_found("Product", "42");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }

    #[test]
    fn test_fetch_errors_map_to_fetch_failed() {
        let err = ApiError::from(CatalogError::HttpStatus { status: 500 });
        assert_eq!(err.code, ErrorCode::FetchFailed);
        assert_eq!(err.message, "HTTP error! status: 500");
    }

    #[test]
    fn test_config_errors_map_to_config_error() {
        let err = ApiError::from(CatalogError::InvalidConfig("rate_bps must be positive".into()));
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_core_errors_are_validation() {
        let err = ApiError::from(CoreError::UnknownSortOrder("newest".into()));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("newest"));
    }
}

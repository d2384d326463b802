//! # Error Types
//!
//! Domain-specific error types for shopee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopee-core errors (this file)                                        │
//! │  └── CoreError        - Parsing of view/currency settings              │
//! │                                                                         │
//! │  shopee-catalog errors (separate crate)                                │
//! │  └── CatalogError     - Fetch and configuration failures               │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the View Layer sees (serialized)          │
//! │                                                                         │
//! │  Flow: CoreError / CatalogError → ApiError → View Layer                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Store mutations never fail. Removing, increasing or decreasing an id that
//! is not in a collection is a silent no-op, and a failed catalog fetch is a
//! state (`Catalog::last_error`), not a `CoreError`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Sort key is not one of the known orderings.
    #[error("Unknown sort order: '{0}'. Valid options: default, name, price-low, price-high, rating")]
    UnknownSortOrder(String),

    /// Exchange rate could not be parsed or is not usable.
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

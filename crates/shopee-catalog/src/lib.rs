//! # shopee-catalog: Catalog Source for the Shopee Storefront
//!
//! Fetches the product catalog over HTTP and loads the storefront
//! configuration. The result of a fetch is handed to
//! [`shopee_core::Catalog`] by the caller; this crate holds no store state.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CatalogConfig ──────► HttpCatalogSource ──── GET ───► catalog API     │
//! │   (TOML + env)               │                                          │
//! │                              │ Result<Vec<Product>, CatalogError>       │
//! │                              ▼                                          │
//! │                     storefront fetch_catalog intent                     │
//! │                     (applies Pending / Fulfilled / Rejected)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Endpoint and display currency configuration
//! - [`error`] - Catalog error types
//! - [`source`] - `CatalogSource` trait and the reqwest implementation

pub mod config;
pub mod error;
pub mod source;

pub use config::{CatalogConfig, CatalogSettings, DisplaySettings, DEFAULT_CATALOG_URL};
pub use error::{CatalogError, CatalogResult};
pub use source::{CatalogSource, HttpCatalogSource};

//! # Shopee Storefront Library
//!
//! Hosts the storefront stores and the intents a View Layer dispatches.
//!
//! ## Module Organization
//! ```text
//! shopee_storefront/
//! ├── lib.rs          ◄─── You are here (bootstrap & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and store handle aliases
//! │   ├── store.rs    ◄─── Arc<Mutex<_>> store handle
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Intent exports
//! │   ├── catalog.rs  ◄─── Fetch and home page listing
//! │   ├── cart.rs     ◄─── Cart intents
//! │   ├── wishlist.rs ◄─── Wishlist intents, move to cart
//! │   └── header.rs   ◄─── Badge counts
//! └── error.rs        ◄─── API error type for intents
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shopee_catalog::{CatalogConfig, HttpCatalogSource};

use crate::error::ApiError;
use crate::state::AppState;

/// Runs the storefront once: loads the catalog and reports what it holds.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • storefront.toml (SHOPEE_CONFIG or the platform config dir)        │
/// │     • SHOPEE_* environment overrides                                    │
/// │     • An explicit SHOPEE_CONFIG path that does not exist is an error    │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • Empty Catalog, Cart and Wishlist stores                           │
/// │     • ConfigState with the display currency                             │
/// │                                                                         │
/// │  4. Fetch Catalog ────────────────────────────────────────────────────► │
/// │     • One GET against the configured endpoint                           │
/// │     • A rejected fetch is logged and the app keeps running              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<AppState, ApiError> {
    init_tracing();

    info!("Starting Shopee storefront");

    let config = CatalogConfig::load(config_path())?;
    info!(endpoint = %config.catalog.endpoint, "Configuration loaded");

    let state = AppState::new(&config);
    let currency = &state.config.display_currency;
    info!(
        currency = %currency.code,
        rate = currency.rate.multiplier(),
        "Display currency configured"
    );
    let source = HttpCatalogSource::new(&config)?;

    match commands::fetch_catalog(&state.catalog, &source).await {
        Ok(report) => info!(
            products = report.product_count,
            elapsed_ms = report.elapsed_ms,
            "Catalog ready"
        ),
        Err(err) => warn!(error = %err, "Starting with an empty catalog"),
    }

    let listing = commands::get_catalog(&state, shopee_core::ALL_CATEGORIES, "default")?;
    let badges = commands::get_badges(&state.cart, &state.wishlist);
    info!(
        shown = listing.summary.shown,
        total = listing.summary.total,
        categories = listing.summary.categories,
        cart_badge = ?badges.cart,
        wishlist_badge = ?badges.wishlist,
        "Storefront state initialized"
    );

    Ok(state)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopee=trace` - Show trace for storefront crates only
/// - Default: INFO, DEBUG for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopee=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

/// Config file override for development.
fn config_path() -> Option<PathBuf> {
    std::env::var_os("SHOPEE_CONFIG").map(PathBuf::from)
}

//! # State Module
//!
//! Owns the storefront's stores for the lifetime of the process.
//!
//! ## Why One Handle Per Store?
//! The three stores never read each other's state. Giving each its own lock
//! keeps every mutation serialized per store (single writer) without a cart
//! update ever waiting on a wishlist update.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  AppState::new(&config)                         │   │
//! │  │  created once at bootstrap, dropped at process exit            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬───────┴───────┬──────────────────┐              │
//! │      ▼               ▼               ▼                  ▼              │
//! │  ┌──────────┐  ┌──────────┐  ┌─────────────┐  ┌──────────────┐        │
//! │  │ Catalog  │  │   Cart   │  │  Wishlist   │  │ ConfigState  │        │
//! │  │  State   │  │  State   │  │   State     │  │              │        │
//! │  │ Arc<     │  │ Arc<     │  │ Arc<        │  │ display      │        │
//! │  │  Mutex>  │  │  Mutex>  │  │  Mutex>     │  │ currency     │        │
//! │  └──────────┘  └──────────┘  └─────────────┘  └──────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Store handles: Arc<Mutex<T>>, never held across an await            │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreHandle;

use shopee_catalog::CatalogConfig;
use shopee_core::{Cart, Catalog, Wishlist};

/// Shared handle to the catalog store.
pub type CatalogState = StoreHandle<Catalog>;

/// Shared handle to the cart store.
pub type CartState = StoreHandle<Cart>;

/// Shared handle to the wishlist store.
pub type WishlistState = StoreHandle<Wishlist>;

/// Every store the View Layer talks to, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub config: ConfigState,
}

impl AppState {
    /// Creates fresh (empty) stores.
    pub fn new(config: &CatalogConfig) -> Self {
        AppState {
            catalog: CatalogState::default(),
            cart: CartState::default(),
            wishlist: WishlistState::default(),
            config: ConfigState::from(config),
        }
    }
}

//! # shopee-core: Pure State Core for the Shopee Storefront
//!
//! This crate is the **single source of truth** of the storefront. It holds
//! three independent stores and the derived views layered on top of them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopee Storefront Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View Layer (any UI stack)                    │   │
//! │  │    Home grid ──► Product card ──► Cart page ──► Wishlist page   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / selectors                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopee-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │ wishlist  │  │   view    │  │   │
//! │  │   │ list      │  │ CartLine  │  │ snapshots │  │ filter    │  │   │
//! │  │   │ loading   │  │ quantity  │  │ first-add │  │ sort      │  │   │
//! │  │   │ error     │  │ totals    │  │ wins      │  │ badges    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE TRANSITIONS                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │            shopee-catalog (HTTP catalog source)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Rating, ProductId, ProductSnapshot
//! - [`catalog`] - Catalog store (fetch lifecycle state machine)
//! - [`cart`] - Cart store (ordered lines keyed by product id)
//! - [`wishlist`] - Wishlist store (first snapshot wins)
//! - [`money`] - Integer money and the display currency conversion
//! - [`view`] - Derived projections: filter, sort, badges, stars
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: every store mutation is synchronous and total
//! 2. **Not-found is a no-op**: removing or adjusting an absent id never fails
//! 3. **Owned snapshots**: cart and wishlist copy product fields at add-time
//! 4. **One currency function**: stored prices are canonical, conversion is
//!    applied only through [`money::DisplayCurrency`]
//!
//! ## Example Usage
//!
//! ```rust
//! use shopee_core::{Cart, ProductId, ProductSnapshot};
//!
//! let shoe = ProductSnapshot {
//!     product_id: ProductId::Number(7),
//!     title: "Running shoe".to_string(),
//!     price: 5.0,
//!     image_url: String::new(),
//!     rating: Some(4.1),
//!     description: String::new(),
//!     category: "shoes".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_cart_item(&shoe);
//! cart.add_cart_item(&shoe);
//!
//! assert_eq!(cart.all_cart_items().len(), 1);
//! assert_eq!(cart.total_quantity(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod view;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CatalogEvent};
pub use error::{CoreError, CoreResult};
pub use money::{DisplayCurrency, ExchangeRate, Money};
pub use types::*;
pub use wishlist::{Wishlist, WishlistEntry};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Error message stored when a catalog fetch fails without a message.
pub const DEFAULT_FETCH_ERROR: &str = "Something went wrong!!!!";

/// Category key that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

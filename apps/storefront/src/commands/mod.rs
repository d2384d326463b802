//! # Intents Module
//!
//! Every intent the View Layer can dispatch.
//!
//! ## Intent Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Fetch lifecycle, home page listing
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Wishlist manipulation, move to cart
//! └── header.rs    ◄─── Header badges
//! ```
//!
//! ## State Injection
//! Each intent declares only the handles it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse
//!
//! // Needs the catalog to resolve the product
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//!
//! // Touches two stores, one after the other
//! fn move_to_cart(wishlist: &WishlistState, cart: &CartState, ...)
//! ```
//!
//! No intent holds two store locks at once.

pub mod cart;
pub mod catalog;
pub mod header;
pub mod wishlist;

pub use cart::*;
pub use catalog::*;
pub use header::*;
pub use wishlist::*;

use shopee_core::{ProductId, ProductSnapshot};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Resolves a product id against the loaded catalog.
fn snapshot_from_catalog(
    catalog: &CatalogState,
    product_id: &ProductId,
) -> Result<ProductSnapshot, ApiError> {
    catalog
        .read(|c| c.find(product_id).map(ProductSnapshot::from))
        .ok_or_else(|| ApiError::not_found("Product", &product_id.to_string()))
}

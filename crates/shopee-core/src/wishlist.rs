//! # Wishlist Store
//!
//! Saved product snapshots keyed by product id.
//!
//! Adding an id that is already saved keeps the first snapshot. Removing an
//! id looks it up first and does nothing on a miss, so a "not found" lookup
//! can never turn into a removal at some other position.
//!
//! ## Move to Cart
//! Moving an entry into the cart is not a store operation. The caller issues
//! `Cart::add_cart_item` and then `Wishlist::wishlist_remove_item`; if the
//! second intent is never issued the product stays in both collections.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{ProductId, ProductSnapshot};

/// A saved product. The full snapshot is kept, including description and
/// category.
pub type WishlistEntry = ProductSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a snapshot unless the id is already present.
    ///
    /// Returns true when the entry was inserted.
    pub fn wishlist_add_item(&mut self, product: &ProductSnapshot) -> bool {
        if self.contains(&product.product_id) {
            return false;
        }
        self.entries.push(product.clone());
        true
    }

    /// Deletes the entry with this id. No-op if absent.
    ///
    /// Returns true when an entry was removed.
    pub fn wishlist_remove_item(&mut self, product_id: &ProductId) -> bool {
        match self.entries.iter().position(|e| &e.product_id == product_id) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    /// All entries in insertion order.
    pub fn all_wishlist_items(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&WishlistEntry> {
        self.entries.iter().find(|e| &e.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|e| &e.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! # Header Intents
//!
//! Badge counts for the cart and wishlist icons.

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopee_core::view::{cart_badge, wishlist_badge};

use crate::state::{CartState, WishlistState};

/// `None` hides the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCounts {
    pub cart: Option<u64>,
    pub wishlist: Option<usize>,
}

pub fn get_badges(cart: &CartState, wishlist: &WishlistState) -> BadgeCounts {
    debug!("get_badges intent");
    BadgeCounts {
        cart: cart.read(cart_badge),
        wishlist: wishlist.read(wishlist_badge),
    }
}

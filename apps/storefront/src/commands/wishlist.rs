//! # Wishlist Intents
//!
//! ## Move to Cart
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  move_to_cart(id)                                                       │
//! │                                                                         │
//! │  1. read entry from wishlist ──── absent? ──► NOT_FOUND, nothing changes│
//! │  2. cart.add_cart_item(entry)                                           │
//! │  3. wishlist.wishlist_remove_item(id)                                   │
//! │                                                                         │
//! │  Steps 2 and 3 are separate transitions. An observer between them sees │
//! │  the product in both stores, never in neither.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopee_core::view::{
    truncate_with_ellipsis, StarRating, TITLE_MAX_CHARS, WISHLIST_DESCRIPTION_MAX_CHARS,
};
use shopee_core::{ProductId, Wishlist, WishlistEntry};

use super::{snapshot_from_catalog, CartResponse};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState, WishlistState};

/// A saved product as rendered on the wishlist page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistCard {
    pub product_id: ProductId,
    pub title: String,
    pub full_title: String,
    pub price: f64,
    pub display_price: String,
    pub image_url: String,
    pub category: String,
    pub description: String,
    pub rating: Option<f64>,
    pub stars: Option<StarRating>,
}

impl WishlistCard {
    fn new(entry: &WishlistEntry, config: &ConfigState) -> Self {
        WishlistCard {
            product_id: entry.product_id.clone(),
            title: truncate_with_ellipsis(&entry.title, TITLE_MAX_CHARS),
            full_title: entry.title.clone(),
            price: entry.price,
            display_price: config.format_price(entry.price),
            image_url: entry.image_url.clone(),
            category: entry.category.clone(),
            description: truncate_with_ellipsis(&entry.description, WISHLIST_DESCRIPTION_MAX_CHARS),
            rating: entry.rating,
            stars: entry.rating.map(StarRating::from_rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<WishlistCard>,
    pub count: usize,
}

impl WishlistResponse {
    pub fn new(wishlist: &Wishlist, config: &ConfigState) -> Self {
        WishlistResponse {
            items: wishlist
                .all_wishlist_items()
                .iter()
                .map(|entry| WishlistCard::new(entry, config))
                .collect(),
            count: wishlist.len(),
        }
    }
}

/// Result of a heart-button toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub in_wishlist: bool,
    pub wishlist: WishlistResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToCartResponse {
    pub cart: CartResponse,
    pub wishlist: WishlistResponse,
}

pub fn get_wishlist(wishlist: &WishlistState, config: &ConfigState) -> WishlistResponse {
    debug!("get_wishlist intent");
    wishlist.read(|w| WishlistResponse::new(w, config))
}

/// Adds a catalog product. Adding a product already present changes nothing.
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    config: &ConfigState,
    product_id: &ProductId,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist intent");
    let snapshot = snapshot_from_catalog(catalog, product_id)?;

    Ok(wishlist.write(|w| {
        w.wishlist_add_item(&snapshot);
        WishlistResponse::new(w, config)
    }))
}

pub fn remove_from_wishlist(
    wishlist: &WishlistState,
    config: &ConfigState,
    product_id: &ProductId,
) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist intent");
    wishlist.write(|w| {
        w.wishlist_remove_item(product_id);
        WishlistResponse::new(w, config)
    })
}

/// Removes the product if present, otherwise adds it from the catalog.
///
/// The membership check and the change run under one wishlist lock.
pub fn toggle_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    config: &ConfigState,
    product_id: &ProductId,
) -> Result<ToggleResponse, ApiError> {
    debug!(product_id = %product_id, "toggle_wishlist intent");
    let snapshot = snapshot_from_catalog(catalog, product_id).ok();

    wishlist.write(|w| -> Result<ToggleResponse, ApiError> {
        let in_wishlist = if w.wishlist_remove_item(product_id) {
            false
        } else {
            let snapshot = snapshot
                .as_ref()
                .ok_or_else(|| ApiError::not_found("Product", &product_id.to_string()))?;
            w.wishlist_add_item(snapshot);
            true
        };
        Ok(ToggleResponse {
            in_wishlist,
            wishlist: WishlistResponse::new(w, config),
        })
    })
}

/// Moves a wishlist entry into the cart.
pub fn move_to_cart(
    wishlist: &WishlistState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &ProductId,
) -> Result<MoveToCartResponse, ApiError> {
    debug!(product_id = %product_id, "move_to_cart intent");
    let entry = wishlist
        .read(|w| w.get(product_id).cloned())
        .ok_or_else(|| ApiError::not_found("Wishlist entry", &product_id.to_string()))?;

    let cart_response = cart.write(|c| {
        c.add_cart_item(&entry);
        CartResponse::new(c, config)
    });
    let wishlist_response = remove_from_wishlist(wishlist, config, product_id);

    Ok(MoveToCartResponse {
        cart: cart_response,
        wishlist: wishlist_response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{product, sample_catalog, StaticSource};
    use crate::commands::{add_to_cart, fetch_catalog, get_cart};
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use shopee_catalog::CatalogConfig;

    async fn loaded() -> AppState {
        let state = AppState::new(&CatalogConfig::default());
        fetch_catalog(&state.catalog, &StaticSource::Products(sample_catalog()))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let state = loaded().await;
        let id = ProductId::Number(3);
        add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();
        let response = add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_move_to_cart() {
        let state = loaded().await;
        let id = ProductId::Number(3);
        add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();

        let response = move_to_cart(&state.wishlist, &state.cart, &state.config, &id).unwrap();
        assert_eq!(response.wishlist.count, 0);
        assert_eq!(response.cart.items.len(), 1);
        assert_eq!(response.cart.items[0].line.product_id, id);
        assert_eq!(response.cart.items[0].line.quantity, 1);
    }

    #[tokio::test]
    async fn test_move_to_cart_increments_existing_line() {
        let state = loaded().await;
        let id = ProductId::Number(3);
        add_to_cart(&state.catalog, &state.cart, &state.config, &id).unwrap();
        add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();

        let response = move_to_cart(&state.wishlist, &state.cart, &state.config, &id).unwrap();
        assert_eq!(response.cart.items[0].line.quantity, 2);
        assert!(get_wishlist(&state.wishlist, &state.config).items.is_empty());
    }

    #[tokio::test]
    async fn test_move_missing_entry_changes_nothing() {
        let state = loaded().await;
        let err = move_to_cart(&state.wishlist, &state.cart, &state.config, &ProductId::Number(3))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&state.cart, &state.config).items.is_empty());
    }

    #[tokio::test]
    async fn test_toggle() {
        let state = loaded().await;
        let id = ProductId::Number(1);

        let on = toggle_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();
        assert!(on.in_wishlist);
        assert_eq!(on.wishlist.count, 1);

        let off = toggle_wishlist(&state.catalog, &state.wishlist, &state.config, &id).unwrap();
        assert!(!off.in_wishlist);
        assert_eq!(off.wishlist.count, 0);
    }

    #[tokio::test]
    async fn test_toggle_unknown_product() {
        let state = loaded().await;
        let err = toggle_wishlist(&state.catalog, &state.wishlist, &state.config, &ProductId::Number(77)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let state = loaded().await;
        add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &ProductId::Number(2)).unwrap();
        let response = remove_from_wishlist(&state.wishlist, &state.config, &ProductId::Text("2".into()));
        assert_eq!(response.count, 1);
    }

    #[tokio::test]
    async fn test_cards_are_rendered_for_display() {
        let mut config = CatalogConfig::default();
        config.display.currency_symbol = "Rs ".to_string();
        config.display.rate_bps = 80_000;
        let state = AppState::new(&config);

        let mut long = product(9, "Lamp", 12.5, "home", Some(3.5));
        long.description = "x".repeat(120);
        let mut products = sample_catalog();
        products.push(long);
        fetch_catalog(&state.catalog, &StaticSource::Products(products))
            .await
            .unwrap();

        add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &ProductId::Number(4)).unwrap();
        let response = add_to_wishlist(&state.catalog, &state.wishlist, &state.config, &ProductId::Number(9)).unwrap();

        let monitor = &response.items[0];
        assert_eq!(monitor.display_price, "Rs 4792.00");
        assert_eq!(monitor.stars, None);
        assert_eq!(monitor.description, "Monitor description");

        let lamp = &response.items[1];
        assert_eq!(lamp.display_price, "Rs 100.00");
        assert_eq!(lamp.description, format!("{}...", "x".repeat(100)));
        assert_eq!(lamp.stars, Some(StarRating { full: 3, half: true, empty: 1 }));
        assert_eq!(lamp.title, "Lamp");
    }
}

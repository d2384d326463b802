//! # Cart Intents
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  increase / decrease         │
//! │  │  Empty   │───────────────►│ In Cart  │◄──────────────┐              │
//! │  │  Cart    │                │ (qty ≥ 1)│───────────────┘              │
//! │  └──────────┘◄───────────────└──────────┘                              │
//! │               remove_from_cart, or decrease at qty 1                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Intents on a product that is not in the cart leave the cart unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopee_core::{Cart, CartLine, CartTotals, ProductId};

use super::snapshot_from_catalog;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};

/// A cart line with its prices rendered in the display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub display_price: String,
    pub display_line_total: String,
}

impl CartLineView {
    fn new(line: &CartLine, config: &ConfigState) -> Self {
        CartLineView {
            display_price: config.format_price(line.price),
            display_line_total: config.format_amount(line.line_total()),
            line: line.clone(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineView>,
    pub totals: CartTotals,
    /// `totals.total_amount` in the display currency.
    pub display_total: String,
}

impl CartResponse {
    pub fn new(cart: &Cart, config: &ConfigState) -> Self {
        let totals = CartTotals::from(cart);
        CartResponse {
            items: cart
                .all_cart_items()
                .iter()
                .map(|line| CartLineView::new(line, config))
                .collect(),
            display_total: config.format_amount(totals.total_amount),
            totals,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart intent");
    cart.read(|c| CartResponse::new(c, config))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added with quantity 1
/// - Title, price and image are captured now and never refreshed
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart intent");
    let snapshot = snapshot_from_catalog(catalog, product_id)?;

    Ok(cart.write(|c| {
        c.add_cart_item(&snapshot);
        CartResponse::new(c, config)
    }))
}

pub fn remove_from_cart(cart: &CartState, config: &ConfigState, product_id: &ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart intent");
    cart.write(|c| {
        c.remove_cart_item(product_id);
        CartResponse::new(c, config)
    })
}

pub fn increase_quantity(cart: &CartState, config: &ConfigState, product_id: &ProductId) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity intent");
    cart.write(|c| {
        c.increase_cart_item_quantity(product_id);
        CartResponse::new(c, config)
    })
}

/// Decreases quantity by one; at quantity 1 the line is removed.
pub fn decrease_quantity(cart: &CartState, config: &ConfigState, product_id: &ProductId) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity intent");
    cart.write(|c| {
        c.decrease_cart_item_quantity(product_id);
        CartResponse::new(c, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fetch_catalog;
    use crate::commands::testing::{sample_catalog, StaticSource};
    use crate::error::ErrorCode;
    use crate::state::AppState;
    use shopee_catalog::CatalogConfig;
    use shopee_core::Money;

    async fn loaded() -> AppState {
        let state = AppState::new(&CatalogConfig::default());
        fetch_catalog(&state.catalog, &StaticSource::Products(sample_catalog()))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_add_twice_then_decrease() {
        let state = loaded().await;
        let id = ProductId::Number(1);

        add_to_cart(&state.catalog, &state.cart, &state.config, &id).unwrap();
        let response = add_to_cart(&state.catalog, &state.cart, &state.config, &id).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].line.quantity, 2);
        assert_eq!(response.items[0].display_price, "₹109.95");
        assert_eq!(response.items[0].display_line_total, "₹219.90");
        assert_eq!(response.totals.total_amount, Money::from_minor(21_990));
        assert_eq!(response.display_total, "₹219.90");

        let response = decrease_quantity(&state.cart, &state.config, &id);
        assert_eq!(response.items[0].line.quantity, 1);
        let response = decrease_quantity(&state.cart, &state.config, &id);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_amount, Money::zero());
    }

    #[tokio::test]
    async fn test_totals_across_lines() {
        let state = loaded().await;
        add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(2)).unwrap();
        increase_quantity(&state.cart, &state.config, &ProductId::Number(2));
        add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(3)).unwrap();

        let response = get_cart(&state.cart, &state.config);
        assert_eq!(response.totals.line_count, 2);
        assert_eq!(response.totals.total_quantity, 3);
        assert_eq!(response.totals.total_amount, Money::from_minor(5_460));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let state = loaded().await;
        let err = add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(99))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&state.cart, &state.config).items.is_empty());
    }

    #[tokio::test]
    async fn test_absent_product_is_noop() {
        let state = loaded().await;
        add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(1)).unwrap();
        let before = get_cart(&state.cart, &state.config);

        let absent = ProductId::Number(42);
        assert_eq!(remove_from_cart(&state.cart, &state.config, &absent), before);
        assert_eq!(increase_quantity(&state.cart, &state.config, &absent), before);
        assert_eq!(decrease_quantity(&state.cart, &state.config, &absent), before);
    }

    #[tokio::test]
    async fn test_snapshot_survives_refetch() {
        let state = loaded().await;
        add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(3)).unwrap();

        let mut repriced = sample_catalog();
        repriced[2].price = 99.0;
        fetch_catalog(&state.catalog, &StaticSource::Products(repriced))
            .await
            .unwrap();

        let response = get_cart(&state.cart, &state.config);
        assert_eq!(response.items[0].line.price, 10.0);
    }

    #[tokio::test]
    async fn test_line_prices_use_display_currency() {
        let mut config = CatalogConfig::default();
        config.display.currency_symbol = "Rs ".to_string();
        config.display.rate_bps = 80_000;
        let state = AppState::new(&config);
        fetch_catalog(&state.catalog, &StaticSource::Products(sample_catalog()))
            .await
            .unwrap();

        add_to_cart(&state.catalog, &state.cart, &state.config, &ProductId::Number(3)).unwrap();
        let response = increase_quantity(&state.cart, &state.config, &ProductId::Number(3));

        assert_eq!(response.items[0].display_price, "Rs 80.00");
        assert_eq!(response.items[0].display_line_total, "Rs 160.00");
        assert_eq!(response.display_total, "Rs 160.00");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["items"][0]["displayLineTotal"], "Rs 160.00");
    }
}

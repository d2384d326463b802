//! # Cart Store
//!
//! Ordered cart lines keyed by product id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Intent                          Line exists?    Effect                 │
//! │  ──────                          ────────────    ──────                 │
//! │                                                                         │
//! │  add_cart_item(product) ───────► yes ──────────► quantity += 1          │
//! │                                  no ───────────► push(line, qty 1)      │
//! │                                                                         │
//! │  increase_cart_item_quantity ──► yes ──────────► quantity += 1          │
//! │                                  no ───────────► (no-op)                │
//! │                                                                         │
//! │  decrease_cart_item_quantity ──► yes, qty == 1 ► remove line            │
//! │                                  yes, qty > 1 ─► quantity -= 1          │
//! │                                  no ───────────► (no-op)                │
//! │                                                                         │
//! │  remove_cart_item(id) ─────────► yes ──────────► remove line            │
//! │                                  no ───────────► (no-op)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per `product_id`
//! - A line's quantity is always ≥ 1; leaving the cart means removal
//! - Lines keep first-add order

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{ProductId, ProductSnapshot};

/// A product's aggregated quantity in the cart.
///
/// Title, price, image and rating are frozen when the line is created.
/// Description and category are not carried into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub rating: Option<f64>,
    pub quantity: u32,
}

impl CartLine {
    fn from_snapshot(product: &ProductSnapshot) -> Self {
        CartLine {
            product_id: product.product_id.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            rating: product.rating,
            quantity: 1,
        }
    }

    /// Unit price in minor units.
    pub fn unit_price(&self) -> Money {
        Money::from_price(self.price)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|l| &l.product_id == product_id)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// An existing line only gets its quantity bumped; its frozen fields are
    /// not refreshed from `product`.
    pub fn add_cart_item(&mut self, product: &ProductSnapshot) {
        match self.position(&product.product_id) {
            Some(i) => self.lines[i].quantity = self.lines[i].quantity.saturating_add(1),
            None => self.lines.push(CartLine::from_snapshot(product)),
        }
    }

    /// Removes a line entirely. No-op if the id is not in the cart.
    pub fn remove_cart_item(&mut self, product_id: &ProductId) {
        if let Some(i) = self.position(product_id) {
            self.lines.remove(i);
        }
    }

    /// Adds one to a line's quantity. No upper bound.
    pub fn increase_cart_item_quantity(&mut self, product_id: &ProductId) {
        if let Some(i) = self.position(product_id) {
            self.lines[i].quantity = self.lines[i].quantity.saturating_add(1);
        }
    }

    /// Subtracts one from a line's quantity, removing the line at 1.
    pub fn decrease_cart_item_quantity(&mut self, product_id: &ProductId) {
        if let Some(i) = self.position(product_id) {
            if self.lines[i].quantity <= 1 {
                self.lines.remove(i);
            } else {
                self.lines[i].quantity -= 1;
            }
        }
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// All lines in first-add order.
    pub fn all_cart_items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities (the header badge number).
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price × quantity` in the source currency.
    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

/// Cart totals summary for intent responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u64,
    pub total_amount: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total_amount: cart.total_amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: u64, price: f64) -> ProductSnapshot {
        ProductSnapshot {
            product_id: ProductId::Number(id),
            title: format!("Product {}", id),
            price,
            image_url: format!("https://example.com/{}.jpg", id),
            rating: Some(4.0),
            description: "long text".to_string(),
            category: "misc".to_string(),
        }
    }

    #[test]
    fn test_add_new_item_starts_at_one() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 9.99));

        let line = cart.get(&ProductId::Number(1)).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.title, "Product 1");
        assert_eq!(line.image_url, "https://example.com/1.jpg");
    }

    #[test]
    fn test_add_same_product_twice_gives_one_line_quantity_two() {
        let mut cart = Cart::new();
        let product = snapshot(1, 9.99);

        cart.add_cart_item(&product);
        cart.add_cart_item(&product);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.all_cart_items()[0].quantity, 2);
    }

    #[test]
    fn test_re_add_does_not_refresh_frozen_fields() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 9.99));

        let mut repriced = snapshot(1, 19.99);
        repriced.title = "Renamed".to_string();
        cart.add_cart_item(&repriced);

        let line = cart.get(&ProductId::Number(1)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.price, 9.99);
        assert_eq!(line.title, "Product 1");
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 1.0));
        cart.add_cart_item(&snapshot(2, 1.0));

        cart.decrease_cart_item_quantity(&ProductId::Number(1));

        assert!(!cart.contains(&ProductId::Number(1)));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_decrease_above_one_decrements() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 1.0));
        cart.increase_cart_item_quantity(&ProductId::Number(1));
        cart.increase_cart_item_quantity(&ProductId::Number(1));

        cart.decrease_cart_item_quantity(&ProductId::Number(1));
        assert_eq!(cart.get(&ProductId::Number(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_remove_twice_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 1.0));
        cart.add_cart_item(&snapshot(2, 2.0));

        cart.remove_cart_item(&ProductId::Number(1));
        let after_first = cart.clone();
        cart.remove_cart_item(&ProductId::Number(1));

        assert_eq!(cart, after_first);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_absent_ids_are_no_ops() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 1.0));
        let before = cart.clone();

        let missing = ProductId::Number(99);
        cart.remove_cart_item(&missing);
        cart.increase_cart_item_quantity(&missing);
        cart.decrease_cart_item_quantity(&missing);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_increase_then_decrease_twice_removes_product_seven() {
        let mut cart = Cart::new();
        let seven = ProductId::Number(7);
        cart.add_cart_item(&snapshot(7, 5.0));

        cart.increase_cart_item_quantity(&seven);
        cart.decrease_cart_item_quantity(&seven);
        cart.decrease_cart_item_quantity(&seven);

        assert!(cart.get(&seven).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_first_add_order() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(3, 1.0));
        cart.add_cart_item(&snapshot(1, 1.0));
        cart.add_cart_item(&snapshot(2, 1.0));
        cart.increase_cart_item_quantity(&ProductId::Number(2));
        cart.add_cart_item(&snapshot(3, 1.0));

        let order: Vec<String> = cart
            .all_cart_items()
            .iter()
            .map(|l| l.product_id.to_string())
            .collect();
        assert_eq!(order, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 109.95));
        cart.add_cart_item(&snapshot(1, 109.95));
        cart.add_cart_item(&snapshot(2, 22.3));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        // 2 × 109.95 + 22.30 = 242.20
        assert_eq!(totals.total_amount, Money::from_minor(24220));
    }

    #[test]
    fn test_snapshot_is_independent_of_catalog_changes() {
        let mut product = snapshot(1, 10.0);
        let mut cart = Cart::new();
        cart.add_cart_item(&product);

        product.price = 99.0;
        assert_eq!(cart.get(&ProductId::Number(1)).unwrap().price, 10.0);
    }

    #[test]
    fn test_huge_price_totals_saturate() {
        let payload: Vec<crate::types::Product> =
            serde_json::from_str(r#"[{"id":1,"title":"Big","price":1e17}]"#).unwrap();
        let big = ProductSnapshot::from(&payload[0]);

        let mut cart = Cart::new();
        cart.add_cart_item(&big);
        cart.add_cart_item(&big);
        cart.add_cart_item(&snapshot(2, 5e16));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.total_amount(), Money::from_minor(i64::MAX));
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_cart_item(&snapshot(1, 1.0));
        cart.lines[0].quantity = u32::MAX - 1;

        cart.increase_cart_item_quantity(&ProductId::Number(1));
        cart.add_cart_item(&snapshot(1, 1.0));
        assert_eq!(cart.get(&ProductId::Number(1)).unwrap().quantity, u32::MAX);
    }
}

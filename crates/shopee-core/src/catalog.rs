//! # Catalog Store
//!
//! Holds the fetched product list together with the fetch lifecycle flags.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Machine                                │
//! │                                                                         │
//! │   Initial                                                               │
//! │   loading=false, list=[], error=""                                      │
//! │        │                                                                │
//! │        │ begin_fetch()                                                  │
//! │        ▼                                                                │
//! │   Loading ──────────────────────────────┐                               │
//! │   loading=true (list/error untouched)   │                               │
//! │        │                                │                               │
//! │        │ complete_fetch(payload)        │ fail_fetch(message)           │
//! │        ▼                                ▼                               │
//! │   Loaded                           Failed                               │
//! │   loading=false                    loading=false                        │
//! │   list=payload, error=""           error=message (list kept)            │
//! │                                                                         │
//! │   Any state ── begin_fetch() ──► Loading   (user-initiated reload)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never retries and never deduplicates. If two fetches overlap,
//! whichever result is applied last wins.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};
use crate::DEFAULT_FETCH_ERROR;

/// A fetch lifecycle transition, applied with [`Catalog::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The request was issued.
    Pending,
    /// The request returned a decoded product array.
    Fulfilled(Vec<Product>),
    /// The request failed; `None` or an empty message stores the default.
    Rejected(Option<String>),
}

/// Catalog state: `{ list, loading, error }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    list: Vec<Product>,
    loading: bool,
    error: String,
}

impl Catalog {
    /// Creates the initial state: not loading, no products, no error.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Applies one lifecycle transition.
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Pending => self.begin_fetch(),
            CatalogEvent::Fulfilled(payload) => self.complete_fetch(payload),
            CatalogEvent::Rejected(message) => self.fail_fetch(message),
        }
    }

    /// `fetch-start`: only the loading flag changes.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// `fetch-success`: replaces the list wholesale and clears the error.
    ///
    /// The payload is stored as received, in source order.
    pub fn complete_fetch(&mut self, payload: Vec<Product>) {
        self.loading = false;
        self.list = payload;
        self.error.clear();
    }

    /// `fetch-failure`: records the message and keeps the previous list.
    pub fn fail_fetch(&mut self, message: Option<String>) {
        self.loading = false;
        self.error = match message {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_FETCH_ERROR.to_string(),
        };
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// All products in the order the source returned them.
    pub fn all_products(&self) -> &[Product] {
        &self.list
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last fetch error; empty when the last fetch succeeded or none failed.
    pub fn last_error(&self) -> &str {
        &self.error
    }

    /// Returns true when an error message is set.
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Looks up a product by id (first match in source order).
    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.list.iter().find(|p| &p.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id: ProductId::Number(id),
            title: format!("Product {}", id),
            price,
            image: String::new(),
            category: "misc".to_string(),
            description: String::new(),
            rating: Some(Rating { rate: 4.5, count: 1 }),
        }
    }

    #[test]
    fn test_initial_state() {
        let catalog = Catalog::new();
        assert!(!catalog.is_loading());
        assert!(catalog.all_products().is_empty());
        assert_eq!(catalog.last_error(), "");
    }

    #[test]
    fn test_begin_fetch_only_sets_loading() {
        let mut catalog = Catalog::new();
        catalog.complete_fetch(vec![product(1, 10.0)]);
        catalog.fail_fetch(Some("boom".to_string()));

        catalog.begin_fetch();
        assert!(catalog.is_loading());
        assert_eq!(catalog.all_products().len(), 1);
        assert_eq!(catalog.last_error(), "boom");
    }

    #[test]
    fn test_fetch_success_scenario() {
        let payload: Vec<Product> = serde_json::from_str(
            r#"[{"id":1,"title":"A","price":10,"rating":{"rate":4.5}}]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        catalog.apply(CatalogEvent::Pending);
        catalog.apply(CatalogEvent::Fulfilled(payload));

        assert!(!catalog.is_loading());
        assert_eq!(catalog.last_error(), "");
        assert_eq!(catalog.all_products().len(), 1);
        assert_eq!(catalog.all_products()[0].price, 10.0);
    }

    #[test]
    fn test_odd_entries_still_fulfil_the_fetch() {
        let payload: Vec<Product> = serde_json::from_str(
            r#"[{"id":1,"title":"A","price":10},{"id":-2,"title":null,"price":"oops"}]"#,
        )
        .unwrap();

        let mut catalog = Catalog::new();
        catalog.apply(CatalogEvent::Pending);
        catalog.apply(CatalogEvent::Fulfilled(payload));

        assert!(!catalog.has_error());
        assert_eq!(catalog.all_products().len(), 2);
        assert!(catalog.find(&ProductId::Text("-2".to_string())).is_some());
    }

    #[test]
    fn test_fetch_failure_keeps_list() {
        let mut catalog = Catalog::new();
        catalog.complete_fetch(vec![product(1, 10.0), product(2, 20.0)]);
        let before = catalog.all_products().to_vec();

        catalog.begin_fetch();
        catalog.fail_fetch(Some("HTTP error! status: 500".to_string()));

        assert!(!catalog.is_loading());
        assert_eq!(catalog.last_error(), "HTTP error! status: 500");
        assert_eq!(catalog.all_products(), before.as_slice());
    }

    #[test]
    fn test_fetch_failure_without_message_uses_default() {
        let mut catalog = Catalog::new();
        catalog.apply(CatalogEvent::Rejected(None));
        assert_eq!(catalog.last_error(), DEFAULT_FETCH_ERROR);

        catalog.apply(CatalogEvent::Rejected(Some(String::new())));
        assert_eq!(catalog.last_error(), DEFAULT_FETCH_ERROR);
    }

    #[test]
    fn test_success_after_failure_clears_error() {
        let mut catalog = Catalog::new();
        catalog.fail_fetch(None);
        assert!(catalog.has_error());

        catalog.begin_fetch();
        catalog.complete_fetch(vec![product(5, 1.0)]);
        assert!(!catalog.has_error());
        assert!(catalog.find(&ProductId::Number(5)).is_some());
        assert!(catalog.find(&ProductId::Number(6)).is_none());
    }

    #[test]
    fn test_overlapping_fetches_last_write_wins() {
        let mut catalog = Catalog::new();
        catalog.begin_fetch();
        catalog.begin_fetch();

        // Second request resolves first, first request resolves last.
        catalog.complete_fetch(vec![product(2, 2.0)]);
        catalog.complete_fetch(vec![product(1, 1.0)]);

        assert_eq!(catalog.all_products().len(), 1);
        assert_eq!(catalog.all_products()[0].id, ProductId::Number(1));
    }
}

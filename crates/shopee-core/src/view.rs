//! # Derived Views
//!
//! Projections recomputed from store state on every read. Nothing here is
//! stored back into a store.
//!
//! ## Home Grid Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog::all_products()                                                │
//! │        │                                                                │
//! │        ├──► categories() ──► ["all", "electronics", "jewelery", ...]   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  CategoryFilter (All | Category)                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  SortOrder (Default | Name | PriceLowToHigh | PriceHighToLow | Rating)  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  filter_and_sort() ──► Vec<&Product> ──► CatalogSummary "3 of 20"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::cart::Cart;
use crate::error::CoreError;
use crate::types::Product;
use crate::wishlist::Wishlist;
use crate::ALL_CATEGORIES;

// =============================================================================
// Category Filter
// =============================================================================

/// Which products the home grid shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => &product.category == c,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(key: &str) -> Self {
        if key == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(key.to_string())
        }
    }
}

/// Distinct categories in first-seen order, prefixed with `"all"`.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut keys = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !keys[1..].contains(&product.category) {
            keys.push(product.category.clone());
        }
    }
    keys
}

/// Title-cases a category key for buttons: `"all"` becomes "All Products".
pub fn category_label(key: &str) -> String {
    if key == ALL_CATEGORIES {
        return "All Products".to_string();
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Home grid ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Source order.
    #[default]
    Default,
    /// Title A to Z.
    Name,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rating first; unrated products count as 0.
    Rating,
}

impl SortOrder {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::Name => compare_titles(&a.title, &b.title),
            SortOrder::PriceLowToHigh => a.price.total_cmp(&b.price),
            SortOrder::PriceHighToLow => b.price.total_cmp(&a.price),
            SortOrder::Rating => {
                let (ra, rb) = (a.rate().unwrap_or(0.0), b.rate().unwrap_or(0.0));
                rb.total_cmp(&ra)
            }
        }
    }
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Default => write!(f, "default"),
            SortOrder::Name => write!(f, "name"),
            SortOrder::PriceLowToHigh => write!(f, "price-low"),
            SortOrder::PriceHighToLow => write!(f, "price-high"),
            SortOrder::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "" => Ok(SortOrder::Default),
            "name" => Ok(SortOrder::Name),
            "price-low" => Ok(SortOrder::PriceLowToHigh),
            "price-high" => Ok(SortOrder::PriceHighToLow),
            "rating" => Ok(SortOrder::Rating),
            other => Err(CoreError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Filters then sorts the catalog. The sort is stable, so ties keep source
/// order.
pub fn filter_and_sort<'a>(
    products: &'a [Product],
    filter: &CategoryFilter,
    order: SortOrder,
) -> Vec<&'a Product> {
    let mut shown: Vec<&Product> = products.iter().filter(|p| filter.matches(p)).collect();
    if order != SortOrder::Default {
        shown.sort_by(|a, b| order.compare(a, b));
    }
    shown
}

/// Counts for the home page hero and the "Showing X of Y products" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub shown: usize,
    pub total: usize,
    /// Number of real categories (excluding "all").
    pub categories: usize,
}

impl CatalogSummary {
    pub fn new(products: &[Product], shown: usize) -> Self {
        CatalogSummary {
            shown,
            total: products.len(),
            categories: categories(products).len() - 1,
        }
    }
}

// =============================================================================
// Badges
// =============================================================================

/// Header cart badge: sum of quantities, hidden when the cart is empty.
pub fn cart_badge(cart: &Cart) -> Option<u64> {
    match cart.total_quantity() {
        0 => None,
        n => Some(n),
    }
}

/// Header wishlist badge: number of entries, hidden when empty.
pub fn wishlist_badge(wishlist: &Wishlist) -> Option<usize> {
    match wishlist.len() {
        0 => None,
        n => Some(n),
    }
}

// =============================================================================
// Star Rating
// =============================================================================

/// Five-star breakdown of a rating score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub const MAX_STARS: u8 = 5;

    /// `floor(rate)` full stars, one half star for any fraction, the rest
    /// empty. Scores outside 0 to 5 are clamped.
    pub fn from_rate(rate: f64) -> Self {
        let rate = if rate.is_finite() {
            rate.clamp(0.0, Self::MAX_STARS as f64)
        } else {
            0.0
        };
        let full = rate.floor() as u8;
        let half = rate.fract() > 0.0;
        StarRating {
            full,
            half,
            empty: Self::MAX_STARS - full - u8::from(half),
        }
    }
}

// =============================================================================
// Text
// =============================================================================

/// Card limits for truncated text.
pub const TITLE_MAX_CHARS: usize = 50;
pub const CARD_DESCRIPTION_MAX_CHARS: usize = 80;
pub const WISHLIST_DESCRIPTION_MAX_CHARS: usize = 100;

/// Cuts `text` to `max_chars` characters and appends `...` if anything was
/// cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

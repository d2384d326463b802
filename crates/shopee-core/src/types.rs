//! # Domain Types
//!
//! Core domain types shared by all three stores.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductSnapshot │   │    CartLine     │       │
//! │  │  (fetched)      │──►│  (owned copy)   │──►│  (cart.rs)      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  productId      │   │  productId      │       │
//! │  │  title, price   │   │  title, price   │   │  title, price   │       │
//! │  │  image          │   │  imageUrl       │   │  imageUrl       │       │
//! │  │  rating{rate,   │   │  rating (rate)  │   │  rating (rate)  │       │
//! │  │         count}  │   │  description    │   │  quantity       │       │
//! │  │  category, desc │   │  category       │   └─────────────────┘       │
//! │  └─────────────────┘   └────────┬────────┘                             │
//! │                                 │                                       │
//! │                                 └──────────► WishlistEntry (alias)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Payload Validation
//! `Product` decodes whatever the catalog endpoint returns. A missing, null
//! or wrong-typed field takes its default (empty string, `0.0`, no rating)
//! and a numeric string price is read as a number. One odd entry never
//! rejects the rest of the catalog. Nothing is clamped, trimmed or rejected.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product key as sent by the catalog source.
///
/// The fake-store API uses numbers, other sources use strings. Both are
/// accepted and compared structurally: `Number(1)` and `Text("1")` are
/// different ids.
///
/// Any other JSON id (negative, fractional, boolean, object) is kept as
/// `Text` holding its JSON rendering; a missing or null id is `Text("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::Text(String::new())
    }
}

impl From<Value> for ProductId {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(id) => ProductId::Number(id),
                None => ProductId::Text(n.to_string()),
            },
            Value::String(s) => ProductId::Text(s),
            Value::Null => ProductId::default(),
            other => ProductId::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ProductId::from)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

/// Parses ids coming from text inputs (query strings, command arguments).
///
/// All-digit input becomes `Number`, anything else `Text`.
impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map(ProductId::Number)
            .unwrap_or_else(|_| ProductId::Text(s.to_string())))
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Customer rating attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, nominally 0 to 5.
    #[serde(default, deserialize_with = "lenient_number")]
    pub rate: f64,

    /// Number of ratings.
    #[serde(default, deserialize_with = "lenient")]
    pub count: u32,
}

// =============================================================================
// Lenient Field Decoding
// =============================================================================

/// Decodes a field, taking its default when the value is null or of the
/// wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Like [`lenient`], but numeric strings such as `"10.5"` are read as numbers.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

// =============================================================================
// Product
// =============================================================================

/// A product as received from the catalog source.
///
/// Field names follow the wire format of the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique key (number or string).
    #[serde(default)]
    pub id: ProductId,

    /// Display title.
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,

    /// Price in the source currency unit.
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,

    /// Image URL.
    #[serde(default, deserialize_with = "lenient")]
    pub image: String,

    /// Category name, used by the category filter.
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,

    /// Long description.
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,

    /// Rating, absent when the source omits it or sends something that is
    /// not an object.
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Returns the rating score, if the product carries one.
    #[inline]
    pub fn rate(&self) -> Option<f64> {
        self.rating.map(|r| r.rate)
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// Owned copy of the product fields captured when a product is added to the
/// cart or the wishlist.
///
/// ## Snapshot Pattern
/// A snapshot never points back into the catalog. If the catalog is
/// re-fetched with a new price, snapshots keep the price seen at add-time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    /// Rating score only (the count is not carried).
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        ProductSnapshot {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: product.image.clone(),
            rating: product.rate(),
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

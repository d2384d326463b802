//! # Catalog Intents
//!
//! The catalog fetch and the home page listing.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    fetch_catalog                                        │
//! │                                                                         │
//! │  lock ─► Pending ─► unlock                                              │
//! │                        │                                                │
//! │                        ▼                                                │
//! │              source.fetch_products().await   (no lock held)            │
//! │                        │                                                │
//! │           ┌────────────┴─────────────┐                                  │
//! │           ▼                          ▼                                  │
//! │  lock ─► Fulfilled(list)    lock ─► Rejected(message)                   │
//! │          list replaced              list kept                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Overlapping fetches are not cancelled. Whichever completes last wins.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use shopee_catalog::CatalogSource;
use shopee_core::view::{
    categories, category_label, filter_and_sort, truncate_with_ellipsis, CatalogSummary,
    CategoryFilter, SortOrder, StarRating, CARD_DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
use shopee_core::{CatalogEvent, Product, ProductId};

use crate::error::ApiError;
use crate::state::{AppState, CatalogState, ConfigState};

/// Outcome of a successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchReport {
    pub product_count: usize,
    pub elapsed_ms: u64,
    pub completed_at: DateTime<Utc>,
}

/// Runs one fetch against `source` and records its outcome in the catalog.
///
/// On failure the error is stored in the catalog (the previous list stays)
/// and also returned, so callers can log it.
pub async fn fetch_catalog<S: CatalogSource>(
    catalog: &CatalogState,
    source: &S,
) -> Result<FetchReport, ApiError> {
    let started = Instant::now();
    catalog.write(|c| c.apply(CatalogEvent::Pending));
    debug!("fetch_catalog intent: pending");

    match source.fetch_products().await {
        Ok(products) => {
            let product_count = products.len();
            catalog.write(|c| c.apply(CatalogEvent::Fulfilled(products)));

            let report = FetchReport {
                product_count,
                elapsed_ms: started.elapsed().as_millis() as u64,
                completed_at: Utc::now(),
            };
            info!(
                products = report.product_count,
                elapsed_ms = report.elapsed_ms,
                "Catalog fetch fulfilled"
            );
            Ok(report)
        }
        Err(err) => {
            warn!(error = %err, "Catalog fetch rejected");
            catalog.write(|c| c.apply(CatalogEvent::Rejected(Some(err.to_string()))));
            Err(ApiError::from(err))
        }
    }
}

// =============================================================================
// Home Page Listing
// =============================================================================

/// One entry of the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
}

/// Product card as rendered on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
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
    pub review_count: Option<u32>,
    pub in_cart: bool,
    pub in_wishlist: bool,
}

impl ProductCard {
    fn new(product: &Product, config: &ConfigState, in_cart: bool, in_wishlist: bool) -> Self {
        ProductCard {
            product_id: product.id.clone(),
            title: truncate_with_ellipsis(&product.title, TITLE_MAX_CHARS),
            full_title: product.title.clone(),
            price: product.price,
            display_price: config.format_price(product.price),
            image_url: product.image.clone(),
            category: product.category.clone(),
            description: truncate_with_ellipsis(&product.description, CARD_DESCRIPTION_MAX_CHARS),
            rating: product.rate(),
            stars: product.rate().map(StarRating::from_rate),
            review_count: product.rating.map(|r| r.count),
            in_cart,
            in_wishlist,
        }
    }
}

/// Everything the home page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<ProductCard>,
    pub categories: Vec<CategoryOption>,
    pub summary: CatalogSummary,
    pub loading: bool,
    pub error: Option<String>,
}

/// Lists the catalog for the home page.
///
/// ## Arguments
/// * `category` - Category key, or `"all"`
/// * `sort` - One of `default`, `name`, `price-low`, `price-high`, `rating`
pub fn get_catalog(state: &AppState, category: &str, sort: &str) -> Result<CatalogResponse, ApiError> {
    debug!(category = %category, sort = %sort, "get_catalog intent");
    let order: SortOrder = sort.parse()?;
    let filter = CategoryFilter::from(category);

    let cart_ids: HashSet<ProductId> = state
        .cart
        .read(|c| c.all_cart_items().iter().map(|l| l.product_id.clone()).collect());
    let wishlist_ids: HashSet<ProductId> = state
        .wishlist
        .read(|w| w.all_wishlist_items().iter().map(|e| e.product_id.clone()).collect());

    let response = state.catalog.read(|c| {
        let products = c.all_products();
        let shown = filter_and_sort(products, &filter, order);
        let cards: Vec<ProductCard> = shown
            .iter()
            .map(|p| {
                ProductCard::new(
                    p,
                    &state.config,
                    cart_ids.contains(&p.id),
                    wishlist_ids.contains(&p.id),
                )
            })
            .collect();

        CatalogResponse {
            summary: CatalogSummary::new(products, cards.len()),
            products: cards,
            categories: categories(products)
                .into_iter()
                .map(|key| CategoryOption {
                    label: category_label(&key),
                    key,
                })
                .collect(),
            loading: c.is_loading(),
            error: c.has_error().then(|| c.last_error().to_string()),
        }
    });

    Ok(response)
}

//! Recency ordering and run counters.

use std::cmp::Reverse;

use revfeed_core::{OrderReview, Product};
use serde::{Deserialize, Serialize};

use crate::dedup::DedupOutcome;

/// Counters reported in the product review output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStats {
    pub products_count: usize,
    pub reviews_raw_count: usize,
    pub reviews_saved_count: usize,
    pub duplicates_within_product_skipped: usize,
    /// Number of fingerprints kept under two or more products.
    pub cross_product_duplicates_count: usize,
}

impl ProductStats {
    #[must_use]
    pub fn from_outcome(outcome: &DedupOutcome) -> Self {
        Self {
            products_count: outcome.products.len(),
            reviews_raw_count: outcome.reviews_raw_count,
            reviews_saved_count: outcome.products.iter().map(|p| p.reviews.len()).sum(),
            duplicates_within_product_skipped: outcome.duplicates_within_product_skipped,
            cross_product_duplicates_count: outcome.cross_product_duplicates.len(),
        }
    }
}

/// Sort order reviews newest first. Ties keep feed order.
pub fn sort_order_reviews(reviews: &mut [OrderReview]) {
    reviews.sort_by_key(|r| Reverse(r.unix_timestamp));
}

/// Sort each product's reviews newest first, then sort products by their
/// newest review. Products without reviews count as timestamp `0`. Ties keep
/// feed order.
pub fn sort_products(products: &mut [Product]) {
    for product in products.iter_mut() {
        product.reviews.sort_by_key(|r| Reverse(r.unix_timestamp));
    }
    products.sort_by_key(|p| Reverse(p.newest_review_timestamp()));
}

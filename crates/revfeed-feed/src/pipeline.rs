//! Feed body to output payload, without touching the network or disk.

use crate::aggregate::{sort_order_reviews, sort_products, ProductStats};
use crate::dedup::dedup_products;
use crate::error::FeedError;
use crate::extract::{extract_order_reviews, extract_products};
use crate::output::{OrderReviewsPayload, ProductReviewsPayload};

/// Extract and order the reviews of an order review feed.
///
/// # Errors
///
/// Propagates document-level extraction errors.
pub fn build_order_payload(xml: &str, generated_at: i64) -> Result<OrderReviewsPayload, FeedError> {
    let mut reviews = extract_order_reviews(xml)?;
    sort_order_reviews(&mut reviews);

    Ok(OrderReviewsPayload {
        generated_at,
        count: reviews.len(),
        reviews,
    })
}

/// Extract, deduplicate, and order a product review feed.
///
/// # Errors
///
/// Propagates document-level extraction errors.
pub fn build_product_payload(
    xml: &str,
    generated_at: i64,
) -> Result<ProductReviewsPayload, FeedError> {
    let feed = extract_products(xml)?;
    let mut outcome = dedup_products(feed);
    sort_products(&mut outcome.products);
    let stats = ProductStats::from_outcome(&outcome);

    if stats.duplicates_within_product_skipped > 0 || stats.cross_product_duplicates_count > 0 {
        tracing::info!(
            skipped = stats.duplicates_within_product_skipped,
            cross_product = stats.cross_product_duplicates_count,
            "duplicate reviews detected"
        );
    }

    Ok(ProductReviewsPayload {
        generated_at,
        stats,
        cross_product_duplicates: outcome.cross_product_duplicates,
        products: outcome.products,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

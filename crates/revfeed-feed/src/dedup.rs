//! Within-product deduplication and the cross-product duplicate index.

use std::collections::{BTreeMap, HashMap, HashSet};

use revfeed_core::{Product, ProductReview};
use serde::{Deserialize, Serialize};

use crate::fingerprint::fingerprint;
use crate::types::{FeedProduct, FeedProductReview};

/// Identity of a product that owns a duplicated fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub ean: String,
    pub url: String,
    pub product_name: String,
}

impl ProductRef {
    fn of(product: &FeedProduct) -> Self {
        Self {
            ean: product.ean.clone(),
            url: product.url.clone(),
            product_name: product.product_name.clone(),
        }
    }
}

/// Fingerprint -> owning products, for fingerprints kept under two or more
/// products.
pub type CrossProductDuplicates = BTreeMap<String, Vec<ProductRef>>;

/// Result of [`dedup_products`]. Products and reviews keep feed order.
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    pub products: Vec<Product>,
    pub cross_product_duplicates: CrossProductDuplicates,
    /// Reviews seen in the feed before any were dropped.
    pub reviews_raw_count: usize,
    pub duplicates_within_product_skipped: usize,
}

/// Fingerprint every review, drop repeats within the same product, and index
/// fingerprints shared between products.
///
/// The first occurrence of a fingerprint within a product is kept. A
/// fingerprint kept under several products stays in each of them and is
/// listed once per owning product in `cross_product_duplicates`.
#[must_use]
pub fn dedup_products(feed: Vec<FeedProduct>) -> DedupOutcome {
    let mut outcome = DedupOutcome::default();
    let mut owners: HashMap<String, Vec<ProductRef>> = HashMap::new();

    for feed_product in feed {
        let owner = ProductRef::of(&feed_product);
        let mut seen: HashSet<String> = HashSet::new();
        let mut reviews = Vec::with_capacity(feed_product.reviews.len());

        for raw in feed_product.reviews {
            outcome.reviews_raw_count += 1;
            let fp = fingerprint(&raw);
            if !seen.insert(fp.clone()) {
                tracing::debug!(
                    ean = %owner.ean,
                    rating_id = %raw.rating_id,
                    fingerprint = %fp,
                    "skipping duplicate review within product"
                );
                outcome.duplicates_within_product_skipped += 1;
                continue;
            }
            owners.entry(fp.clone()).or_default().push(owner.clone());
            reviews.push(into_review(raw, fp));
        }

        outcome.products.push(Product {
            product_name: feed_product.product_name,
            url: feed_product.url,
            price: feed_product.price,
            ean: feed_product.ean,
            reviews_count: reviews.len(),
            reviews,
        });
    }

    outcome.cross_product_duplicates = owners
        .into_iter()
        .filter(|(_, products)| products.len() > 1)
        .collect();

    outcome
}

fn into_review(raw: FeedProductReview, fingerprint: String) -> ProductReview {
    ProductReview {
        rating_id: raw.rating_id,
        rating_id_type: raw.rating_id_type,
        unix_timestamp: raw.unix_timestamp,
        rating: raw.rating,
        pros: raw.pros,
        cons: raw.cons,
        summary: raw.summary,
        recommends: raw.recommends,
        fingerprint,
    }
}

#[cfg(test)]
#[path = "dedup_test.rs"]
mod tests;

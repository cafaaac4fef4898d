use serde::{Deserialize, Serialize};

/// A product from the product review feed together with the reviews kept for
/// it after deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_name: String,
    /// Canonical product page URL.
    pub url: String,
    /// Price without VAT. `None` when missing or unparseable.
    pub price: Option<f64>,
    pub ean: String,
    pub reviews_count: usize,
    /// Newest first.
    pub reviews: Vec<ProductReview>,
}

impl Product {
    /// Timestamp of the newest review, or `0` when the product has none.
    ///
    /// Assumes `reviews` is already sorted newest first.
    #[must_use]
    pub fn newest_review_timestamp(&self) -> i64 {
        self.reviews.first().map_or(0, |r| r.unix_timestamp)
    }
}

/// A single review under a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReview {
    /// Upstream identifier. Not stable across exports.
    pub rating_id: String,
    /// `offer` or `product`, depending on what the review was written against.
    pub rating_id_type: String,
    pub unix_timestamp: i64,
    pub rating: Option<f64>,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    pub recommends: String,
    /// Content hash over everything except `rating_id` and `rating_id_type`.
    pub fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_review(ts: i64) -> ProductReview {
        ProductReview {
            rating_id: format!("r-{ts}"),
            rating_id_type: "product".to_string(),
            unix_timestamp: ts,
            rating: Some(5.0),
            pros: "Rychlé".to_string(),
            cons: String::new(),
            summary: "Spokojenost".to_string(),
            recommends: "1".to_string(),
            fingerprint: String::new(),
        }
    }

    fn make_product(reviews: Vec<ProductReview>) -> Product {
        Product {
            product_name: "Konvice 1,7 l".to_string(),
            url: "https://example.cz/konvice".to_string(),
            price: Some(899.0),
            ean: "8590000000001".to_string(),
            reviews_count: reviews.len(),
            reviews,
        }
    }

    #[test]
    fn newest_review_timestamp_uses_first_review() {
        let product = make_product(vec![make_review(300), make_review(100)]);
        assert_eq!(product.newest_review_timestamp(), 300);
    }

    #[test]
    fn newest_review_timestamp_is_zero_without_reviews() {
        let product = make_product(vec![]);
        assert_eq!(product.newest_review_timestamp(), 0);
    }

    #[test]
    fn product_serializes_non_ascii_verbatim() {
        let product = make_product(vec![make_review(1)]);
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("Rychlé"));
        assert!(json.contains("\"price\":899.0"));
    }

    #[test]
    fn missing_price_serializes_as_null() {
        let mut product = make_product(vec![]);
        product.price = None;
        let json = serde_json::to_value(&product).unwrap();
        assert!(json["price"].is_null());
    }
}

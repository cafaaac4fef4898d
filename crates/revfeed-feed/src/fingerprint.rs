//! Content fingerprints for product reviews.
//!
//! The upstream `rating_id` is reassigned between exports, so identity is
//! derived from content instead. The field order below is fixed; changing it
//! changes every fingerprint.

use sha2::{Digest, Sha256};

use crate::parse_helpers::normalize_whitespace;
use crate::types::FeedProductReview;

/// Compute the content fingerprint of a product review.
///
/// SHA-256 over `unix_timestamp || rating || pros || cons || summary ||
/// recommends`, NUL-separated. Free text is whitespace-normalized; a missing
/// rating contributes an empty string. `rating_id` and `rating_id_type` are
/// not part of the input. Hex-encoded.
#[must_use]
pub fn fingerprint(review: &FeedProductReview) -> String {
    let rating = review.rating.map(|r| r.to_string()).unwrap_or_default();
    let input = format!(
        "{}\x00{}\x00{}\x00{}\x00{}\x00{}",
        review.unix_timestamp,
        rating,
        normalize_whitespace(&review.pros),
        normalize_whitespace(&review.cons),
        normalize_whitespace(&review.summary),
        review.recommends.trim(),
    );
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

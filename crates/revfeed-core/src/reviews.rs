use serde::{Deserialize, Serialize};

/// A shop review attached to a completed order, as exported by the order
/// review feed.
///
/// Text fields are empty strings when the feed omits them. Rating fields are
/// `None` when the element is missing or its value does not parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReview {
    pub rating_id: String,
    /// `1` when the reviewer verifiably ordered, `0` otherwise.
    pub ordered: i64,
    pub unix_timestamp: i64,
    pub total_rating: Option<f64>,
    pub delivery_time: Option<f64>,
    pub transport_quality: Option<f64>,
    pub communication: Option<f64>,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    /// The shop's public reply, if any.
    pub reaction: String,
    /// Recommendation flag exactly as the feed spells it.
    pub recommends: String,
}

//! Maps feed XML into typed records.
//!
//! Only the document structure is validated. Missing child elements become
//! empty strings and numeric fields go through [`crate::parse_helpers`].

use revfeed_core::OrderReview;

use crate::error::FeedError;
use crate::parse_helpers::{parse_float, parse_int};
use crate::types::{FeedProduct, FeedProductReview};
use crate::xml::{parse_document, Element};

/// Extracts every `<review>` directly under the root of the order review feed,
/// in feed order.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] or [`FeedError::MalformedDocument`] when the
/// document itself cannot be read.
pub fn extract_order_reviews(xml: &str) -> Result<Vec<OrderReview>, FeedError> {
    let root = parse_document(xml)?;
    let reviews: Vec<OrderReview> = root.children_named("review").map(order_review).collect();
    tracing::debug!(root = %root.name, reviews = reviews.len(), "extracted order reviews");
    Ok(reviews)
}

/// Extracts every `<product>` directly under the root of the product review
/// feed together with the `<review>` elements of its first `<reviews>` child.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] or [`FeedError::MalformedDocument`] when the
/// document itself cannot be read.
pub fn extract_products(xml: &str) -> Result<Vec<FeedProduct>, FeedError> {
    let root = parse_document(xml)?;
    let products: Vec<FeedProduct> = root.children_named("product").map(product).collect();
    tracing::debug!(root = %root.name, products = products.len(), "extracted products");
    Ok(products)
}

fn order_review(el: &Element) -> OrderReview {
    OrderReview {
        rating_id: el.child_text("rating_id").to_string(),
        ordered: parse_int(el.child_text("ordered")),
        unix_timestamp: parse_int(el.child_text("unix_timestamp")),
        total_rating: parse_float(el.child_text("total_rating")),
        delivery_time: parse_float(el.child_text("delivery_time")),
        transport_quality: parse_float(el.child_text("transport_quality")),
        communication: parse_float(el.child_text("communication")),
        pros: el.child_text("pros").to_string(),
        cons: el.child_text("cons").to_string(),
        summary: el.child_text("summary").to_string(),
        reaction: el.child_text("reaction").to_string(),
        recommends: el.child_text("recommends").to_string(),
    }
}

fn product(el: &Element) -> FeedProduct {
    let reviews: Vec<FeedProductReview> = el
        .child("reviews")
        .map(|node| node.children_named("review").map(product_review).collect())
        .unwrap_or_default();

    FeedProduct {
        product_name: el.child_text("product_name").to_string(),
        url: el.child_text("url").to_string(),
        price: parse_float(el.child_text("price")),
        ean: el.child_text("ean").to_string(),
        reviews,
    }
}

fn product_review(el: &Element) -> FeedProductReview {
    FeedProductReview {
        rating_id: el.child_text("rating_id").to_string(),
        rating_id_type: el.child_text("rating_id_type").to_string(),
        unix_timestamp: parse_int(el.child_text("unix_timestamp")),
        rating: parse_float(el.child_text("rating")),
        pros: el.child_text("pros").to_string(),
        cons: el.child_text("cons").to_string(),
        summary: el.child_text("summary").to_string(),
        recommends: el.child_text("recommends").to_string(),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

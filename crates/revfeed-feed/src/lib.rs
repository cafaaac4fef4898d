//! Review export pipelines: fetch, extract, fingerprint, deduplicate, sort,
//! and write.

pub mod aggregate;
pub mod client;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod fingerprint;
pub mod output;
pub mod pipeline;
pub mod types;

mod parse_helpers;
mod xml;

pub use aggregate::ProductStats;
pub use client::FeedClient;
pub use dedup::{dedup_products, CrossProductDuplicates, DedupOutcome, ProductRef};
pub use error::FeedError;
pub use fingerprint::fingerprint;
pub use output::{write_json, OrderReviewsPayload, ProductReviewsPayload};
pub use pipeline::{build_order_payload, build_product_payload};
pub use types::{FeedProduct, FeedProductReview};

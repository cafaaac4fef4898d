//! Records as they come out of the product review feed, before
//! fingerprinting and deduplication.
//!
//! ## Observed feed shape
//!
//! ```xml
//! <products>
//!   <product>
//!     <product_name>...</product_name>
//!     <url>...</url>
//!     <price>1299,00</price>
//!     <ean>...</ean>
//!     <reviews>
//!       <review>
//!         <rating_id>...</rating_id>
//!         <rating_id_type>offer</rating_id_type>
//!         <unix_timestamp>...</unix_timestamp>
//!         <rating>4,5</rating>
//!         <pros>...</pros>
//!         <cons>...</cons>
//!         <summary>...</summary>
//!         <recommends>1</recommends>
//!       </review>
//!     </reviews>
//!   </product>
//! </products>
//! ```
//!
//! Decimal values may use a decimal comma. A grouped value such as
//! `1 299,00` does not parse and resolves to an absent price. `rating_id` is
//! reassigned between exports, so the same review can come back under a new id.

/// A `<product>` element with its raw `<review>` children, in feed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedProduct {
    pub product_name: String,
    pub url: String,
    pub price: Option<f64>,
    pub ean: String,
    pub reviews: Vec<FeedProductReview>,
}

/// A `<review>` element nested under a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedProductReview {
    pub rating_id: String,
    pub rating_id_type: String,
    pub unix_timestamp: i64,
    pub rating: Option<f64>,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    pub recommends: String,
}

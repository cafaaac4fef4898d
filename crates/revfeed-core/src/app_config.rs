use std::path::{Path, PathBuf};

/// Which of the two review exports a run works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Shop-level reviews tied to completed orders.
    Orders,
    /// Reviews grouped under the products they were written for.
    Products,
}

impl FeedKind {
    /// Export script name relative to the configured base URL.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            FeedKind::Orders => "export-review.php",
            FeedKind::Products => "export-product-review.php",
        }
    }

    /// Request timeout used when `REVFEED_REQUEST_TIMEOUT_SECS` is unset.
    /// The product export is larger and slower to generate upstream.
    #[must_use]
    pub fn default_timeout_secs(self) -> u64 {
        match self {
            FeedKind::Orders => 20,
            FeedKind::Products => 25,
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Orders => write!(f, "orders"),
            FeedKind::Products => write!(f, "products"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub log_level: String,
    pub order_reviews_path: PathBuf,
    pub product_reviews_path: PathBuf,
}

impl AppConfig {
    /// Effective request timeout for `kind`.
    #[must_use]
    pub fn timeout_secs(&self, kind: FeedKind) -> u64 {
        self.request_timeout_secs
            .unwrap_or_else(|| kind.default_timeout_secs())
    }

    /// Configured output file for `kind`.
    #[must_use]
    pub fn output_path(&self, kind: FeedKind) -> &Path {
        match kind {
            FeedKind::Orders => &self.order_reviews_path,
            FeedKind::Products => &self.product_reviews_path,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("order_reviews_path", &self.order_reviews_path)
            .field("product_reviews_path", &self.product_reviews_path)
            .finish()
    }
}

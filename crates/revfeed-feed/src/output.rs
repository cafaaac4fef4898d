//! Output payloads and the JSON file writer.

use std::fs;
use std::path::{Path, PathBuf};

use revfeed_core::{OrderReview, Product};
use serde::{Deserialize, Serialize};

use crate::aggregate::ProductStats;
use crate::dedup::CrossProductDuplicates;
use crate::error::FeedError;

/// Contents of the order review output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReviewsPayload {
    pub generated_at: i64,
    pub count: usize,
    /// Newest first.
    pub reviews: Vec<OrderReview>,
}

impl OrderReviewsPayload {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} reviews", self.count)
    }
}

/// Contents of the product review output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReviewsPayload {
    pub generated_at: i64,
    pub stats: ProductStats,
    pub cross_product_duplicates: CrossProductDuplicates,
    /// Most recently reviewed first.
    pub products: Vec<Product>,
}

impl ProductReviewsPayload {
    #[must_use]
    pub fn summary(&self) -> String {
        let s = &self.stats;
        format!(
            "{} products / {} reviews (raw {}, skipped {} duplicates, {} cross-product fingerprints)",
            s.products_count,
            s.reviews_saved_count,
            s.reviews_raw_count,
            s.duplicates_within_product_skipped,
            s.cross_product_duplicates_count,
        )
    }
}

/// Serialize `payload` as pretty-printed JSON and replace `path` with it.
///
/// Parent directories are created as needed. The JSON is written to a
/// sibling temporary file first and renamed over `path`, so `path` is never
/// left half-written.
///
/// # Errors
///
/// Returns [`FeedError::Serialize`] if the payload cannot be encoded, or
/// [`FeedError::Io`] if a directory or file operation fails.
pub fn write_json<T: Serialize>(path: &Path, payload: &T) -> Result<(), FeedError> {
    let mut body = serde_json::to_string_pretty(payload)?;
    body.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, body.as_bytes()).map_err(|e| io_error(&tmp, e))?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error(path, source));
    }

    tracing::info!(path = %path.display(), bytes = body.len(), "wrote output file");
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> FeedError {
    FeedError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;

use thiserror::Error;

/// Failures that abort a feed run.
///
/// Field-level problems never show up here; the extractor resolves them to
/// empty or absent values instead.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// `url` never includes the access key.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed feed document: {0}")]
    MalformedDocument(String),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

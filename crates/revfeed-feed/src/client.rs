//! HTTP client for the review export endpoints.
//!
//! One GET per run, no retries. Any transport failure or non-2xx status is
//! returned as an error and the caller aborts the run.

use std::time::Duration;

use reqwest::{Client, Url};
use revfeed_core::{AppConfig, FeedKind};

use crate::error::FeedError;

/// Client for the keyed review export endpoints.
///
/// Use [`FeedClient::from_config`] for production runs or
/// [`FeedClient::new`] to point at a mock server in tests.
pub struct FeedClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl FeedClient {
    /// Creates a client for `base_url` with a total request timeout of
    /// `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `base_url` does not parse, or
    /// [`FeedError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Endpoint names are joined onto the base, which only works when the
        // base path ends with a slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FeedError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
        })
    }

    /// Creates a client from application config, using the timeout that
    /// applies to `kind`.
    ///
    /// # Errors
    ///
    /// See [`FeedClient::new`].
    pub fn from_config(config: &AppConfig, kind: FeedKind) -> Result<Self, FeedError> {
        Self::new(
            &config.base_url,
            &config.api_key,
            config.timeout_secs(kind),
            &config.user_agent,
        )
    }

    /// Downloads the export for `kind` and returns the raw XML body.
    ///
    /// # Errors
    ///
    /// - [`FeedError::UnexpectedStatus`] for any non-2xx response.
    /// - [`FeedError::Http`] on network failure, timeout, or an unreadable body.
    /// - [`FeedError::InvalidUrl`] if the endpoint URL cannot be built.
    pub async fn fetch(&self, kind: FeedKind) -> Result<String, FeedError> {
        let endpoint = self.endpoint_url(kind)?;
        let mut url = endpoint.clone();
        url.query_pairs_mut().append_pair("key", &self.api_key);

        tracing::info!(feed = %kind, url = %endpoint, "fetching review feed");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/xml,text/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| FeedError::Http(e.without_url()))?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Http(e.without_url()))?;
        tracing::info!(feed = %kind, bytes = body.len(), "review feed downloaded");
        Ok(body)
    }

    /// Endpoint URL for `kind` without the access key.
    fn endpoint_url(&self, kind: FeedKind) -> Result<Url, FeedError> {
        self.base_url
            .join(kind.endpoint())
            .map_err(|e| FeedError::InvalidUrl {
                url: format!("{}{}", self.base_url, kind.endpoint()),
                reason: e.to_string(),
            })
    }
}

//! HTTP client for the remote offer search service.

mod origin;
mod parse;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tyrecmp_core::{Offer, SearchRequest};

use crate::error::SourceError;
use crate::source::OfferSource;

pub use origin::extract_host;
pub use parse::parse_offers;

/// Path of the search endpoint, relative to the configured base URL.
const SEARCH_PATH: &str = "offers/search";

/// [`OfferSource`] backed by the multi-vendor offer search service.
///
/// Issues one `GET /offers/search` per request. Any non-2xx status or
/// unreadable body is returned as an error; nothing is retried.
pub struct RemoteSource {
    client: Client,
    base_url: Url,
}

impl RemoteSource {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so joining the endpoint path appends to
        // the base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds the search URL with every query parameter percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if the endpoint path cannot
    /// be joined onto the base URL (e.g. a `data:` URL).
    fn search_url(&self, request: &SearchRequest) -> Result<Url, SourceError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| SourceError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let size = request.size();
        url.query_pairs_mut()
            .append_pair("width", &size.width)
            .append_pair("height", &size.aspect_height)
            .append_pair("rim", &size.rim_diameter)
            .append_pair("loadIndex", &size.load_index)
            .append_pair("speedIndex", &size.speed_symbol)
            .append_pair("brand", request.brand())
            .append_pair("sites", &request.sites_param());

        Ok(url)
    }
}

#[async_trait]
impl OfferSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    /// Queries the search service.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network or TLS failure.
    /// - [`SourceError::UnexpectedStatus`] for any non-2xx status.
    /// - [`SourceError::Deserialize`] / [`SourceError::InvalidOffer`] if the
    ///   body is not a valid offer array.
    async fn fetch(&self, request: &SearchRequest) -> Result<Vec<Offer>, SourceError> {
        let url = self.search_url(request)?;
        tracing::debug!(
            service = %extract_host(url.as_str()),
            sites = %request.sites_param(),
            "querying offer search service"
        );

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_offers(&body, url.as_str())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;

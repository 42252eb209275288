//! Thumbnail download over reqwest.

use async_trait::async_trait;
use kaltura_core::HttpConfig;
use kaltura_error::{KalturaResult, TransportError, TransportErrorKind};
use kaltura_interface::{FetchedResponse, HttpFetcher};
use reqwest::header::CONTENT_TYPE;

/// [`HttpFetcher`] backed by a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Create a fetcher with its own HTTP client.
    pub fn new(config: &HttpConfig) -> KalturaResult<Self> {
        Ok(Self::with_client(crate::build_http_client(config)?))
    }

    /// Create a fetcher sharing an existing reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    #[tracing::instrument(skip(self))]
    async fn get(&self, url: &str) -> KalturaResult<FetchedResponse> {
        let response = self.client.get(url).send().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Body {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })?;

        tracing::debug!(status, content_type = ?content_type, size = body.len(), "Fetched");
        Ok(FetchedResponse::new(status, content_type, body))
    }
}

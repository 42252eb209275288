//! Kaltura `api_v3` client.

use crate::{ThumbAssetDto, build_http_client, parse_response};
use async_trait::async_trait;
use kaltura_core::{HttpConfig, KalturaConfig, SessionStart, ThumbAsset};
use kaltura_error::{ApiError, ApiErrorKind, KalturaResult};
use kaltura_interface::{ApiResult, MediaApi};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// `format=1` asks the service for JSON.
const JSON_FORMAT: &str = "1";

/// Client for the three `api_v3` operations the thumbnail pipeline uses.
#[derive(Debug, Clone)]
pub struct KalturaClient {
    service_url: String,
    client: reqwest::Client,
}

impl KalturaClient {
    /// Create a client for `service_url` with its own HTTP client.
    #[instrument(skip(service_url, http), fields(service_url = %service_url.as_ref()))]
    pub fn new(service_url: impl AsRef<str>, http: &HttpConfig) -> KalturaResult<Self> {
        tracing::debug!("Creating Kaltura client");
        Ok(Self::with_client(service_url, build_http_client(http)?))
    }

    /// Create a client from the top-level configuration.
    pub fn from_config(config: &KalturaConfig) -> KalturaResult<Self> {
        Self::new(&config.server_url, &config.http)
    }

    /// Create a client sharing an existing reqwest client.
    pub fn with_client(service_url: impl AsRef<str>, client: reqwest::Client) -> Self {
        Self {
            service_url: service_url.as_ref().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Base URL of the service.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Endpoint for `service.action`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kaltura_client::KalturaClient;
    ///
    /// let client = KalturaClient::with_client("https://www.kaltura.com/", reqwest::Client::new());
    /// assert_eq!(
    ///     client.action_url("thumbasset", "getUrl"),
    ///     "https://www.kaltura.com/api_v3/service/thumbasset/action/getUrl"
    /// );
    /// ```
    pub fn action_url(&self, service: &str, action: &str) -> String {
        format!(
            "{}/api_v3/service/{}/action/{}",
            self.service_url, service, action
        )
    }

    async fn call<T: DeserializeOwned>(
        &self,
        service: &str,
        action: &str,
        mut params: Vec<(&'static str, String)>,
    ) -> ApiResult<T> {
        let url = self.action_url(service, action);
        params.push(("format", JSON_FORMAT.to_string()));

        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(service, action, error = %e, "Request failed");
                ApiError::new(ApiErrorKind::Http(format!("{}: {}", url, e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(service, action, status = status.as_u16(), "Service returned error");
            return Err(ApiError::new(ApiErrorKind::Status(status.as_u16())));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!(service, action, error = %e, "Failed to read response body");
            ApiError::new(ApiErrorKind::Http(format!("{}: {}", url, e)))
        })?;

        parse_response(&body).inspect_err(|e| {
            tracing::warn!(service, action, error = %e, "Service call did not succeed");
        })
    }
}

/// Form fields of a `session.start` call (without `format`).
///
/// # Examples
///
/// ```
/// use kaltura_client::session_start_params;
/// use kaltura_core::SessionStartBuilder;
///
/// let start = SessionStartBuilder::default()
///     .secret("s3cr3t")
///     .partner_id("101")
///     .build()
///     .unwrap();
/// let params = session_start_params(&start);
/// assert!(params.contains(&("type", "2".to_string())));
/// assert!(params.contains(&("expiry", "86400".to_string())));
/// ```
pub fn session_start_params(request: &SessionStart) -> Vec<(&'static str, String)> {
    vec![
        ("secret", request.secret().clone()),
        ("userId", request.user_id().clone()),
        ("type", request.session_type().wire_value().to_string()),
        ("partnerId", request.partner_id().clone()),
        ("expiry", request.expiry_secs().to_string()),
        ("privileges", request.privileges().clone()),
    ]
}

#[async_trait]
impl MediaApi for KalturaClient {
    #[instrument(
        skip(self, request),
        fields(partner_id = %request.partner_id(), session_type = %request.session_type())
    )]
    async fn start_session(&self, request: &SessionStart) -> ApiResult<String> {
        let ks: String = self
            .call("session", "start", session_start_params(request))
            .await?;
        tracing::debug!("Session started");
        Ok(ks)
    }

    #[instrument(skip(self, ks))]
    async fn list_thumb_assets(&self, ks: &str, entry_id: &str) -> ApiResult<Vec<ThumbAsset>> {
        let assets: Vec<ThumbAssetDto> = self
            .call(
                "thumbasset",
                "getByEntryId",
                vec![("ks", ks.to_string()), ("entryId", entry_id.to_string())],
            )
            .await?;
        tracing::debug!(count = assets.len(), "Listed thumbnail assets");
        Ok(assets.into_iter().map(ThumbAsset::from).collect())
    }

    #[instrument(skip(self, ks))]
    async fn thumb_asset_url(&self, ks: &str, asset_id: &str) -> ApiResult<String> {
        self.call(
            "thumbasset",
            "getUrl",
            vec![("ks", ks.to_string()), ("id", asset_id.to_string())],
        )
        .await
    }
}

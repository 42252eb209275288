//! Shared reqwest client construction.

use kaltura_core::HttpConfig;
use kaltura_error::{ConfigError, KalturaResult};

/// Build a reqwest client honoring the configured timeout and user agent.
#[tracing::instrument(skip(config), fields(timeout_secs = ?config.timeout_secs))]
pub fn build_http_client(config: &HttpConfig) -> KalturaResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    let client = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

    tracing::debug!("Built HTTP client");
    Ok(client)
}

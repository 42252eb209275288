//! Types shared by the capability traits.

use bytes::Bytes;
use derive_getters::Getters;
use kaltura_error::ApiError;

/// Result of a remote media API call.
pub type ApiResult<T> = Result<T, ApiError>;

/// A completed HTTP GET, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FetchedResponse {
    status: u16,
    content_type: Option<String>,
    body: Bytes,
}

impl FetchedResponse {
    /// Create a response.
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Whether the status is exactly 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A metadata attribute a media source can provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataAttribute {
    /// Machine name, e.g. `thumbnail_uri`
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

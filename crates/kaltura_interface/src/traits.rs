//! Trait definitions for the pipeline's collaborators.

use crate::{ApiResult, FetchedResponse, MetadataAttribute};
use async_trait::async_trait;
use kaltura_core::{MediaItem, Session, SessionStart, ThumbAsset};
use kaltura_error::KalturaResult;

/// The three remote operations the thumbnail pipeline needs.
///
/// Implementations are thin RPC clients; they do not interpret results
/// beyond decoding them.
#[async_trait]
pub trait MediaApi: Send + Sync {
    /// Start a session and return its token (the "KS").
    ///
    /// For admin sessions the service ignores `request.privileges()`.
    async fn start_session(&self, request: &SessionStart) -> ApiResult<String>;

    /// List the thumbnail assets of an entry, in service order.
    async fn list_thumb_assets(&self, ks: &str, entry_id: &str) -> ApiResult<Vec<ThumbAsset>>;

    /// Resolve a download URL for a thumbnail asset.
    async fn thumb_asset_url(&self, ks: &str, asset_id: &str) -> ApiResult<String>;
}

/// HTTP GET returning status, content type and body.
///
/// Non-200 statuses are returned as `Ok`; only failing to get a response at
/// all is an error.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// Fetch `url`.
    async fn get(&self, url: &str) -> KalturaResult<FetchedResponse>;
}

/// Source of authenticated sessions.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Return a session valid at the time of the call.
    async fn session(&self) -> KalturaResult<Session>;

    /// Drop any session held for reuse.
    async fn invalidate(&self) {}
}

/// A media source type as seen by the host CMS.
#[async_trait]
pub trait MediaSource: Send + Sync {
    /// Registry id (e.g. `"kaltura"`).
    fn id(&self) -> &str;

    /// Human-readable label.
    fn label(&self) -> &str;

    /// Attributes [`MediaSource::metadata`] can answer.
    fn metadata_attributes(&self) -> Vec<MetadataAttribute>;

    /// Value of `attribute` for `item`, or `None` if unknown or unavailable.
    async fn metadata(&self, item: &MediaItem, attribute: &str) -> Option<String>;

    /// Thumbnail the host should show when no metadata thumbnail exists.
    fn default_thumbnail_filename(&self) -> &str {
        "generic.png"
    }
}

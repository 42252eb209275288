//! Kaltura media source.

use crate::AssetResolver;
use async_trait::async_trait;
use kaltura_client::{KalturaClient, ReqwestFetcher};
use kaltura_core::{
    CachedFile, KALTURA_SOURCE_ID, KalturaConfig, KeySource, MediaEntry, MediaItem,
    THUMBNAIL_URI,
};
use kaltura_error::{
    KalturaError, KalturaErrorKind, KalturaResult, ResolutionError, ResolutionErrorKind,
};
use kaltura_interface::{HttpFetcher, MediaApi, MediaSource, MetadataAttribute, SessionProvider};
use kaltura_session::session_provider_for;
use kaltura_storage::ThumbnailCache;
use std::sync::Arc;

/// Media source for videos hosted on Kaltura.
///
/// Runs session, resolution and caching in order for each item. Nothing
/// here retries: any failure ends the lookup.
pub struct KalturaMediaSource {
    sessions: Arc<dyn SessionProvider>,
    resolver: AssetResolver,
    cache: ThumbnailCache,
    thumbnails_directory: String,
    key_source: KeySource,
}

impl KalturaMediaSource {
    /// Assemble a source from its parts.
    ///
    /// Thumbnails are keyed by asset id unless changed with
    /// [`with_key_source`](Self::with_key_source).
    pub fn new(
        sessions: Arc<dyn SessionProvider>,
        resolver: AssetResolver,
        cache: ThumbnailCache,
        thumbnails_directory: impl Into<String>,
    ) -> Self {
        Self {
            sessions,
            resolver,
            cache,
            thumbnails_directory: thumbnails_directory.into(),
            key_source: KeySource::AssetId,
        }
    }

    /// Choose which id names the cached file.
    pub fn with_key_source(mut self, key_source: KeySource) -> Self {
        self.key_source = key_source;
        self
    }

    /// Build a source talking to the configured Kaltura server over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an HTTP client
    /// cannot be built.
    pub fn from_config(config: &KalturaConfig) -> KalturaResult<Self> {
        config.validate()?;
        let api = Arc::new(KalturaClient::from_config(config)?);
        let fetcher = Arc::new(ReqwestFetcher::new(&config.http)?);
        Ok(Self::with_collaborators(config, api, fetcher))
    }

    /// Build a source from configuration and explicit collaborators.
    pub fn with_collaborators(
        config: &KalturaConfig,
        api: Arc<dyn MediaApi>,
        fetcher: Arc<dyn HttpFetcher>,
    ) -> Self {
        let sessions = session_provider_for(api.clone(), config);
        let resolver = AssetResolver::new(api);
        let cache = ThumbnailCache::from_config(fetcher, config);
        Self::new(sessions, resolver, cache, config.thumbnails_directory.as_str())
            .with_key_source(config.cache.key)
    }

    /// Directory thumbnails are stored in.
    pub fn thumbnails_directory(&self) -> &str {
        &self.thumbnails_directory
    }

    /// Local thumbnail URI for `item`, or `None` if any step fails.
    ///
    /// Failures are logged; the host should fall back to
    /// [`default_thumbnail_filename`](MediaSource::default_thumbnail_filename).
    pub async fn thumbnail_uri(&self, item: &MediaItem) -> Option<String> {
        match self.try_thumbnail(item).await {
            Ok(file) => Some(file.uri().clone()),
            Err(e) => {
                tracing::error!(
                    entry_id = %item.source_value(),
                    error = %e,
                    "No thumbnail for media item"
                );
                None
            }
        }
    }

    /// Fetch and cache the thumbnail of `item`, keeping the error.
    pub async fn try_thumbnail(&self, item: &MediaItem) -> KalturaResult<CachedFile> {
        self.try_thumbnail_in(item, &self.thumbnails_directory).await
    }

    /// Like [`try_thumbnail`](Self::try_thumbnail), storing under
    /// `destination_dir` instead of the configured directory.
    #[tracing::instrument(
        skip(self, item),
        fields(source_id = %item.source_id(), entry_id = %item.source_value())
    )]
    pub async fn try_thumbnail_in(
        &self,
        item: &MediaItem,
        destination_dir: &str,
    ) -> KalturaResult<CachedFile> {
        if item.source_id() != KALTURA_SOURCE_ID {
            tracing::warn!("Media item does not belong to this source");
            return Err(ResolutionError::new(ResolutionErrorKind::InvalidEntryId(format!(
                "{} item {}",
                item.source_id(),
                item.source_value()
            )))
            .into());
        }
        if item.source_value().trim().is_empty() {
            tracing::warn!("Media item has an empty entry id");
            return Err(ResolutionError::new(ResolutionErrorKind::InvalidEntryId(
                item.source_value().clone(),
            ))
            .into());
        }

        let session = self.sessions.session().await?;
        let entry = MediaEntry::new(item.source_value().trim(), session.partner_id().as_str());

        let thumbnail = match self.resolver.resolve_entry(Some(&session), &entry).await {
            Ok(thumbnail) => thumbnail,
            Err(e) => {
                if is_service_failure(&e) {
                    // The session may be the reason the service refused.
                    self.sessions.invalidate().await;
                }
                return Err(e);
            }
        };

        let stable_key = match self.key_source {
            KeySource::AssetId => thumbnail.asset_id(),
            KeySource::EntryId => thumbnail.entry_id(),
        };

        let file = self
            .cache
            .fetch_or_get(thumbnail.url(), stable_key, destination_dir)
            .await?;

        tracing::info!(asset_id = %thumbnail.asset_id(), uri = %file.uri(), "Thumbnail cached");
        Ok(file)
    }
}

fn is_service_failure(error: &KalturaError) -> bool {
    match error.kind() {
        KalturaErrorKind::Resolution(e) => {
            matches!(e.kind, ResolutionErrorKind::ServiceUnavailable(_))
        }
        _ => false,
    }
}

#[async_trait]
impl MediaSource for KalturaMediaSource {
    fn id(&self) -> &str {
        KALTURA_SOURCE_ID
    }

    fn label(&self) -> &str {
        "Kaltura"
    }

    fn metadata_attributes(&self) -> Vec<MetadataAttribute> {
        vec![MetadataAttribute {
            name: THUMBNAIL_URI,
            label: "Local URI of the thumbnail",
        }]
    }

    async fn metadata(&self, item: &MediaItem, attribute: &str) -> Option<String> {
        match attribute {
            THUMBNAIL_URI => self.thumbnail_uri(item).await,
            other => {
                tracing::debug!(attribute = other, "Unknown metadata attribute");
                None
            }
        }
    }
}

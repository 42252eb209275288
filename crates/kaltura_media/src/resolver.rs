//! Thumbnail asset resolution.

use kaltura_core::{MediaEntry, Session, ThumbnailRef};
use kaltura_error::{KalturaResult, ResolutionError, ResolutionErrorKind};
use kaltura_interface::MediaApi;
use std::sync::Arc;

/// Resolves an entry to its first thumbnail asset and download URL.
pub struct AssetResolver {
    api: Arc<dyn MediaApi>,
}

impl AssetResolver {
    /// Create a resolver over the given API.
    pub fn new(api: Arc<dyn MediaApi>) -> Self {
        Self { api }
    }

    /// Resolve the first thumbnail asset of `entry` with a session of its
    /// owning partner.
    ///
    /// A session started for another partner counts as no session.
    pub async fn resolve_entry(
        &self,
        session: Option<&Session>,
        entry: &MediaEntry,
    ) -> KalturaResult<ThumbnailRef> {
        if let Some(other) = session.filter(|s| s.partner_id() != entry.partner_id()) {
            tracing::warn!(
                entry_id = %entry.entry_id(),
                entry_partner = %entry.partner_id(),
                session_partner = %other.partner_id(),
                "Session belongs to another partner"
            );
            return Err(fail(ResolutionErrorKind::NoSession(entry.entry_id().clone())));
        }
        self.resolve_thumbnail(session, entry.entry_id()).await
    }

    /// Resolve the first thumbnail asset of `entry_id`.
    ///
    /// An expired session counts as no session. The returned URL is
    /// volatile and must not be used as a cache key.
    ///
    /// # Errors
    ///
    /// One [`ResolutionErrorKind`] per failure: `NoSession`,
    /// `InvalidEntryId`, `ServiceUnavailable` (either remote call failed),
    /// `EmptyCollection` and `EmptyUrl`.
    #[tracing::instrument(skip(self, session), fields(has_session = session.is_some()))]
    pub async fn resolve_thumbnail(
        &self,
        session: Option<&Session>,
        entry_id: &str,
    ) -> KalturaResult<ThumbnailRef> {
        let Some(session) = session.filter(|s| s.is_valid()) else {
            tracing::warn!(entry_id, "No valid session to resolve thumbnail");
            return Err(fail(ResolutionErrorKind::NoSession(entry_id.to_string())));
        };

        if entry_id.trim().is_empty() {
            tracing::warn!("Cannot resolve thumbnail for empty entry id");
            return Err(fail(ResolutionErrorKind::InvalidEntryId(entry_id.to_string())));
        }

        let assets = self
            .api
            .list_thumb_assets(session.token(), entry_id)
            .await
            .map_err(|e| {
                tracing::error!(entry_id, error = %e, "Listing thumbnail assets failed");
                fail(ResolutionErrorKind::ServiceUnavailable(format!(
                    "listing assets of entry {}: {}",
                    entry_id, e.kind
                )))
            })?;

        let Some(asset) = assets.first() else {
            tracing::warn!(entry_id, "Entry has no thumbnail assets");
            return Err(fail(ResolutionErrorKind::EmptyCollection(entry_id.to_string())));
        };
        tracing::debug!(
            entry_id,
            asset_id = %asset.id(),
            count = assets.len(),
            "Selected first thumbnail asset"
        );

        let url = self
            .api
            .thumb_asset_url(session.token(), asset.id())
            .await
            .map_err(|e| {
                tracing::error!(
                    entry_id,
                    asset_id = %asset.id(),
                    error = %e,
                    "Resolving thumbnail URL failed"
                );
                fail(ResolutionErrorKind::ServiceUnavailable(format!(
                    "url of asset {}: {}",
                    asset.id(),
                    e.kind
                )))
            })?;

        if url.trim().is_empty() {
            tracing::warn!(entry_id, asset_id = %asset.id(), "Thumbnail asset has an empty URL");
            return Err(fail(ResolutionErrorKind::EmptyUrl(asset.id().clone())));
        }

        Ok(ThumbnailRef::new(asset.id().as_str(), entry_id, url.trim()))
    }
}

#[track_caller]
fn fail(kind: ResolutionErrorKind) -> kaltura_error::KalturaError {
    ResolutionError::new(kind).into()
}

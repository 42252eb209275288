//! Media source registry.

use kaltura_core::MediaItem;
use kaltura_interface::MediaSource;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Media sources keyed by their id.
///
/// Replaces any "does this item belong to source X" check: an item is
/// handled by the source registered under its `source_id`.
#[derive(Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, Arc<dyn MediaSource>>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under its id, replacing any previous one.
    pub fn register(&mut self, source: Arc<dyn MediaSource>) {
        let id = source.id().to_string();
        if self.sources.insert(id.clone(), source).is_some() {
            tracing::warn!(source_id = %id, "Replaced registered media source");
        } else {
            tracing::debug!(source_id = %id, "Registered media source");
        }
    }

    /// Source registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn MediaSource>> {
        self.sources.get(id)
    }

    /// Source responsible for `item`.
    pub fn source_for(&self, item: &MediaItem) -> Option<&Arc<dyn MediaSource>> {
        self.get(item.source_id())
    }

    /// Metadata `attribute` of `item` from its source.
    ///
    /// `None` if no source handles the item or the source has no value.
    pub async fn metadata(&self, item: &MediaItem, attribute: &str) -> Option<String> {
        let Some(source) = self.source_for(item) else {
            tracing::debug!(source_id = %item.source_id(), "No media source registered");
            return None;
        };
        source.metadata(item, attribute).await
    }

    /// Registered source ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Get the number of registered sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if no sources are registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kaltura_interface::MetadataAttribute;

    struct StaticSource {
        id: &'static str,
        value: &'static str,
    }

    #[async_trait]
    impl MediaSource for StaticSource {
        fn id(&self) -> &str {
            self.id
        }

        fn label(&self) -> &str {
            "Static"
        }

        fn metadata_attributes(&self) -> Vec<MetadataAttribute> {
            vec![MetadataAttribute {
                name: "thumbnail_uri",
                label: "Thumbnail",
            }]
        }

        async fn metadata(&self, _item: &MediaItem, attribute: &str) -> Option<String> {
            (attribute == "thumbnail_uri").then(|| self.value.to_string())
        }
    }

    fn source(id: &'static str, value: &'static str) -> Arc<dyn MediaSource> {
        Arc::new(StaticSource { id, value })
    }

    #[test]
    fn test_registry_creation() {
        let registry = SourceRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(registry.get("kaltura").is_none());
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = SourceRegistry::new();
        registry.register(source("kaltura", "first"));
        registry.register(source("youtube", "other"));
        registry.register(source("kaltura", "second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["kaltura", "youtube"]);
    }

    #[tokio::test]
    async fn test_dispatch_by_source_id() {
        let mut registry = SourceRegistry::new();
        registry.register(source("kaltura", "public://kaltura_thumbnails/a.jpg"));
        registry.register(source("youtube", "public://youtube/b.jpg"));

        let item = MediaItem::kaltura("0_abc123");
        assert_eq!(
            registry.metadata(&item, "thumbnail_uri").await.as_deref(),
            Some("public://kaltura_thumbnails/a.jpg")
        );
        assert_eq!(registry.metadata(&item, "duration").await, None);

        let unknown = MediaItem::new("vimeo", "42");
        assert!(registry.source_for(&unknown).is_none());
        assert_eq!(registry.metadata(&unknown, "thumbnail_uri").await, None);
    }
}

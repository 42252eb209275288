//! End-to-end tests for the Kaltura media source with mocked remotes.

mod test_utils;

use kaltura_core::{KeySource, MediaItem, THUMBNAIL_URI};
use kaltura_error::{KalturaErrorKind, ResolutionErrorKind};
use kaltura_interface::MediaSource;
use kaltura_media::{KalturaMediaSource, SourceRegistry};
use std::sync::Arc;
use tempfile::TempDir;
use test_utils::{MockFetcher, MockMediaApi, test_config};

const HASH_987: &str = "VcgHmslsak9qlONGDHnkAG1iN0zObp_IsoGTijq8dic";

fn source(
    temp_dir: &TempDir,
    extra: &str,
    api: Arc<MockMediaApi>,
    fetcher: Arc<MockFetcher>,
) -> KalturaMediaSource {
    let config = test_config(temp_dir.path(), extra);
    KalturaMediaSource::with_collaborators(&config, api, fetcher)
}

#[tokio::test]
async fn test_thumbnail_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let body = b"\xff\xd8\xff\xe0 thumbnail 987";
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", body));
    let source = source(&temp_dir, "", api.clone(), fetcher.clone());

    let uri = source.thumbnail_uri(&MediaItem::kaltura("12345")).await;

    assert_eq!(
        uri.as_deref(),
        Some(format!("public://kaltura_thumbnails/{}.jpg", HASH_987).as_str())
    );
    let stored = temp_dir
        .path()
        .join("kaltura_thumbnails")
        .join(format!("{}.jpg", HASH_987));
    assert_eq!(std::fs::read(stored).unwrap(), body);
    assert_eq!(
        *fetcher.urls.lock().unwrap(),
        vec!["http://cdn.example/thumb987.jpg".to_string()]
    );
    assert_eq!(api.sessions(), 1);
}

#[tokio::test]
async fn test_rejected_secret_yields_none_without_fetch() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::rejecting_sessions());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"never"));
    let source = source(&temp_dir, "", api.clone(), fetcher.clone());

    let item = MediaItem::kaltura("12345");
    assert_eq!(source.thumbnail_uri(&item).await, None);
    assert_eq!(api.listings(), 0);
    assert_eq!(fetcher.fetches(), 0);

    let err = source.try_thumbnail(&item).await.unwrap_err();
    assert!(matches!(err.kind(), KalturaErrorKind::Authentication(_)));
    assert!(!temp_dir.path().join("kaltura_thumbnails").exists());
}

#[tokio::test]
async fn test_volatile_url_same_path() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi {
        url: "http://cdn.example/thumb987.jpg?token={n}".to_string(),
        ..MockMediaApi::scenario()
    });
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api, fetcher.clone());

    let item = MediaItem::kaltura("12345");
    let first = source.try_thumbnail(&item).await.unwrap();
    let second = source.try_thumbnail(&item).await.unwrap();

    assert_eq!(first.uri(), second.uri());
    assert_eq!(first.path(), second.path());
    let urls = fetcher.urls.lock().unwrap();
    assert_eq!(urls.len(), 2);
    assert_ne!(urls[0], urls[1]);
}

#[tokio::test]
async fn test_entry_id_key_source() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/png", b"png"));
    let source = source(
        &temp_dir,
        "[cache]\nkey = \"entry_id\"",
        api,
        fetcher,
    );

    let file = source.try_thumbnail(&MediaItem::kaltura("12345")).await.unwrap();
    assert_eq!(
        file.uri(),
        "public://kaltura_thumbnails/WZRHGrsBESr8wYFZ9sx0tPURuZgG2lmzyvWpwXPKz8U.png"
    );
}

#[tokio::test]
async fn test_explicit_key_source_builder() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api, fetcher).with_key_source(KeySource::AssetId);

    let file = source.try_thumbnail(&MediaItem::kaltura("12345")).await.unwrap();
    assert!(file.uri().contains(HASH_987));
}

#[tokio::test]
async fn test_failures_yield_none() {
    let temp_dir = TempDir::new().unwrap();
    let item = MediaItem::kaltura("12345");

    let empty = source(
        &temp_dir,
        "",
        Arc::new(MockMediaApi::default()),
        Arc::new(MockFetcher::ok("image/jpeg", b"jpeg")),
    );
    let err = empty.try_thumbnail(&item).await.unwrap_err();
    match err.kind() {
        KalturaErrorKind::Resolution(e) => {
            assert_eq!(e.kind, ResolutionErrorKind::EmptyCollection("12345".to_string()))
        }
        other => panic!("Expected resolution error, got {:?}", other),
    }
    assert_eq!(empty.thumbnail_uri(&item).await, None);

    let not_found = source(
        &temp_dir,
        "",
        Arc::new(MockMediaApi::scenario()),
        Arc::new(MockFetcher::status(404)),
    );
    assert_eq!(not_found.thumbnail_uri(&item).await, None);

    let offline = source(
        &temp_dir,
        "",
        Arc::new(MockMediaApi::scenario()),
        Arc::new(MockFetcher::refusing()),
    );
    let err = offline.try_thumbnail(&item).await.unwrap_err();
    assert!(matches!(err.kind(), KalturaErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_override_destination_dir() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api, fetcher);

    let file = source
        .try_thumbnail_in(&MediaItem::kaltura("12345"), "public://elsewhere")
        .await
        .unwrap();
    assert_eq!(file.uri(), &format!("public://elsewhere/{}.jpg", HASH_987));
    assert!(temp_dir.path().join("elsewhere").is_dir());
}

#[tokio::test]
async fn test_cached_sessions_reused_across_lookups() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(
        &temp_dir,
        "[session]\npolicy = \"cached\"",
        api.clone(),
        fetcher,
    );

    let item = MediaItem::kaltura("12345");
    source.try_thumbnail(&item).await.unwrap();
    source.try_thumbnail(&item).await.unwrap();
    assert_eq!(api.sessions(), 1);
    assert_eq!(*api.seen_ks.lock().unwrap(), vec!["ks-1".to_string(), "ks-1".to_string()]);
}

#[tokio::test]
async fn test_cached_session_dropped_after_service_failure() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi {
        fail_listing: true,
        ..MockMediaApi::scenario()
    });
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(
        &temp_dir,
        "[session]\npolicy = \"cached\"",
        api.clone(),
        fetcher,
    );

    let item = MediaItem::kaltura("12345");
    assert!(source.try_thumbnail(&item).await.is_err());
    assert!(source.try_thumbnail(&item).await.is_err());
    assert_eq!(api.sessions(), 2);
}

#[tokio::test]
async fn test_per_request_sessions_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api.clone(), fetcher);

    let item = MediaItem::kaltura("12345");
    source.try_thumbnail(&item).await.unwrap();
    source.try_thumbnail(&item).await.unwrap();
    assert_eq!(api.sessions(), 2);
}

#[tokio::test]
async fn test_foreign_item_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api.clone(), fetcher);

    let item = MediaItem::new("youtube", "dQw4w9WgXcQ");
    assert_eq!(source.thumbnail_uri(&item).await, None);
    assert_eq!(api.sessions(), 0);
}

#[tokio::test]
async fn test_blank_entry_id_rejected_before_session() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api.clone(), fetcher);

    let err = source.try_thumbnail(&MediaItem::kaltura("   ")).await.unwrap_err();
    match err.kind() {
        KalturaErrorKind::Resolution(e) => {
            assert!(matches!(e.kind, ResolutionErrorKind::InvalidEntryId(_)))
        }
        other => panic!("Expected resolution error, got {:?}", other),
    }
    assert_eq!(api.sessions(), 0);
    assert_eq!(api.listings(), 0);
}

#[tokio::test]
async fn test_media_source_contract() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));
    let source = source(&temp_dir, "", api, fetcher.clone());

    assert_eq!(source.id(), "kaltura");
    assert_eq!(source.label(), "Kaltura");
    assert_eq!(source.default_thumbnail_filename(), "generic.png");
    assert_eq!(source.thumbnails_directory(), "public://kaltura_thumbnails");

    let attributes = source.metadata_attributes();
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].name, THUMBNAIL_URI);

    let item = MediaItem::kaltura("12345");
    assert_eq!(source.metadata(&item, "duration").await, None);
    assert_eq!(fetcher.fetches(), 0);

    let uri = source.metadata(&item, THUMBNAIL_URI).await.unwrap();
    assert!(uri.ends_with(&format!("{}.jpg", HASH_987)));
}

#[tokio::test]
async fn test_registry_dispatch_to_kaltura() {
    let temp_dir = TempDir::new().unwrap();
    let api = Arc::new(MockMediaApi::scenario());
    let fetcher = Arc::new(MockFetcher::ok("image/jpeg", b"jpeg"));

    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(source(&temp_dir, "", api, fetcher)));

    let uri = registry
        .metadata(&MediaItem::kaltura("12345"), THUMBNAIL_URI)
        .await;
    assert_eq!(
        uri.as_deref(),
        Some(format!("public://kaltura_thumbnails/{}.jpg", HASH_987).as_str())
    );
    assert!(registry.get("kaltura").is_some());
}

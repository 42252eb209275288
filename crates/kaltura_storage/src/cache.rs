//! Thumbnail download cache.

use crate::{StreamWrappers, extension_for, stable_hash};
use kaltura_core::{CachedFile, KalturaConfig, WritePolicy};
use kaltura_error::{
    KalturaResult, StorageError, StorageErrorKind, TransportError, TransportErrorKind,
};
use kaltura_interface::HttpFetcher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

/// Local URI of the cached file for `stable_key` under `destination_dir`.
///
/// Pure: depends only on its arguments, so the same key always maps to the
/// same URI whatever URL the bytes came from.
///
/// # Examples
///
/// ```
/// use kaltura_storage::local_uri;
///
/// assert_eq!(
///     local_uri("public://kaltura_thumbnails", "987", "jpg"),
///     "public://kaltura_thumbnails/VcgHmslsak9qlONGDHnkAG1iN0zObp_IsoGTijq8dic.jpg"
/// );
/// ```
pub fn local_uri(destination_dir: &str, stable_key: &str, extension: &str) -> String {
    let file_name = file_name(stable_key, extension);
    if destination_dir.ends_with('/') {
        format!("{}{}", destination_dir, file_name)
    } else {
        format!("{}/{}", destination_dir, file_name)
    }
}

fn file_name(stable_key: &str, extension: &str) -> String {
    format!("{}.{}", stable_hash(stable_key), extension)
}

/// Downloads thumbnails into local storage under content-keyed names.
///
/// # Layout
///
/// ```text
/// public://kaltura_thumbnails/
/// ├── VcgHmslsak9qlONGDHnkAG1iN0zObp_IsoGTijq8dic.jpg   (asset 987)
/// └── HEmgg6dO1ERcgEzJy5q2PZvn2UUQc6sgC8QaLHExr7s.png   (asset asset-1)
/// ```
pub struct ThumbnailCache {
    fetcher: Arc<dyn HttpFetcher>,
    wrappers: StreamWrappers,
    write_policy: WritePolicy,
}

impl ThumbnailCache {
    /// Create a cache that always replaces existing files.
    pub fn new(fetcher: Arc<dyn HttpFetcher>, wrappers: StreamWrappers) -> Self {
        Self {
            fetcher,
            wrappers,
            write_policy: WritePolicy::Replace,
        }
    }

    /// Create a cache from the storage and cache sections of `config`.
    pub fn from_config(fetcher: Arc<dyn HttpFetcher>, config: &KalturaConfig) -> Self {
        Self::new(fetcher, StreamWrappers::from_config(&config.storage))
            .with_write_policy(config.cache.write_policy)
    }

    /// Set the write policy.
    pub fn with_write_policy(mut self, write_policy: WritePolicy) -> Self {
        self.write_policy = write_policy;
        self
    }

    /// Write policy in effect.
    pub fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// Download `url` and store it under the name derived from `stable_key`.
    ///
    /// The destination directory is created before anything is fetched; if
    /// that fails no request is made. A response other than 200 is an error
    /// and leaves the filesystem untouched.
    #[tracing::instrument(skip(self), fields(write_policy = %self.write_policy))]
    pub async fn fetch_or_get(
        &self,
        url: &str,
        stable_key: &str,
        destination_dir: &str,
    ) -> KalturaResult<CachedFile> {
        let directory = self.wrappers.resolve(destination_dir)?;
        ensure_directory(&directory).await?;

        let response = self.fetcher.get(url).await?;
        if !response.is_ok() {
            tracing::warn!(status = response.status(), "Thumbnail download rejected");
            return Err(TransportError::new(TransportErrorKind::Status {
                url: url.to_string(),
                status: *response.status(),
            })
            .into());
        }

        let content_type = response.content_type().clone();
        let extension = extension_for(content_type.as_deref());
        let uri = local_uri(destination_dir, stable_key, extension);
        let path = directory.join(file_name(stable_key, extension));

        if self.write_policy == WritePolicy::SkipIfExists {
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => {
                    tracing::debug!(
                        path = %path.display(),
                        "Thumbnail already cached, keeping existing file"
                    );
                    return Ok(CachedFile::new(
                        uri,
                        path,
                        content_type,
                        extension,
                        metadata.len(),
                        false,
                    ));
                }
                Ok(_) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Cannot inspect cached thumbnail, writing a fresh copy"
                ),
            }
        }

        write_atomic(&path, response.body()).await?;

        tracing::info!(
            uri = %uri,
            path = %path.display(),
            size = response.body().len(),
            "Stored thumbnail"
        );

        Ok(CachedFile::new(
            uri,
            path,
            content_type,
            extension,
            response.body().len() as u64,
            true,
        ))
    }
}

/// Create `directory` (and parents) if missing.
async fn ensure_directory(directory: &Path) -> KalturaResult<()> {
    let mut builder = tokio::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o775);

    builder.create(directory).await.map_err(|e| {
        tracing::error!(
            path = %directory.display(),
            error = %e,
            "Cannot create thumbnail directory"
        );
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            directory.display(),
            e
        )))
    })?;
    Ok(())
}

/// Write `data` to a temp file next to `path`, then rename it into place.
async fn write_atomic(path: &Path, data: &[u8]) -> KalturaResult<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = tokio::fs::write(&temp_path, data).await {
        tokio::fs::remove_file(&temp_path).await.ok();
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
        .into());
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        tokio::fs::remove_file(&temp_path).await.ok();
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
        .into());
    }

    Ok(())
}

/// Hidden, uniquely named sibling of `path`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
}

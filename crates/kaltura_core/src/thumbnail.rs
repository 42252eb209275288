//! Thumbnail asset and cached file types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A thumbnail asset as listed by the remote thumbnail asset service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ThumbAsset {
    id: String,
    entry_id: String,
    width: Option<u32>,
    height: Option<u32>,
    file_ext: Option<String>,
}

impl ThumbAsset {
    /// Create an asset with just its identifiers.
    pub fn new(id: impl Into<String>, entry_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entry_id: entry_id.into(),
            width: None,
            height: None,
            file_ext: None,
        }
    }

    /// Attach the reported dimensions.
    pub fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Attach the reported file extension.
    pub fn with_file_ext(mut self, file_ext: Option<String>) -> Self {
        self.file_ext = file_ext;
        self
    }
}

/// A thumbnail asset with its resolved download URL.
///
/// The URL is volatile: the service may hand out a different one on every
/// query, so it must never be used as a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ThumbnailRef {
    asset_id: String,
    entry_id: String,
    url: String,
}

impl ThumbnailRef {
    /// Create a resolved reference.
    pub fn new(
        asset_id: impl Into<String>,
        entry_id: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            entry_id: entry_id.into(),
            url: url.into(),
        }
    }
}

/// A thumbnail persisted to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CachedFile {
    /// Local URI, e.g. `public://kaltura_thumbnails/<hash>.jpg`
    uri: String,
    /// Physical location on disk
    path: PathBuf,
    /// Content type reported by the download, if any
    content_type: Option<String>,
    /// File extension without the dot
    extension: String,
    /// Size of the body in bytes
    size_bytes: u64,
    /// Whether this call wrote bytes (false when an existing file was kept)
    written: bool,
}

impl CachedFile {
    /// Create a cached file record.
    pub fn new(
        uri: impl Into<String>,
        path: impl AsRef<Path>,
        content_type: Option<String>,
        extension: impl Into<String>,
        size_bytes: u64,
        written: bool,
    ) -> Self {
        Self {
            uri: uri.into(),
            path: path.as_ref().to_path_buf(),
            content_type,
            extension: extension.into(),
            size_bytes,
            written,
        }
    }
}

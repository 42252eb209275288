//! URI scheme resolution.

use kaltura_core::{StorageConfig, split_uri};
use kaltura_error::{KalturaResult, StorageError, StorageErrorKind};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Maps URI schemes such as `public://` to physical root directories.
///
/// Plain paths pass through unchanged.
///
/// # Examples
///
/// ```
/// use kaltura_storage::StreamWrappers;
/// use std::path::PathBuf;
///
/// let wrappers = StreamWrappers::default();
/// assert_eq!(
///     wrappers.resolve("public://kaltura_thumbnails").unwrap(),
///     PathBuf::from("files/kaltura_thumbnails")
/// );
/// assert!(wrappers.resolve("s3://bucket").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamWrappers {
    roots: BTreeMap<String, PathBuf>,
}

impl StreamWrappers {
    /// No schemes registered.
    pub fn empty() -> Self {
        Self {
            roots: BTreeMap::new(),
        }
    }

    /// Schemes from configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            roots: config.schemes.clone(),
        }
    }

    /// Register (or replace) the root for `scheme`.
    pub fn with_scheme(mut self, scheme: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(scheme.into(), root.into());
        self
    }

    /// Root directory registered for `scheme`.
    pub fn root(&self, scheme: &str) -> Option<&Path> {
        self.roots.get(scheme).map(PathBuf::as_path)
    }

    /// Registered scheme names.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    /// Physical directory for a URI or plain path.
    ///
    /// # Errors
    ///
    /// `StorageErrorKind::InvalidUri` if the location is empty, the URI is
    /// malformed, its scheme is not registered, or its target climbs out of
    /// the scheme root.
    pub fn resolve(&self, location: &str) -> KalturaResult<PathBuf> {
        let invalid = |reason: &str| {
            StorageError::new(StorageErrorKind::InvalidUri(format!(
                "{:?}: {}",
                location, reason
            )))
        };

        if location.trim().is_empty() {
            return Err(invalid("empty location").into());
        }
        if !location.contains("://") {
            return Ok(PathBuf::from(location));
        }

        let (scheme, target) = split_uri(location).ok_or_else(|| invalid("malformed scheme"))?;
        let root = self
            .roots
            .get(scheme)
            .ok_or_else(|| invalid("scheme is not registered"))?;

        let target = Path::new(target.trim_start_matches('/'));
        if target
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(invalid("target must stay inside the scheme root").into());
        }

        Ok(root.join(target))
    }
}

impl Default for StreamWrappers {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

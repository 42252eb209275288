//! Media entries as seen by the host CMS.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Source id under which the Kaltura media source registers.
pub const KALTURA_SOURCE_ID: &str = "kaltura";

/// Metadata attribute carrying the local thumbnail URI.
pub const THUMBNAIL_URI: &str = "thumbnail_uri";

/// A remote video entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MediaEntry {
    entry_id: String,
    partner_id: String,
}

impl MediaEntry {
    /// Create a new entry reference.
    pub fn new(entry_id: impl Into<String>, partner_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            partner_id: partner_id.into(),
        }
    }
}

/// A host media item: which source it belongs to and the raw value of its
/// source field.
///
/// For Kaltura media the source value is the entry id.
///
/// # Examples
///
/// ```
/// use kaltura_core::{MediaItem, KALTURA_SOURCE_ID};
///
/// let item = MediaItem::kaltura("0_abc123");
/// assert_eq!(item.source_id(), KALTURA_SOURCE_ID);
/// assert_eq!(item.source_value(), "0_abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MediaItem {
    source_id: String,
    source_value: String,
}

impl MediaItem {
    /// Create a media item for an arbitrary source.
    pub fn new(source_id: impl Into<String>, source_value: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            source_value: source_value.into(),
        }
    }

    /// Create a media item backed by a Kaltura entry.
    pub fn kaltura(entry_id: impl Into<String>) -> Self {
        Self::new(KALTURA_SOURCE_ID, entry_id)
    }
}

//! Wire types for the thumbnail asset service.

use kaltura_core::ThumbAsset;
use serde::{Deserialize, Serialize};

/// A `KalturaThumbAsset` as returned by `thumbasset.getByEntryId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbAssetDto {
    /// Asset id
    pub id: String,
    /// Owning entry id
    #[serde(default)]
    pub entry_id: String,
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// File extension reported by the service
    #[serde(default)]
    pub file_ext: Option<String>,
}

impl From<ThumbAssetDto> for ThumbAsset {
    fn from(dto: ThumbAssetDto) -> Self {
        ThumbAsset::new(dto.id, dto.entry_id)
            .with_dimensions(dto.width, dto.height)
            .with_file_ext(dto.file_ext.filter(|ext| !ext.is_empty()))
    }
}

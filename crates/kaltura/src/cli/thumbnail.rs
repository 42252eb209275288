//! Thumbnail command handler.

use super::commands::OutputFormat;
use kaltura::{ConfigError, KalturaConfig, KalturaMediaSource, KalturaResult, MediaItem};

/// Fetch the thumbnail of `entry_id` and print the local URI.
pub async fn fetch_thumbnail(
    config: &KalturaConfig,
    entry_id: &str,
    dir: Option<&str>,
    format: OutputFormat,
) -> KalturaResult<()> {
    let source = KalturaMediaSource::from_config(config)?;
    let destination = match dir {
        Some(dir) => {
            config.validate_directory(dir)?;
            dir
        }
        None => source.thumbnails_directory(),
    };

    let file = source
        .try_thumbnail_in(&MediaItem::kaltura(entry_id), destination)
        .await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&file)
                .map_err(|e| ConfigError::new(format!("Failed to render result: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{}", file.uri());
            tracing::debug!(
                path = %file.path().display(),
                size = file.size_bytes(),
                written = file.written(),
                "Thumbnail details"
            );
        }
    }

    Ok(())
}

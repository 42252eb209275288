//! Configuration command handlers.

use super::commands::OutputFormat;
use kaltura::{ConfigError, KalturaConfig, KalturaResult};
use std::path::Path;

/// Load configuration from `path`, or from the default search path.
pub fn load_config(path: Option<&Path>) -> KalturaResult<KalturaConfig> {
    match path {
        Some(path) => KalturaConfig::from_file(path),
        None => KalturaConfig::load(),
    }
}

/// Print the effective configuration without the admin secret.
pub fn show_config(config: &KalturaConfig, format: OutputFormat) -> KalturaResult<()> {
    let config = config.redacted();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| ConfigError::new(format!("Failed to render configuration: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("server_url:           {}", config.server_url);
            println!("partner_id:           {}", config.partner_id);
            println!("admin_secret:         {}", config.admin_secret);
            if let Some(ui_conf_id) = &config.ui_conf_id {
                println!("ui_conf_id:           {}", ui_conf_id);
            }
            println!("thumbnails_directory: {}", config.thumbnails_directory);
            println!("session.policy:       {}", config.session.policy);
            println!("session.expiry_secs:  {}", config.session.expiry_secs);
            println!("cache.write_policy:   {}", config.cache.write_policy);
            println!("cache.key:            {}", config.cache.key);
            for (scheme, root) in &config.storage.schemes {
                println!("storage {}:// ->  {}", scheme, root.display());
            }
        }
    }

    if let Err(e) = config.validate() {
        eprintln!("Warning: {}", e);
    }

    Ok(())
}

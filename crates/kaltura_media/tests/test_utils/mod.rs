//! Test utilities for media source tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_kaltura;

#[allow(unused_imports)]
pub use mock_kaltura::{MockFetcher, MockMediaApi};

use kaltura_core::KalturaConfig;
use std::path::Path;

/// Configuration for partner 101 with `public://` rooted at `public_root`.
#[allow(dead_code)]
pub fn test_config(public_root: &Path, extra: &str) -> KalturaConfig {
    let toml = format!(
        r#"
server_url = "https://www.kaltura.com"
partner_id = "101"
admin_secret = "s3cr3t"
{}

[storage.schemes]
public = "{}"
"#,
        extra,
        public_root.display()
    );
    KalturaConfig::from_toml_str(&toml).expect("Failed to build test config")
}

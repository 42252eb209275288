//! Stable cache keys.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

/// SHA-256 of `key`, encoded as URL-safe base64 without padding.
///
/// The result is safe to use as a file name on every platform.
///
/// # Examples
///
/// ```
/// use kaltura_storage::stable_hash;
///
/// assert_eq!(stable_hash("987"), "VcgHmslsak9qlONGDHnkAG1iN0zObp_IsoGTijq8dic");
/// ```
pub fn stable_hash(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

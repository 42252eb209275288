//! Local thumbnail storage for Kaltura media.
//!
//! Downloaded thumbnails are stored under a name derived from a stable key
//! (see [`stable_hash`]), never from the download URL, which the remote
//! service may change between requests. Writes go through a temp file and a
//! rename so readers never observe a partial file.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaltura_client::ReqwestFetcher;
//! use kaltura_storage::{StreamWrappers, ThumbnailCache};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let wrappers = StreamWrappers::default().with_scheme("public", "/var/www/files");
//! let cache = ThumbnailCache::new(Arc::new(ReqwestFetcher::default()), wrappers);
//!
//! let file = cache
//!     .fetch_or_get("http://cdn.example/thumb987.jpg", "987", "public://kaltura_thumbnails")
//!     .await?;
//! println!("{}", file.uri());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cache;
mod format;
mod key;
mod wrappers;

pub use cache::{ThumbnailCache, local_uri};
pub use format::{DEFAULT_EXTENSION, ImageFormat, extension_for};
pub use key::stable_hash;
pub use wrappers::StreamWrappers;

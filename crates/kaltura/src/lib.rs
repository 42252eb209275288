//! Kaltura media thumbnails.
//!
//! Resolves the thumbnail of a Kaltura-hosted video entry and keeps a local
//! copy under a stable, content-keyed name, so a host CMS can show it
//! without talking to Kaltura on every render.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kaltura::{KalturaConfig, KalturaMediaSource, MediaItem};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = KalturaConfig::load()?;
//!     let source = KalturaMediaSource::from_config(&config)?;
//!
//!     match source.thumbnail_uri(&MediaItem::kaltura("0_abc123")).await {
//!         Some(uri) => println!("Thumbnail: {}", uri),
//!         None => println!("No thumbnail, using generic.png"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Kaltura is organized as a workspace with focused crates:
//!
//! - `kaltura_error` - Error types
//! - `kaltura_core` - Core data types and configuration
//! - `kaltura_interface` - Capability traits (`MediaApi`, `HttpFetcher`, ...)
//! - `kaltura_client` - reqwest implementations of the remote API and fetcher
//! - `kaltura_session` - Admin session providers and session caching
//! - `kaltura_storage` - Content-keyed local thumbnail cache
//! - `kaltura_media` - Asset resolution and the Kaltura media source
//!
//! This crate (`kaltura`) re-exports everything for convenience.

pub use kaltura_client::*;
pub use kaltura_core::*;
pub use kaltura_error::*;
pub use kaltura_interface::*;
pub use kaltura_media::*;
pub use kaltura_session::*;
pub use kaltura_storage::*;

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

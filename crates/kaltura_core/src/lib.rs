//! Core data types for the Kaltura media thumbnail library.
//!
//! This crate provides the domain types shared by every other crate in the
//! workspace (sessions, entries, thumbnail assets, cached files) and the
//! layered configuration they are built from.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod media;
mod session;
mod thumbnail;
mod uri;

pub use config::{
    CacheConfig, HttpConfig, KalturaConfig, KeySource, SessionConfig, SessionPolicy,
    StorageConfig, WritePolicy,
};
pub use media::{KALTURA_SOURCE_ID, MediaEntry, MediaItem, THUMBNAIL_URI};
pub use session::{
    Credentials, DEFAULT_EXPIRY_SECS, Session, SessionStart, SessionStartBuilder, SessionType,
};
pub use thumbnail::{CachedFile, ThumbAsset, ThumbnailRef};
pub use uri::split_uri;

//! The Kaltura media source.
//!
//! For a media item backed by a Kaltura entry, [`KalturaMediaSource`]
//! obtains an admin session, resolves the entry's first thumbnail asset to
//! a download URL ([`AssetResolver`]), and stores the thumbnail locally
//! under a stable name ([`ThumbnailCache`](kaltura_storage::ThumbnailCache)).
//! Hosts look sources up by id in a [`SourceRegistry`].

#![warn(missing_docs)]

mod registry;
mod resolver;
mod source;

pub use registry::SourceRegistry;
pub use resolver::AssetResolver;
pub use source::KalturaMediaSource;

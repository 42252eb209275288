//! Capability traits for the Kaltura media thumbnail library.
//!
//! Every external collaborator of the thumbnail pipeline sits behind one of
//! these traits and is passed in explicitly:
//!
//! - [`MediaApi`]: the remote Kaltura API (session start, thumbnail assets)
//! - [`HttpFetcher`]: plain HTTP GET of a thumbnail URL
//! - [`SessionProvider`]: hands out authenticated sessions
//! - [`MediaSource`]: what the host CMS consumes for one media source type

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{HttpFetcher, MediaApi, MediaSource, SessionProvider};
pub use types::{ApiResult, FetchedResponse, MetadataAttribute};

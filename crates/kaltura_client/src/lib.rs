//! HTTP clients for the Kaltura API and thumbnail downloads.
//!
//! - [`KalturaClient`] implements [`MediaApi`](kaltura_interface::MediaApi)
//!   against the `api_v3` JSON endpoints
//! - [`ReqwestFetcher`] implements [`HttpFetcher`](kaltura_interface::HttpFetcher)
//!   for downloading thumbnail bytes

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod dto;
mod fetcher;
mod http;
mod response;

pub use client::{KalturaClient, session_start_params};
pub use dto::ThumbAssetDto;
pub use fetcher::ReqwestFetcher;
pub use http::build_http_client;
pub use response::parse_response;

//! Error types for the Kaltura media thumbnail library.
//!
//! Every failure the thumbnail pipeline can hit belongs to one of four
//! families, plus configuration and raw remote-API errors:
//!
//! - [`AuthenticationError`]: a session could not be started
//! - [`ResolutionError`]: no thumbnail asset or download URL could be found
//! - [`TransportError`]: the thumbnail download failed
//! - [`StorageError`]: the thumbnail could not be persisted locally
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use kaltura_error::{KalturaResult, ResolutionError, ResolutionErrorKind};
//!
//! fn first_asset(ids: &[&str]) -> KalturaResult<String> {
//!     let id = ids
//!         .first()
//!         .ok_or_else(|| {
//!             ResolutionError::new(ResolutionErrorKind::EmptyCollection("0_abc".into()))
//!         })?;
//!     Ok(id.to_string())
//! }
//!
//! assert!(first_asset(&[]).is_err());
//! assert_eq!(first_asset(&["987"]).unwrap(), "987");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod authentication;
mod config;
mod error;
mod resolution;
mod storage;
mod transport;

pub use api::{ApiError, ApiErrorKind};
pub use authentication::{AuthenticationError, AuthenticationErrorKind};
pub use config::ConfigError;
pub use error::{KalturaError, KalturaErrorKind, KalturaResult};
pub use resolution::{ResolutionError, ResolutionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use transport::{TransportError, TransportErrorKind};

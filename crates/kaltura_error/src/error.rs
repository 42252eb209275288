//! Top-level error wrapper types.

use crate::{
    ApiError, AuthenticationError, ConfigError, ResolutionError, StorageError, TransportError,
};

/// Every error the thumbnail pipeline can produce.
///
/// # Examples
///
/// ```
/// use kaltura_error::{KalturaError, KalturaErrorKind, TransportError, TransportErrorKind};
///
/// let err: KalturaError = TransportError::new(TransportErrorKind::Status {
///     url: "http://cdn.example/thumb.jpg".to_string(),
///     status: 404,
/// })
/// .into();
/// assert!(matches!(err.kind(), KalturaErrorKind::Transport(_)));
/// assert!(format!("{}", err).contains("404"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum KalturaErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Remote media API error
    #[from(ApiError)]
    Api(ApiError),
    /// Session could not be started
    #[from(AuthenticationError)]
    Authentication(AuthenticationError),
    /// No thumbnail asset or URL could be resolved
    #[from(ResolutionError)]
    Resolution(ResolutionError),
    /// Thumbnail download failed
    #[from(TransportError)]
    Transport(TransportError),
    /// Thumbnail could not be persisted
    #[from(StorageError)]
    Storage(StorageError),
}

/// Kaltura error with kind discrimination.
///
/// # Examples
///
/// ```
/// use kaltura_error::{ConfigError, KalturaResult};
///
/// fn might_fail() -> KalturaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Kaltura Error: {}", _0)]
pub struct KalturaError(Box<KalturaErrorKind>);

impl KalturaError {
    /// Create a new error from a kind.
    pub fn new(kind: KalturaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &KalturaErrorKind {
        &self.0
    }
}

impl<T> From<T> for KalturaError
where
    T: Into<KalturaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Kaltura operations.
pub type KalturaResult<T> = std::result::Result<T, KalturaError>;

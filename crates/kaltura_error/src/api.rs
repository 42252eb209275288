//! Remote media API error types.

/// Ways a call to the remote media API can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ApiErrorKind {
    /// The request never produced a response
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// The service answered with a non-success HTTP status
    #[display("Service returned HTTP {}", _0)]
    Status(u16),
    /// The service answered with a `KalturaAPIException` payload
    #[display("API exception {}: {}", code, message)]
    Api {
        /// Vendor error code (e.g. `INVALID_KS`)
        code: String,
        /// Human-readable message from the service
        message: String,
    },
    /// The response body did not have the expected shape
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),
}

/// Remote media API error with location tracking.
///
/// # Examples
///
/// ```
/// use kaltura_error::{ApiError, ApiErrorKind};
///
/// let err = ApiError::new(ApiErrorKind::Api {
///     code: "START_SESSION_ERROR".to_string(),
///     message: "Error while starting session for partner [101]".to_string(),
/// });
/// assert!(format!("{}", err).contains("START_SESSION_ERROR"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("API Error: {} at line {} in {}", kind, line, file)]
pub struct ApiError {
    /// The kind of error that occurred
    pub kind: ApiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ApiError {
    /// Create a new API error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

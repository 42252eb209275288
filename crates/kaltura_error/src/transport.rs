//! Thumbnail download error types.

/// Kinds of transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TransportErrorKind {
    /// The request could not be sent or no response arrived
    #[display("Request to {} failed: {}", url, reason)]
    Request {
        /// Requested URL
        url: String,
        /// Underlying client error
        reason: String,
    },
    /// The remote fetch returned a status other than 200
    #[display("Remote fetch failed: {} returned HTTP {}", url, status)]
    Status {
        /// Requested URL
        url: String,
        /// Returned status code
        status: u16,
    },
    /// The response body could not be read
    #[display("Failed to read body from {}: {}", url, reason)]
    Body {
        /// Requested URL
        url: String,
        /// Underlying client error
        reason: String,
    },
}

/// Transport error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

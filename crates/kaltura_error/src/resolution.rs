//! Thumbnail asset resolution error types.

/// Kinds of resolution failures.
///
/// Each variant is a distinct outcome so callers and logs can tell them
/// apart, even though all of them mean "no thumbnail available".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ResolutionErrorKind {
    /// No authenticated session was available
    #[display("No session available to resolve entry {}", _0)]
    NoSession(String),
    /// The entry id was empty
    #[display("Invalid entry id: {:?}", _0)]
    InvalidEntryId(String),
    /// The thumbnail asset service could not be reached or refused the call
    #[display("Thumbnail asset service unavailable: {}", _0)]
    ServiceUnavailable(String),
    /// The entry has no thumbnail assets
    #[display("No thumbnail assets for entry {}", _0)]
    EmptyCollection(String),
    /// The asset's download URL came back empty
    #[display("Empty download URL for thumbnail asset {}", _0)]
    EmptyUrl(String),
}

/// Resolution error with location tracking.
///
/// # Examples
///
/// ```
/// use kaltura_error::{ResolutionError, ResolutionErrorKind};
///
/// let err = ResolutionError::new(ResolutionErrorKind::EmptyUrl("987".to_string()));
/// assert_eq!(err.kind, ResolutionErrorKind::EmptyUrl("987".to_string()));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Resolution Error: {} at line {} in {}", kind, line, file)]
pub struct ResolutionError {
    /// The kind of error that occurred
    pub kind: ResolutionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ResolutionError {
    /// Create a new resolution error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ResolutionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

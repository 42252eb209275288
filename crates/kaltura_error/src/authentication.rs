//! Session authentication error types.

/// Kinds of authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AuthenticationErrorKind {
    /// A required credential is empty or absent
    #[display("Missing credential: {}", _0)]
    MissingCredential(String),
    /// The remote session-start call failed
    #[display("Session start failed for partner {}: {}", partner_id, reason)]
    SessionStart {
        /// Partner the session was requested for
        partner_id: String,
        /// Underlying transport or API failure
        reason: String,
    },
}

/// Authentication error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Authentication Error: {} at line {} in {}", kind, line, file)]
pub struct AuthenticationError {
    /// The kind of error that occurred
    pub kind: AuthenticationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AuthenticationError {
    /// Create a new authentication error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AuthenticationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

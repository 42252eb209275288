//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the destination directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Destination URI is malformed or uses an unregistered scheme
    #[display("Invalid storage URI: {}", _0)]
    InvalidUri(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use kaltura_error::{StorageError, StorageErrorKind};
///
/// let kind = StorageErrorKind::DirectoryCreation("/read-only/thumbs".to_string());
/// let err = StorageError::new(kind);
/// assert!(format!("{}", err).contains("/read-only/thumbs"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

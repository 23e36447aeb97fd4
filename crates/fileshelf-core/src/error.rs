//! Error types module
//!
//! Resolution of file metadata has exactly one fatal condition: the configured
//! default thumbnail cannot be found. Everything else (missing files, unknown
//! extensions, no matching exports) is a soft miss expressed through empty
//! results. `InvalidInput` covers bad selector strings at the parsing boundary.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for broken deployments
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// by a controller layer sitting on top of the resolver.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "NOT_FOUND")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for file resolution operations
pub type FileResult<T> = Result<T, FileError>;

impl ErrorMetadata for FileError {
    fn http_status_code(&self) -> u16 {
        match self {
            // A missing default thumbnail is a deployment problem, not a client one.
            FileError::NotFound(_) => 500,
            FileError::InvalidInput(_) => 400,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            FileError::NotFound(_) => "FILE_NOT_FOUND",
            FileError::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    fn client_message(&self) -> String {
        match self {
            FileError::NotFound(_) => "Internal server error".to_string(),
            FileError::InvalidInput(ref msg) => msg.clone(),
        }
    }

    fn is_sensitive(&self) -> bool {
        matches!(self, FileError::NotFound(_))
    }

    fn log_level(&self) -> LogLevel {
        match self {
            FileError::NotFound(_) => LogLevel::Error,
            FileError::InvalidInput(_) => LogLevel::Debug,
        }
    }
}

//! Error types for Huddle operations.

use thiserror::Error;

/// The main error type for Huddle operations.
///
/// Covers every failure category of the packaging pipeline, from invalid
/// deployment parameters to rewrite failures in the staged frontend.
/// All fatal variants carry enough context (file path, offending region)
/// for a human to fix the template without re-running under a debugger.
#[derive(Error, Debug)]
pub enum HuddleError {
    /// Deployment parameter or configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Secret generation error
    #[error("Secret error: {0}")]
    Secret(String),

    /// A marker region closed without a parseable `const <name> =` declaration,
    /// or the file ended while a region was still open.
    #[error("Malformed marker region in {path}: no declared name found in:\n{region}")]
    MalformedRegion {
        /// File being rewritten
        path: String,
        /// Buffered region content, verbatim
        region: String,
    },

    /// A participant id referenced in a template has no provisioned slot.
    #[error("Unknown participant id {id} in {path}: only slots 1..={slots} are provisioned")]
    UnknownParticipant {
        /// Id parsed from the template
        id: u32,
        /// Number of provisioned slots
        slots: usize,
        /// File being rewritten
        path: String,
    },

    /// Service credential file did not hold the expected key line
    #[error("Credential error: {0}")]
    Credential(String),

    /// Bundle staging error (copying, renaming, layout)
    #[error("Bundle error: {0}")]
    Bundle(String),

    /// Backend build toolchain failure
    #[error("Build error: {0}")]
    Build(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue at:\nhttps://github.com/huddle-poc/huddle/issues")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for Huddle operations.
pub type Result<T> = std::result::Result<T, HuddleError>;

/// Helper macro to create and return a HuddleError::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation and indicate a bug in Huddle itself.
///
/// # Example
///
/// ```ignore
/// if some_impossible_condition {
///     bug!("This should never happen: {:?}", condition);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::HuddleError::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::HuddleError::Bug(format!($fmt, $($arg)*)))
    };
}

/// Helper macro to bail out with a HuddleError
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if !valid {
///     bail!(Config, "Invalid deployment parameters: {}", reason);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::HuddleError::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::HuddleError::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::HuddleError::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::HuddleError::Other(format!($fmt, $($arg)*)))
    };
}

//! Fatal errors.
//!
//! Everything that does not abort a whole pass is a
//! [`Diagnostic`](crate::diagnostics::Diagnostic) instead.

use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ArchiveError

/// An error that aborts a whole read or write pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArchiveError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Schema version {found} is not supported")]
    VersionUnsupported { found: String },

    #[error("Type `{0}` is not registered and can not be written")]
    UnregisteredType(&'static str),

    #[error("Failed to write document: {0}")]
    Write(String),
}

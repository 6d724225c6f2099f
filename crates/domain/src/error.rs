//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RemoteError`] via `#[from]` when crossing a port boundary.

/// Errors raised while driving devices.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The console could not write an announcement.
    #[error("failed to write announcement")]
    Output(#[from] std::io::Error),

    /// A language code did not match any supported language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

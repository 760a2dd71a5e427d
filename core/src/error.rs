//! Failures of the host-facing actions.
//!
//! The text buffer engine itself has no error path. Everything here comes
//! from a side effect (clipboard, browser, file export, ad loading) and is
//! recoverable: the `Keyboard` turns each one into a transient notice.

use thiserror::Error;

/// Action error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The host refused the clipboard write.
    #[error("clipboard write denied: {0}")]
    ClipboardDenied(String),

    /// Search requested with nothing but whitespace to search for.
    #[error("nothing to search")]
    EmptyQuery,

    /// Download requested on an empty buffer. Treated as a no-op.
    #[error("nothing to export")]
    EmptyExport,

    /// The ad script was unavailable or blocked.
    #[error("ad failed to load: {0}")]
    AdLoadFailure(String),

    #[error("could not open browser: {0}")]
    BrowserUnavailable(String),

    #[error("export failed: {0}")]
    ExportFailed(String),
}

/// Action result
pub type ActionResult<T> = Result<T, ActionError>;

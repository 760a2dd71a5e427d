//! Side-effect actions built on top of the buffer: copy, download, search.
//!
//! The pure halves (what to copy, what bytes to export, which URL to open)
//! live here as plain functions. Talking to the host goes through the
//! `Clipboard`, `Browser` and `FileSaver` traits so a front end can plug in
//! whatever its platform offers.

use crate::buffer::BufferState;
use crate::error::{ActionError, ActionResult};

pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Write-only clipboard access.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> ActionResult<()>;
}

/// Opens a URL in a new browsing context.
pub trait Browser {
    fn open_url(&mut self, url: &str) -> ActionResult<()>;
}

/// Hands a produced file to the user.
pub trait FileSaver {
    fn save(&mut self, download: &Download) -> ActionResult<()>;
}

/// Everything the keyboard needs from its host.
pub trait Platform {
    fn clipboard(&mut self) -> &mut dyn Clipboard;
    fn browser(&mut self) -> &mut dyn Browser;
    fn file_saver(&mut self) -> &mut dyn FileSaver;
}

/// A plain text file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    /// Decode the payload back to text.
    pub fn text(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }
}

/// Build the export of the whole buffer as UTF-8 text.
///
/// An empty buffer produces no file.
pub fn export(state: &BufferState, filename: &str) -> ActionResult<Download> {
    if state.is_empty() {
        return Err(ActionError::EmptyExport);
    }
    Ok(Download {
        filename: filename.to_string(),
        mime: TEXT_MIME,
        bytes: state.content().as_bytes().to_vec(),
    })
}

/// The text a search should use: the selection if there is one, otherwise
/// the whole buffer, trimmed.
pub fn search_query(state: &BufferState) -> ActionResult<String> {
    let raw = if state.selection().is_collapsed() {
        state.content()
    } else {
        state.selected_text()
    };
    let query = raw.trim();
    if query.is_empty() {
        return Err(ActionError::EmptyQuery);
    }
    Ok(query.to_string())
}

/// Append the percent-encoded `query` to `base`.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}{}", base, urlencoding::encode(query))
}

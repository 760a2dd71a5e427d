//! Keyboard coordinator: key events in, view context out.
//!
//! `Keyboard` ties the buffer engine to the session and to the host's
//! platform services. Every event is handled synchronously in two phases:
//! `process_key()` computes the new state, then the host reads `context()`
//! and applies `caret_restore` on its next paint.
//!
//! Side-effect failures never escape as panics. Each one is logged and turned
//! into a short-lived notice; the `ActionResult` return values are there for
//! hosts that want to react further.

use crate::actions::{self, Platform};
use crate::buffer::{self, BufferState, Selection};
use crate::config::Config;
use crate::context::ViewContext;
use crate::error::{ActionError, ActionResult};
use crate::layout::LayoutTable;
use crate::notice::NoticeKind;
use crate::panel::InfoPanel;
use crate::session::Session;
use crate::toolbar::ToolbarAction;
use std::time::Instant;

pub const NOTICE_COPIED: &str = "Text copied to clipboard!";
pub const NOTICE_COPY_FAILED: &str = "Failed to copy text.";
pub const NOTICE_DOWNLOADED: &str = "Text downloaded!";
pub const NOTICE_DOWNLOAD_FAILED: &str = "Failed to save text.";
pub const NOTICE_CLEARED: &str = "All text cleared";
pub const NOTICE_EMPTY_QUERY: &str = "Please type something to search";
pub const NOTICE_SEARCH_FAILED: &str = "Could not open search.";

/// User input the keyboard understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// An on-screen key (or any non-empty text) was activated
    Symbol(String),
    /// Space bar
    Space,
    /// Backspace key
    Backspace,
    /// Toolbar "Clear"
    Clear,
    /// The user edited the text field directly; the host reports the result
    HostEdit {
        content: String,
        anchor: usize,
        focus: usize,
    },
    /// Escape (closes an open panel)
    Escape,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the keyboard
    Handled,
    /// Key was not handled (leave it to the host)
    NotHandled,
}

/// Arabic keyboard with session management.
///
/// Generic over `P`, the host platform providing clipboard, browser and file
/// export.
pub struct Keyboard<P: Platform> {
    platform: P,
    config: Config,
    layout: LayoutTable,
    session: Session,
    context: ViewContext,
}

impl<P: Platform> Keyboard<P> {
    /// Create a keyboard with the default configuration.
    pub fn new(platform: P) -> Self {
        Self::with_config(platform, Config::default())
    }

    pub fn with_config(platform: P, config: Config) -> Self {
        Self {
            platform,
            layout: config.layout(),
            session: Session::with_notice_duration(config.notice_duration()),
            config,
            context: ViewContext::new(),
        }
    }

    /// Read this after every call to update the UI.
    pub fn context(&self) -> &ViewContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ViewContext {
        &mut self.context
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn buffer(&self) -> &BufferState {
        self.session.buffer()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> LayoutTable {
        self.layout
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Refresh the context, e.g. on a repaint timer so expired notices go away.
    pub fn refresh(&mut self) {
        self.refresh_at(Instant::now());
    }

    pub fn refresh_at(&mut self, now: Instant) {
        self.session.sync_to_context(&mut self.context, now);
    }

    /// Process a key event and update the context.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        let now = Instant::now();
        let current = self.session.buffer();

        let next = match key {
            KeyEvent::Symbol(symbol) => {
                if symbol.is_empty() {
                    return KeyResult::NotHandled;
                }
                if !self.layout.contains(&symbol) {
                    tracing::debug!(symbol = %symbol, "inserting free text");
                }
                buffer::insert_at_caret(current, &symbol)
            }
            KeyEvent::Space => buffer::insert_space(current),
            KeyEvent::Backspace => buffer::delete_backward(current, self.config.deletion_unit),
            KeyEvent::Clear => {
                let cleared = buffer::clear(current);
                self.session
                    .notices_mut()
                    .show_at(NOTICE_CLEARED, NoticeKind::Success, now);
                cleared
            }
            KeyEvent::HostEdit {
                content,
                anchor,
                focus,
            } => {
                // The host already shows this state; nothing to restore.
                self.session
                    .set_buffer(BufferState::from_host(content, anchor, focus));
                self.context.caret_restore = None;
                self.session.sync_to_context(&mut self.context, now);
                return KeyResult::Handled;
            }
            KeyEvent::Escape => {
                if !self.session.panels_mut().handle_escape() {
                    return KeyResult::NotHandled;
                }
                self.session.sync_to_context(&mut self.context, now);
                return KeyResult::Handled;
            }
        };

        tracing::debug!(
            len = next.len(),
            start = next.selection().start(),
            end = next.selection().end(),
            "buffer updated"
        );
        self.context.caret_restore = Some(next.selection());
        self.session.set_buffer(next);
        self.session.sync_to_context(&mut self.context, now);
        KeyResult::Handled
    }

    /// Move the selection without changing the text (host-side caret moves).
    pub fn select(&mut self, anchor: usize, focus: usize) -> Selection {
        let next = self.session.buffer().select(anchor, focus);
        let sel = next.selection();
        self.session.set_buffer(next);
        self.refresh();
        sel
    }

    /// Copy the whole buffer to the clipboard.
    ///
    /// Does nothing on an empty buffer.
    pub fn copy(&mut self) -> ActionResult<()> {
        let text = self.session.buffer().content().to_string();
        if text.is_empty() {
            return Ok(());
        }
        let result = self.platform.clipboard().write_text(&text);
        match &result {
            Ok(()) => {
                tracing::info!(chars = text.chars().count(), "copied to clipboard");
                self.notify(NOTICE_COPIED, NoticeKind::Success);
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                self.notify(NOTICE_COPY_FAILED, NoticeKind::Failure);
            }
        }
        result
    }

    /// Export the buffer as a UTF-8 text file named after the config.
    ///
    /// An empty buffer yields `EmptyExport` without producing a file or a
    /// notice.
    pub fn download(&mut self) -> ActionResult<()> {
        let download = actions::export(self.session.buffer(), &self.config.download_filename)?;
        let result = self.platform.file_saver().save(&download);
        match &result {
            Ok(()) => {
                tracing::info!(file = %download.filename, bytes = download.bytes.len(), "text exported");
                self.notify(NOTICE_DOWNLOADED, NoticeKind::Success);
            }
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.notify(NOTICE_DOWNLOAD_FAILED, NoticeKind::Failure);
            }
        }
        result
    }

    /// Search the web for the selection, or the whole buffer when nothing is
    /// selected. Returns the URL that was opened.
    pub fn search(&mut self) -> ActionResult<String> {
        let query = match actions::search_query(self.session.buffer()) {
            Ok(q) => q,
            Err(e) => {
                self.notify(NOTICE_EMPTY_QUERY, NoticeKind::Failure);
                return Err(e);
            }
        };
        let url = actions::search_url(&self.config.search_base_url, &query);
        match self.platform.browser().open_url(&url) {
            Ok(()) => {
                tracing::info!(url = %url, "search opened");
                self.refresh();
                Ok(url)
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.notify(NOTICE_SEARCH_FAILED, NoticeKind::Failure);
                Err(e)
            }
        }
    }

    /// Dispatch a toolbar button.
    pub fn toolbar(&mut self, action: ToolbarAction) -> ActionResult<()> {
        match action {
            ToolbarAction::Search => self.search().map(|_| ()),
            ToolbarAction::Copy => self.copy(),
            ToolbarAction::Download => match self.download() {
                Err(ActionError::EmptyExport) => Ok(()),
                other => other,
            },
            ToolbarAction::Clear => {
                self.process_key(KeyEvent::Clear);
                Ok(())
            }
        }
    }

    pub fn open_panel(&mut self, panel: InfoPanel) {
        self.session.panels_mut().open(panel);
        self.refresh();
    }

    pub fn close_panel(&mut self) {
        self.session.panels_mut().close();
        self.refresh();
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        let now = Instant::now();
        self.session.notices_mut().show_at(message, kind, now);
        self.session.sync_to_context(&mut self.context, now);
    }
}

//! View context for host communication.
//!
//! After every call into the `Keyboard`, the host reads these fields to
//! re-render: the text, where to put the caret, the notice to show and the
//! open panel. Plain data with public fields, nothing else.

use crate::buffer::Selection;
use crate::notice::NoticeKind;
use crate::panel::InfoPanel;

/// What the host needs to repaint after an event.
///
/// # Fields
///
/// - `content`: full composed text
/// - `selection`: current selection, in chars
/// - `caret_restore`: selection the host must re-apply on its next paint
///   (second phase of an edit); `None` when the host already owns it
/// - `notice`: message and kind of the visible notice, if any
/// - `panel`: informational panel to draw over the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    pub content: String,
    pub selection: Selection,
    pub caret_restore: Option<Selection>,
    pub notice: Option<(String, NoticeKind)>,
    pub panel: Option<InfoPanel>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending caret restore, leaving none.
    ///
    /// Hosts call this once focus is back on the text field.
    pub fn take_caret_restore(&mut self) -> Option<Selection> {
        self.caret_restore.take()
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice_text(&self) -> Option<&str> {
        self.notice.as_ref().map(|(m, _)| m.as_str())
    }
}

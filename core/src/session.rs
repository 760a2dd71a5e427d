//! Keyboard session state.
//!
//! The session groups the mutable pieces of one page visit: the current
//! buffer, the notice board and the panel state. Nothing in it outlives the
//! process.

use crate::buffer::BufferState;
use crate::context::ViewContext;
use crate::notice::NoticeBoard;
use crate::panel::PanelState;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer: BufferState,
    notices: NoticeBoard,
    panels: PanelState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notice_duration(duration: Duration) -> Self {
        Self {
            notices: NoticeBoard::with_duration(duration),
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &BufferState {
        &self.buffer
    }

    /// Install the state produced by the last edit.
    pub fn set_buffer(&mut self, buffer: BufferState) {
        self.buffer = buffer;
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelState {
        &mut self.panels
    }

    /// Copy session state into the host-facing context as seen at `now`.
    ///
    /// Leaves `caret_restore` alone; the coordinator owns it.
    pub fn sync_to_context(&mut self, context: &mut ViewContext, now: Instant) {
        context.content.clear();
        context.content.push_str(self.buffer.content());
        context.selection = self.buffer.selection();
        context.notice = self
            .notices
            .current_at(now)
            .map(|n| (n.message.clone(), n.kind));
        context.panel = self.panels.active();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;
    use crate::panel::InfoPanel;

    #[test]
    fn test_sync_to_context() {
        let mut session = Session::new();
        session.set_buffer(BufferState::with_text("باب"));
        session.panels_mut().open(InfoPanel::Contact);
        let now = Instant::now();
        session.notices_mut().show_at("hi", NoticeKind::Success, now);

        let mut ctx = ViewContext::new();
        session.sync_to_context(&mut ctx, now);
        assert_eq!(ctx.content, "باب");
        assert_eq!(ctx.selection.start(), 3);
        assert_eq!(ctx.notice_text(), Some("hi"));
        assert_eq!(ctx.panel, Some(InfoPanel::Contact));
        assert_eq!(ctx.caret_restore, None);
    }
}

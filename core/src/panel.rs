//! Static informational panels (privacy policy, contact).
//!
//! Panels are non-blocking: the keyboard keeps accepting input while one is
//! open. At most one panel is open; Escape closes it.

pub const SUPPORT_EMAIL: &str = "support@clavierarabe.pro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPanel {
    Privacy,
    Contact,
}

impl InfoPanel {
    pub fn title(&self) -> &'static str {
        match self {
            InfoPanel::Privacy => "Privacy Policy",
            InfoPanel::Contact => "Contact Us",
        }
    }

    /// Body paragraphs in display order.
    pub fn body(&self) -> &'static [&'static str] {
        match self {
            InfoPanel::Privacy => &[
                "Your typing is 100% private.",
                "This keyboard tool operates entirely client-side.",
                "We do not store, record, or transmit any text you type.",
                "No data is sent to any external servers.",
                "Once you close the session, your text is cleared locally.",
            ],
            InfoPanel::Contact => &[
                "Have a suggestion, found a bug, or just want to say hello? We'd love to hear from you!",
                "Email Support: support@clavierarabe.pro",
                "We usually reply within 24 hours.",
            ],
        }
    }
}

/// Which panel, if any, is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    active: Option<InfoPanel>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<InfoPanel> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Open `panel`, replacing any other open panel.
    pub fn open(&mut self, panel: InfoPanel) {
        self.active = Some(panel);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Escape dismisses the open panel. Returns true if one was closed.
    pub fn handle_escape(&mut self) -> bool {
        self.active.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_replaces() {
        let mut panels = PanelState::new();
        panels.open(InfoPanel::Privacy);
        panels.open(InfoPanel::Contact);
        assert_eq!(panels.active(), Some(InfoPanel::Contact));
    }

    #[test]
    fn test_escape_closes() {
        let mut panels = PanelState::new();
        assert!(!panels.handle_escape());
        panels.open(InfoPanel::Privacy);
        assert!(panels.handle_escape());
        assert!(!panels.is_open());
    }

    #[test]
    fn test_contact_mentions_support_address() {
        assert!(InfoPanel::Contact
            .body()
            .iter()
            .any(|line| line.contains(SUPPORT_EMAIL)));
        assert_eq!(InfoPanel::Privacy.title(), "Privacy Policy");
    }
}

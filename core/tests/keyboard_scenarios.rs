// core/tests/keyboard_scenarios.rs
//
// End-to-end keyboard flows against a recording platform:
// - typing, space and backspace scenarios
// - search query selection and empty-query handling
// - download round trip and clipboard failure recovery

use clavier_core::{
    ActionError, ActionResult, Browser, Clipboard, Config, DeletionUnit, Download, FileSaver,
    KeyEvent, Keyboard, NoticeKind, Platform, Selection, ToolbarAction,
};

#[derive(Default)]
struct FakePlatform {
    clipboard: Option<String>,
    opened: Vec<String>,
    saved: Vec<Download>,
    clipboard_denied: bool,
}

impl Clipboard for FakePlatform {
    fn write_text(&mut self, text: &str) -> ActionResult<()> {
        if self.clipboard_denied {
            return Err(ActionError::ClipboardDenied("NotAllowedError".into()));
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }
}

impl Browser for FakePlatform {
    fn open_url(&mut self, url: &str) -> ActionResult<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

impl FileSaver for FakePlatform {
    fn save(&mut self, download: &Download) -> ActionResult<()> {
        self.saved.push(download.clone());
        Ok(())
    }
}

impl Platform for FakePlatform {
    fn clipboard(&mut self) -> &mut dyn Clipboard {
        self
    }
    fn browser(&mut self) -> &mut dyn Browser {
        self
    }
    fn file_saver(&mut self) -> &mut dyn FileSaver {
        self
    }
}

fn host_state(kb: &mut Keyboard<FakePlatform>, content: &str, anchor: usize, focus: usize) {
    kb.process_key(KeyEvent::HostEdit {
        content: content.to_string(),
        anchor,
        focus,
    });
}

#[test]
fn test_scenario_typing_bab() {
    let mut kb = Keyboard::new(FakePlatform::default());
    for key in ["ب", "ا", "ب"] {
        kb.process_key(KeyEvent::Symbol(key.to_string()));
    }
    assert_eq!(kb.context().content, "باب");
    assert_eq!(kb.context().selection, Selection::caret(3));
}

#[test]
fn test_scenario_backspace_full_selection() {
    let mut kb = Keyboard::new(FakePlatform::default());
    host_state(&mut kb, "سلام", 0, 4);
    kb.process_key(KeyEvent::Backspace);
    assert_eq!(kb.context().content, "");
    assert_eq!(kb.context_mut().take_caret_restore(), Some(Selection::caret(0)));
}

#[test]
fn test_scenario_backspace_at_end() {
    let mut kb = Keyboard::new(FakePlatform::default());
    host_state(&mut kb, "مرحبا", 5, 5);
    kb.process_key(KeyEvent::Backspace);
    assert_eq!(kb.context().content, "مرحب");
    assert_eq!(kb.context().selection, Selection::caret(4));
}

#[test]
fn test_scenario_whitespace_search() {
    let mut kb = Keyboard::new(FakePlatform::default());
    host_state(&mut kb, "  ", 2, 2);
    assert_eq!(kb.search(), Err(ActionError::EmptyQuery));
    assert!(kb.platform().opened.is_empty());
    let notice = kb.context().notice.clone().unwrap();
    assert_eq!(notice.0, "Please type something to search");
    assert_eq!(notice.1, NoticeKind::Failure);
}

#[test]
fn test_scenario_search_selection() {
    let mut kb = Keyboard::new(FakePlatform::default());
    host_state(&mut kb, "hello world", 6, 11);
    let url = kb.search().unwrap();
    assert_eq!(url, "https://www.google.com/search?q=world");
    assert_eq!(kb.platform().opened, vec![url]);
}

#[test]
fn test_space_and_diacritics() {
    let mut kb = Keyboard::new(FakePlatform::default());
    kb.process_key(KeyEvent::Symbol("ب".into()));
    kb.process_key(KeyEvent::Symbol("\u{064E}".into()));
    kb.process_key(KeyEvent::Space);
    kb.process_key(KeyEvent::Symbol("لا".into()));
    assert_eq!(kb.context().content, "بَ لا");
    assert_eq!(kb.context().selection, Selection::caret(5));
}

#[test]
fn test_grapheme_backspace_from_config() {
    let mut cfg = Config::default();
    cfg.deletion_unit = DeletionUnit::Grapheme;
    let mut kb = Keyboard::with_config(FakePlatform::default(), cfg);
    host_state(&mut kb, "سبَّ", 4, 4);
    kb.process_key(KeyEvent::Backspace);
    assert_eq!(kb.context().content, "س");
    assert_eq!(kb.context().selection, Selection::caret(1));
}

#[test]
fn test_download_round_trip() {
    let mut kb = Keyboard::new(FakePlatform::default());
    host_state(&mut kb, "اللغة العربية", 0, 0);
    kb.download().unwrap();

    let saved = &kb.platform().saved[0];
    assert_eq!(saved.filename, "arabic_text.txt");
    assert_eq!(String::from_utf8(saved.bytes.clone()).unwrap(), "اللغة العربية");
    assert_eq!(kb.context().notice_text(), Some("Text downloaded!"));
}

#[test]
fn test_clipboard_failure_keeps_buffer() {
    let platform = FakePlatform {
        clipboard_denied: true,
        ..FakePlatform::default()
    };
    let mut kb = Keyboard::new(platform);
    kb.process_key(KeyEvent::Symbol("نص".into()));
    assert!(kb.toolbar(ToolbarAction::Copy).is_err());
    assert_eq!(kb.context().notice_text(), Some("Failed to copy text."));

    // typing continues after the failure
    kb.process_key(KeyEvent::Symbol("!".into()));
    assert_eq!(kb.context().content, "نص!");
}

#[test]
fn test_copy_success() {
    let mut kb = Keyboard::new(FakePlatform::default());
    kb.process_key(KeyEvent::Symbol("شكرا".into()));
    kb.copy().unwrap();
    assert_eq!(kb.platform().clipboard.as_deref(), Some("شكرا"));
    assert_eq!(kb.context().notice_text(), Some("Text copied to clipboard!"));
}

#[test]
fn test_typing_while_panel_open() {
    let mut kb = Keyboard::new(FakePlatform::default());
    kb.open_panel(clavier_core::InfoPanel::Contact);
    kb.process_key(KeyEvent::Symbol("ب".into()));
    assert_eq!(kb.context().content, "ب");
    assert_eq!(kb.context().panel, Some(clavier_core::InfoPanel::Contact));
}

//! clavier-core
//!
//! Core of an on-screen Arabic keyboard: the symbol layout, a pure text
//! buffer engine, and the host-facing coordinator that turns key events into
//! view updates and side-effect actions (copy, download, search).
//!
//! Public API:
//! - `LayoutTable` - Ordered, immutable catalog of symbol groups
//! - `BufferState` - Composed text plus selection, edited by pure functions
//! - `Keyboard` - Event coordinator over a host `Platform`
//! - `ViewContext` - What the host reads back after each event
//! - `Config` - TOML-backed settings
//!
//! ```rust,ignore
//! use clavier_core::{Keyboard, KeyEvent};
//!
//! let mut kb = Keyboard::new(platform);
//! kb.process_key(KeyEvent::Symbol("ب".into()));
//! kb.process_key(KeyEvent::Symbol("ا".into()));
//! kb.process_key(KeyEvent::Symbol("ب".into()));
//! assert_eq!(kb.context().content, "باب");
//! ```

pub mod layout;
pub use layout::{GroupId, KeyStyle, LayoutTable, SymbolGroup};

pub mod buffer;
pub use buffer::{
    clear, delete_backward, insert_at_caret, insert_space, selected_text, BufferState,
    DeletionUnit, Selection,
};

pub mod error;
pub use error::{ActionError, ActionResult};

pub mod actions;
pub use actions::{export, search_query, search_url, Browser, Clipboard, Download, FileSaver, Platform};

pub mod notice;
pub use notice::{Notice, NoticeBoard, NoticeKind};

pub mod panel;
pub use panel::{InfoPanel, PanelState};

pub mod ad;
pub use ad::{AdFormat, AdLoader, AdPosition, AdSlot, AdStatus, NoAds};

pub mod toolbar;
pub use toolbar::{ButtonVariant, ToolbarAction};

pub mod config;
pub use config::Config;

pub mod context;
pub use context::ViewContext;

pub mod session;
pub use session::Session;

pub mod keyboard;
pub use keyboard::{KeyEvent, KeyResult, Keyboard};

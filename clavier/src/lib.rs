//! clavier crate root
//!
//! Terminal front end for the Arabic keyboard core. Provides concrete
//! platform services (clipboard, browser, file export), a front-end config
//! that extends the core `Config`, and the interactive prompt loop.
//!
//! Public API exported here:
//! - `ClavierConfig` from `config`
//! - `HostPlatform` and the individual services from `platform`
//! - `repl::run` for the prompt loop

pub mod config;
pub mod platform;
pub mod repl;

// Re-export the core so callers only need this crate.
pub use clavier_core::{
    ActionError, ActionResult, BufferState, ButtonVariant, Config, DeletionUnit, GroupId,
    InfoPanel, KeyEvent, KeyResult, Keyboard, LayoutTable, Selection, ToolbarAction, ViewContext,
};

pub use config::ClavierConfig;
pub use platform::{
    CommandBrowser, CommandClipboard, DirectorySaver, HostClipboard, HostPlatform, SystemClipboard,
};

/// Build a keyboard wired to the host platform described by `config`.
pub fn create_keyboard(config: ClavierConfig) -> Keyboard<HostPlatform> {
    let platform = HostPlatform::from_config(&config);
    Keyboard::with_config(platform, config.into_base())
}

//! Host platform services backed by the operating system.
//!
//! Clipboard writes go to the system clipboard through `clipboard-rs`, unless
//! the config names a command to pipe the text into instead. The browser is
//! launched with a configurable opener command (`xdg-open`, `open`, ...).
//! Exported files go to a directory on disk. Every failure maps onto the core
//! `ActionError` so the keyboard can show a notice instead of crashing.

use crate::config::ClavierConfig;
use clavier_core::{ActionError, ActionResult, Browser, Clipboard, Download, FileSaver, Platform};
use clipboard_rs::{Clipboard as _, ClipboardContext};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// The operating system clipboard.
///
/// The context is opened on first use and kept, since some backends only
/// serve the copied text while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.context.is_some())
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> ActionResult<()> {
        let context = match self.context.take() {
            Some(context) => context,
            None => ClipboardContext::new()
                .map_err(|e| ActionError::ClipboardDenied(e.to_string()))?,
        };
        let result = context
            .set_text(text.to_owned())
            .map_err(|e| ActionError::ClipboardDenied(e.to_string()));
        self.context = Some(context);
        result
    }
}

/// Clipboard that pipes text into an external program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: Vec<String>,
}

impl CommandClipboard {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Clipboard for CommandClipboard {
    fn write_text(&mut self, text: &str) -> ActionResult<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| ActionError::ClipboardDenied("no clipboard command configured".into()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ActionError::ClipboardDenied(format!("{}: {}", program, e)))?;

        // stdin is closed at the end of the match so the program sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| ActionError::ClipboardDenied(e.to_string()))?;
        written.map_err(|e| ActionError::ClipboardDenied(e.to_string()))?;
        if !status.success() {
            return Err(ActionError::ClipboardDenied(format!("{} exited with {}", program, status)));
        }
        Ok(())
    }
}

/// Clipboard selected by `ClavierConfig::clipboard_command`.
#[derive(Debug)]
pub enum HostClipboard {
    System(SystemClipboard),
    Command(CommandClipboard),
}

impl HostClipboard {
    pub fn from_config(config: &ClavierConfig) -> Self {
        match &config.clipboard_command {
            Some(command) => Self::Command(CommandClipboard::new(command.clone())),
            None => Self::System(SystemClipboard::new()),
        }
    }
}

impl Clipboard for HostClipboard {
    fn write_text(&mut self, text: &str) -> ActionResult<()> {
        match self {
            Self::System(clipboard) => clipboard.write_text(text),
            Self::Command(clipboard) => clipboard.write_text(text),
        }
    }
}

/// Browser launcher that runs an opener command with the URL appended.
#[derive(Debug, Clone)]
pub struct CommandBrowser {
    command: Vec<String>,
}

impl CommandBrowser {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl Browser for CommandBrowser {
    fn open_url(&mut self, url: &str) -> ActionResult<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| ActionError::BrowserUnavailable("no open command configured".into()))?;

        let mut child = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ActionError::BrowserUnavailable(format!("{}: {}", program, e)))?;

        // The opener may outlive this call; reap it off the input path.
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                tracing::warn!(error = %e, "failed to wait for opener");
            }
        });
        Ok(())
    }
}

/// Writes exported files into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
    last_saved: Option<PathBuf>,
}

impl DirectorySaver {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            last_saved: None,
        }
    }

    /// Path of the most recent successful export.
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }
}

impl FileSaver for DirectorySaver {
    fn save(&mut self, download: &Download) -> ActionResult<()> {
        // Keep only the final component so a configured name cannot escape `dir`.
        let name = Path::new(&download.filename)
            .file_name()
            .ok_or_else(|| ActionError::ExportFailed(format!("invalid file name {:?}", download.filename)))?;
        let path = self.dir.join(name);
        std::fs::write(&path, &download.bytes)
            .map_err(|e| ActionError::ExportFailed(format!("{}: {}", path.display(), e)))?;
        self.last_saved = Some(path);
        Ok(())
    }
}

/// The platform the terminal front end runs on.
#[derive(Debug)]
pub struct HostPlatform {
    pub clipboard: HostClipboard,
    pub browser: CommandBrowser,
    pub saver: DirectorySaver,
}

impl HostPlatform {
    pub fn from_config(config: &ClavierConfig) -> Self {
        Self {
            clipboard: HostClipboard::from_config(config),
            browser: CommandBrowser::new(config.open_command.clone()),
            saver: DirectorySaver::new(config.export_dir.clone()),
        }
    }
}

impl Platform for HostPlatform {
    fn clipboard(&mut self) -> &mut dyn Clipboard {
        &mut self.clipboard
    }

    fn browser(&mut self) -> &mut dyn Browser {
        &mut self.browser
    }

    fn file_saver(&mut self) -> &mut dyn FileSaver {
        &mut self.saver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavier_core::{export, BufferState};

    #[test]
    fn test_directory_saver_writes_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let mut saver = DirectorySaver::new(dir.path());
        let download = export(&BufferState::with_text("مرحبا بالعالم"), "arabic_text.txt").unwrap();
        saver.save(&download).unwrap();

        let path = saver.last_saved().unwrap().to_path_buf();
        assert_eq!(path, dir.path().join("arabic_text.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "مرحبا بالعالم");
    }

    #[test]
    fn test_directory_saver_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut saver = DirectorySaver::new(dir.path());
        let download = export(&BufferState::with_text("x"), "../escape.txt").unwrap();
        saver.save(&download).unwrap();
        assert_eq!(saver.last_saved().unwrap(), dir.path().join("escape.txt"));
    }

    #[test]
    fn test_missing_clipboard_program_is_denied() {
        let mut clipboard = CommandClipboard::new(vec!["clavier-no-such-program".into()]);
        assert!(matches!(
            clipboard.write_text("نص"),
            Err(ActionError::ClipboardDenied(_))
        ));
    }

    #[test]
    fn test_default_config_uses_system_clipboard() {
        let platform = HostPlatform::from_config(&ClavierConfig::default());
        assert!(matches!(platform.clipboard, HostClipboard::System(_)));

        let mut config = ClavierConfig::default();
        config.clipboard_command = Some(vec!["xclip".into(), "-selection".into(), "clipboard".into()]);
        let platform = HostPlatform::from_config(&config);
        assert!(matches!(platform.clipboard, HostClipboard::Command(_)));
    }

    #[test]
    fn test_system_clipboard_never_panics() {
        // Headless test machines have no clipboard; that must surface as a denial.
        match SystemClipboard::new().write_text("مرحبا") {
            Ok(()) | Err(ActionError::ClipboardDenied(_)) => {}
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_command_clipboard_pipes_text() {
        let mut clipboard = CommandClipboard::new(vec!["cat".into()]);
        assert!(clipboard.write_text("نص").is_ok());

        let mut clipboard = CommandClipboard::new(vec!["false".into()]);
        assert!(matches!(
            clipboard.write_text("نص"),
            Err(ActionError::ClipboardDenied(_))
        ));
    }

    /// Children of this process that have exited but were never waited on.
    #[cfg(target_os = "linux")]
    fn zombie_children() -> usize {
        let me = std::process::id().to_string();
        std::fs::read_dir("/proc")
            .unwrap()
            .filter_map(|entry| std::fs::read_to_string(entry.ok()?.path().join("stat")).ok())
            .filter(|stat| {
                // "pid (comm) state ppid ..."; comm may contain spaces.
                let Some(close) = stat.rfind(')') else {
                    return false;
                };
                let mut fields = stat[close + 1..].split_whitespace();
                let state = fields.next();
                let ppid = fields.next();
                state == Some("Z") && ppid == Some(me.as_str())
            })
            .count()
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_opened_browsers_are_reaped() {
        let mut browser = CommandBrowser::new(vec!["true".into()]);
        for _ in 0..5 {
            browser.open_url("https://www.google.com/search?q=x").unwrap();
        }
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
        while zombie_children() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(50));
        }
        assert_eq!(zombie_children(), 0);
    }

    #[test]
    fn test_empty_commands() {
        assert!(CommandClipboard::new(vec![]).write_text("x").is_err());
        assert!(matches!(
            CommandBrowser::new(vec![]).open_url("https://example.com"),
            Err(ActionError::BrowserUnavailable(_))
        ));
    }
}

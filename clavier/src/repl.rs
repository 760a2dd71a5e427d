//! Line-oriented terminal front end.
//!
//! Each input line is either text to insert at the caret or a `:command`.
//! After every line the current buffer is printed with the selection marked,
//! followed by the active notice and panel, if any.

use anyhow::{anyhow, bail, Result};
use clavier_core::{
    GroupId, InfoPanel, KeyEvent, KeyResult, Keyboard, NoticeKind, Platform, ToolbarAction,
    ViewContext,
};
use std::io::{BufRead, Write};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert literal text
    Insert(String),
    /// Press the key at `index` (1-based) of a layout group
    Key(GroupId, usize),
    Space,
    Backspace,
    Clear,
    Select(usize, usize),
    Caret(usize),
    Copy,
    Save,
    Search,
    Panel(InfoPanel),
    Escape,
    Show,
    Layout,
    Help,
    Quit,
}

/// Parse a line typed at the prompt.
///
/// Lines not starting with `:` are inserted verbatim; a leading `\:` inserts
/// a literal colon.
pub fn parse_line(line: &str) -> Result<Command> {
    if let Some(rest) = line.strip_prefix("\\:") {
        return Ok(Command::Insert(format!(":{}", rest)));
    }
    let Some(cmd) = line.strip_prefix(':') else {
        return Ok(Command::Insert(line.to_string()));
    };

    let mut parts = cmd.split_whitespace();
    let name = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();
    let num = |i: usize| -> Result<usize> {
        let raw = args
            .get(i)
            .ok_or_else(|| anyhow!(":{} expects {} argument(s)", name, i + 1))?;
        raw.parse::<usize>()
            .map_err(|_| anyhow!("not a position: {}", raw))
    };

    let command = match name {
        "space" => Command::Space,
        "bs" | "backspace" => Command::Backspace,
        "clear" => Command::Clear,
        "select" => Command::Select(num(0)?, num(1)?),
        "caret" => Command::Caret(num(0)?),
        "key" => {
            let group = args
                .first()
                .and_then(|g| GroupId::parse(g))
                .ok_or_else(|| anyhow!("usage: :key <group> <n>"))?;
            Command::Key(group, num(1)?)
        }
        "copy" => Command::Copy,
        "save" => Command::Save,
        "search" => Command::Search,
        "privacy" => Command::Panel(InfoPanel::Privacy),
        "contact" => Command::Panel(InfoPanel::Contact),
        "esc" => Command::Escape,
        "show" => Command::Show,
        "layout" => Command::Layout,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        other => bail!("unknown command :{}", other),
    };
    Ok(command)
}

/// Render the buffer with `[` `]` around the selection, or `|` at the caret.
pub fn render_buffer(ctx: &ViewContext) -> String {
    let mut out = String::new();
    let (start, end) = (ctx.selection.start(), ctx.selection.end());
    for (i, ch) in ctx.content.chars().enumerate() {
        if i == start {
            out.push(if start == end { '|' } else { '[' });
        }
        if i == end && start != end {
            out.push(']');
        }
        out.push(ch);
    }
    let len = ctx.content.chars().count();
    if start == len {
        out.push(if start == end { '|' } else { '[' });
    }
    if end == len && start != end {
        out.push(']');
    }
    out
}

pub fn print_layout<W: Write>(out: &mut W, layout: clavier_core::LayoutTable) -> Result<()> {
    for group in layout.groups() {
        writeln!(out, "{:<12} {}", group.id().as_str(), group.symbols().join(" "))?;
    }
    Ok(())
}

const HELP: &str = "\
text            insert text at the caret
:space :bs      space / backspace
:key GROUP N    press the Nth key of a layout group (e.g. :key row2 4)
:select A B     select chars A..B      :caret N   move the caret
:copy :save :search :clear             toolbar actions
:privacy :contact :esc                 info panels
:show :layout :help :quit";

/// Run the prompt loop until EOF or `:quit`.
pub fn run<P, R, W>(kb: &mut Keyboard<P>, input: R, out: &mut W) -> Result<()>
where
    P: Platform,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            continue;
        }

        let command = match parse_line(trimmed) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        execute(kb, command, out)?;
        print_state(kb.context(), out)?;
    }
    Ok(())
}

fn execute<P: Platform, W: Write>(kb: &mut Keyboard<P>, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Insert(text) => {
            kb.process_key(KeyEvent::Symbol(text));
        }
        Command::Key(group, n) => {
            let symbol = kb
                .layout()
                .find(group)
                .and_then(|g| g.symbols().get(n.wrapping_sub(1)))
                .copied();
            match symbol {
                Some(s) => {
                    kb.process_key(KeyEvent::Symbol(s.to_string()));
                }
                None => writeln!(out, "error: no key {} in {}", n, group)?,
            }
        }
        Command::Space => {
            kb.process_key(KeyEvent::Space);
        }
        Command::Backspace => {
            kb.process_key(KeyEvent::Backspace);
        }
        Command::Clear => {
            kb.process_key(KeyEvent::Clear);
        }
        Command::Select(a, b) => {
            kb.select(a, b);
        }
        Command::Caret(n) => {
            kb.select(n, n);
        }
        Command::Copy => {
            let _ = kb.toolbar(ToolbarAction::Copy);
        }
        Command::Save => {
            let _ = kb.toolbar(ToolbarAction::Download);
        }
        Command::Search => {
            if let Ok(url) = kb.search() {
                writeln!(out, "opened {}", url)?;
            }
        }
        Command::Panel(panel) => kb.open_panel(panel),
        Command::Escape => {
            if kb.process_key(KeyEvent::Escape) == KeyResult::NotHandled {
                writeln!(out, "(no panel open)")?;
            }
        }
        Command::Show => kb.refresh(),
        Command::Layout => print_layout(out, kb.layout())?,
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_state<W: Write>(ctx: &ViewContext, out: &mut W) -> Result<()> {
    writeln!(out, "> {}", render_buffer(ctx))?;
    if let Some((message, kind)) = &ctx.notice {
        let mark = match kind {
            NoticeKind::Success => "✓",
            NoticeKind::Failure => "⚠",
        };
        writeln!(out, "  {} {}", mark, message)?;
    }
    if let Some(panel) = ctx.panel {
        writeln!(out, "  ── {} ── (:esc to close)", panel.title())?;
        for line in panel.body() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavier_core::Selection;

    #[test]
    fn test_parse_text_and_escape() {
        assert_eq!(parse_line("باب").unwrap(), Command::Insert("باب".into()));
        assert_eq!(parse_line("\\:)").unwrap(), Command::Insert(":)".into()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":bs").unwrap(), Command::Backspace);
        assert_eq!(parse_line(":select 6 11").unwrap(), Command::Select(6, 11));
        assert_eq!(parse_line(":key row2 4").unwrap(), Command::Key(GroupId::Row2, 4));
        assert_eq!(parse_line(":privacy").unwrap(), Command::Panel(InfoPanel::Privacy));
        assert!(parse_line(":select 1").is_err());
        assert!(parse_line(":key row9 1").is_err());
        assert!(parse_line(":nope").is_err());
    }

    #[test]
    fn test_render_buffer() {
        let mut ctx = ViewContext::new();
        ctx.content = "abc".into();
        ctx.selection = Selection::caret(3);
        assert_eq!(render_buffer(&ctx), "abc|");
        ctx.selection = Selection::new(1, 2);
        assert_eq!(render_buffer(&ctx), "a[b]c");
        ctx.selection = Selection::new(0, 3);
        assert_eq!(render_buffer(&ctx), "[abc]");
        ctx.content.clear();
        ctx.selection = Selection::caret(0);
        assert_eq!(render_buffer(&ctx), "|");
    }
}

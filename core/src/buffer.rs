//! Text buffer engine.
//!
//! `BufferState` holds the composed text and a selection range over it. The
//! editing operations are pure: they take a state by reference and return the
//! state that results from the edit, leaving the input untouched. The host
//! keeps whichever state is current and feeds it back on the next event.
//!
//! All indices are counted in Unicode scalar values (`char`s), never bytes.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Unit removed by a collapsed backspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionUnit {
    /// One Unicode scalar value. Every key on the layout is a single scalar
    /// except the "لا" ligature, which is removed one letter at a time.
    #[default]
    Char,
    /// One extended grapheme cluster (a letter together with its tashkeel).
    Grapheme,
}

/// Half-open range `[start, end)` over the buffer, in chars.
///
/// `start == end` is a caret with nothing selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Build a selection from two endpoints in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    fn clamped(self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}

/// Composed text plus the current selection.
///
/// Invariant: `selection.end() <= content.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferState {
    content: String,
    selection: Selection,
}

impl BufferState {
    /// The empty state: no text, caret at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a state reported by the host (e.g. after the user typed
    /// directly into the text field).
    ///
    /// `anchor` and `focus` may come in either order; both are clamped to the
    /// length of `content`.
    pub fn from_host(content: impl Into<String>, anchor: usize, focus: usize) -> Self {
        let content = content.into();
        let len = content.chars().count();
        Self {
            selection: Selection::new(anchor, focus).clamped(len),
            content,
        }
    }

    /// Text with the caret placed at the end.
    pub fn with_text(content: impl Into<String>) -> Self {
        let content = content.into();
        let len = content.chars().count();
        Self {
            content,
            selection: Selection::caret(len),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Length of the content in chars.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace the selection, clamped to the content.
    pub fn select(&self, anchor: usize, focus: usize) -> Self {
        Self::from_host(self.content.clone(), anchor, focus)
    }

    pub fn insert(&self, symbol: &str) -> Self {
        insert_at_caret(self, symbol)
    }

    pub fn delete_backward(&self, unit: DeletionUnit) -> Self {
        delete_backward(self, unit)
    }

    pub fn selected_text(&self) -> &str {
        selected_text(self)
    }

    /// Byte offset of char index `pos` (or the end of the content).
    fn byte_offset(&self, pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn byte_range(&self) -> (usize, usize) {
        (
            self.byte_offset(self.selection.start),
            self.byte_offset(self.selection.end),
        )
    }
}

/// Replace the selection with `symbol` and put the caret after it.
///
/// `content' = content[..start] + symbol + content[end..]`, caret at
/// `start + len(symbol)`. Any string is accepted, not only layout symbols.
pub fn insert_at_caret(state: &BufferState, symbol: &str) -> BufferState {
    let (from, to) = state.byte_range();
    let mut content = String::with_capacity(state.content.len() - (to - from) + symbol.len());
    content.push_str(&state.content[..from]);
    content.push_str(symbol);
    content.push_str(&state.content[to..]);

    BufferState {
        content,
        selection: Selection::caret(state.selection.start + symbol.chars().count()),
    }
}

/// Insert a single space at the caret.
pub fn insert_space(state: &BufferState) -> BufferState {
    insert_at_caret(state, " ")
}

/// Backspace.
///
/// A non-collapsed selection is removed and the caret collapses to its start.
/// A caret after the first position removes one `unit` before it. A caret at
/// position 0 leaves the state unchanged.
pub fn delete_backward(state: &BufferState, unit: DeletionUnit) -> BufferState {
    let sel = state.selection;

    if !sel.is_collapsed() {
        let (from, to) = state.byte_range();
        let mut content = state.content.clone();
        content.replace_range(from..to, "");
        return BufferState {
            content,
            selection: Selection::caret(sel.start),
        };
    }

    if sel.start == 0 {
        return state.clone();
    }

    let caret_byte = state.byte_offset(sel.start);
    let head = &state.content[..caret_byte];
    let last = match unit {
        DeletionUnit::Char => head.char_indices().next_back().map(|(idx, _)| (idx, 1)),
        DeletionUnit::Grapheme => head
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, cluster)| (idx, cluster.chars().count())),
    };
    let Some((from, removed_chars)) = last else {
        return state.clone();
    };

    let mut content = state.content.clone();
    content.replace_range(from..caret_byte, "");
    BufferState {
        content,
        selection: Selection::caret(sel.start - removed_chars),
    }
}

/// The canonical empty state, whatever the input.
pub fn clear(_state: &BufferState) -> BufferState {
    BufferState::new()
}

/// `content[start..end]`; empty when the selection is collapsed.
pub fn selected_text(state: &BufferState) -> &str {
    let (from, to) = state.byte_range();
    &state.content[from..to]
}

//! Arabic keyboard layout table.
//!
//! The layout is a fixed, ordered catalog of symbol groups: digits, three main
//! letter rows, a supplementary row, tashkeel (diacritics) and punctuation.
//! Hosts walk `LayoutTable::groups()` to render keys and use `contains()` to
//! check whether a string is one of the on-screen symbols.
//!
//! Symbol order inside a group is the key position on the keyboard and never
//! changes at runtime.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const ARABIC_DIGITS: &[&str] = &["١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩", "٠"];

const ROW_1: &[&str] = &["ض", "ص", "ث", "ق", "ف", "غ", "ع", "ه", "خ", "ح", "ج", "د"];

const ROW_2: &[&str] = &["ش", "س", "ي", "ب", "ل", "ا", "ت", "ن", "م", "ك", "ط"];

// "لا" is a two-codepoint ligature key.
const ROW_3: &[&str] = &["ئ", "ء", "ؤ", "ر", "لا", "ى", "ة", "و", "ز", "ظ"];

// Hamza variations and tatweel
const ROW_4_EXTRA: &[&str] = &["ذ", "أ", "إ", "آ", "ـ"];

const TASHKEEL: &[&str] = &[
    "\u{064E}", // fatha
    "\u{064B}", // fathatan
    "\u{064F}", // damma
    "\u{064C}", // dammatan
    "\u{0650}", // kasra
    "\u{064D}", // kasratan
    "\u{0652}", // sukun
    "\u{0651}", // shadda
];

const PUNCTUATION: &[&str] = &["؟", "!", ".", "،", "؛", ":", "\"", "'", "(", ")"];

const LATIN_DIGITS: &[&str] = &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// Number of punctuation symbols that get an on-screen key.
const PUNCTUATION_KEYS: usize = 4;

/// Stable identifier of a symbol group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    Digits,
    Row1,
    Row2,
    Row3,
    Row4Extra,
    Diacritics,
    Punctuation,
    /// Optional group, not part of the standard rendering.
    LatinDigits,
}

impl GroupId {
    /// The identifier string hosts use to pick a rendering style.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupId::Digits => "digits",
            GroupId::Row1 => "row1",
            GroupId::Row2 => "row2",
            GroupId::Row3 => "row3",
            GroupId::Row4Extra => "row4-extra",
            GroupId::Diacritics => "diacritics",
            GroupId::Punctuation => "punctuation",
            GroupId::LatinDigits => "latin-digits",
        }
    }

    /// Parse an identifier produced by `as_str`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "digits" => Some(GroupId::Digits),
            "row1" => Some(GroupId::Row1),
            "row2" => Some(GroupId::Row2),
            "row3" => Some(GroupId::Row3),
            "row4-extra" => Some(GroupId::Row4Extra),
            "diacritics" => Some(GroupId::Diacritics),
            "punctuation" => Some(GroupId::Punctuation),
            "latin-digits" => Some(GroupId::LatinDigits),
            _ => None,
        }
    }

    /// Presentational style for keys of this group.
    pub fn key_style(&self) -> KeyStyle {
        match self {
            GroupId::Digits | GroupId::LatinDigits => KeyStyle::Muted,
            GroupId::Row1 | GroupId::Row2 | GroupId::Row3 | GroupId::Row4Extra => {
                KeyStyle::Standard
            }
            GroupId::Diacritics => KeyStyle::Special,
            GroupId::Punctuation => KeyStyle::Accent,
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a key is drawn. Only the rendering layer looks at this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    Standard,
    /// Muted text (digits)
    Muted,
    /// Highlighted background (tashkeel)
    Special,
    /// Accent colour (punctuation)
    Accent,
}

/// An ordered run of symbols sharing a keyboard row or role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolGroup {
    id: GroupId,
    symbols: &'static [&'static str],
}

impl SymbolGroup {
    const fn new(id: GroupId, symbols: &'static [&'static str]) -> Self {
        Self { id, symbols }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    /// All symbols of the group in key order. Never empty.
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    /// Symbols that get an on-screen key.
    ///
    /// Identical to `symbols()` except for punctuation, where only the first
    /// few marks are placed on the bottom row next to the tashkeel keys.
    pub fn key_symbols(&self) -> &'static [&'static str] {
        match self.id {
            GroupId::Punctuation => &self.symbols[..PUNCTUATION_KEYS.min(self.symbols.len())],
            _ => self.symbols,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(&symbol)
    }
}

static STANDARD_GROUPS: [SymbolGroup; 7] = [
    SymbolGroup::new(GroupId::Digits, ARABIC_DIGITS),
    SymbolGroup::new(GroupId::Row1, ROW_1),
    SymbolGroup::new(GroupId::Row2, ROW_2),
    SymbolGroup::new(GroupId::Row3, ROW_3),
    SymbolGroup::new(GroupId::Row4Extra, ROW_4_EXTRA),
    SymbolGroup::new(GroupId::Diacritics, TASHKEEL),
    SymbolGroup::new(GroupId::Punctuation, PUNCTUATION),
];

static EXTENDED_GROUPS: [SymbolGroup; 8] = [
    SymbolGroup::new(GroupId::Digits, ARABIC_DIGITS),
    SymbolGroup::new(GroupId::LatinDigits, LATIN_DIGITS),
    SymbolGroup::new(GroupId::Row1, ROW_1),
    SymbolGroup::new(GroupId::Row2, ROW_2),
    SymbolGroup::new(GroupId::Row3, ROW_3),
    SymbolGroup::new(GroupId::Row4Extra, ROW_4_EXTRA),
    SymbolGroup::new(GroupId::Diacritics, TASHKEEL),
    SymbolGroup::new(GroupId::Punctuation, PUNCTUATION),
];

// Reverse index: symbol -> owning group. Latin digits included so lookups
// succeed whichever table variant the host renders.
static SYMBOL_INDEX: Lazy<HashMap<&'static str, GroupId>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for group in EXTENDED_GROUPS.iter() {
        for &symbol in group.symbols() {
            index.insert(symbol, group.id());
        }
    }
    index
});

/// The canonical, immutable keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTable {
    groups: &'static [SymbolGroup],
}

impl LayoutTable {
    /// The default layout: Arabic digits, letter rows, tashkeel, punctuation.
    pub fn standard() -> Self {
        Self {
            groups: &STANDARD_GROUPS,
        }
    }

    /// The default layout with the Latin digit row placed after the Arabic digits.
    pub fn with_latin_digits() -> Self {
        Self {
            groups: &EXTENDED_GROUPS,
        }
    }

    /// Groups in rendering order. Stable across calls and never empty.
    pub fn groups(&self) -> &'static [SymbolGroup] {
        self.groups
    }

    /// Look up a group by identifier.
    pub fn find(&self, id: GroupId) -> Option<&'static SymbolGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Every symbol in rendering order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.groups.iter().flat_map(|g| g.symbols().iter().copied())
    }

    /// Check whether `symbol` is one of this table's keys.
    pub fn contains(&self, symbol: &str) -> bool {
        self.group_of(symbol).is_some()
    }

    /// The group a symbol belongs to, if it is part of this table.
    pub fn group_of(&self, symbol: &str) -> Option<GroupId> {
        let id = SYMBOL_INDEX.get(symbol).copied()?;
        self.groups.iter().any(|g| g.id() == id).then_some(id)
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::standard()
    }
}

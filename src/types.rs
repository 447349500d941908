use std::collections::HashMap;

use crate::catalog::keys;

/// A position within a text document.
///
/// Positions are zero-indexed and column values are counted in grapheme clusters,
/// not bytes or chars. This ensures correct handling of emoji and combining characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column position in grapheme clusters.
    pub col: u32,
}

impl Position {
    /// The origin position (0, 0).
    pub const ZERO: Position = Position { line: 0, col: 0 };
}

/// A range of text defined by start and end positions.
///
/// Ranges are half-open intervals [start, end), meaning the start position
/// is included but the end position is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start position (inclusive).
    pub start: Position,
    /// The end position (exclusive).
    pub end: Position,
}

/// A single text replacement for the host to perform.
///
/// Edits describe the mutation without performing it: the host owns the
/// document and applies each batch of edits atomically. Edits produced by
/// this crate never overlap within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The range to replace.
    pub range: Range,
    /// The replacement text. Empty for deletions.
    pub text: String,
}

impl Edit {
    /// Replace the text in `range` with `text`.
    pub fn replace(range: Range, text: String) -> Self {
        Self { range, text }
    }

    /// Delete the text in `range`.
    pub fn delete(range: Range) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    /// Insert `text` at `at` without replacing anything.
    pub fn insert(at: Position, text: String) -> Self {
        Self {
            range: Range { start: at, end: at },
            text,
        }
    }
}

/// What a completion candidate stands for.
///
/// Both kinds carry the same fields and differ only in how the host's
/// renderer presents them, so this is a tag rather than a type hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    /// A recognized configuration key.
    PropertyName,
    /// A permitted value for the key on the current line.
    PropertyValue,
}

/// A completion candidate surfaced to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text to insert, verbatim from the catalog.
    pub text: String,
    /// The kind tag for the host's renderer.
    pub kind: CompletionKind,
}

/// The indentation convention a document should be rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab character per indent level.
    Tab,
    /// A fixed number of space characters per indent level.
    Space,
}

impl IndentStyle {
    /// Parse a configured style name. Unknown styles read as `None`,
    /// which downstream transforms treat as "leave the document alone".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tab" => Some(Self::Tab),
            "space" => Some(Self::Space),
            _ => None,
        }
    }
}

/// A normalized line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style `\n`.
    Lf,
    /// Windows-style `\r\n`.
    Crlf,
}

impl LineEnding {
    /// Parse a configured `end_of_line` name, case-insensitively.
    ///
    /// Only `lf` and `crlf` resolve; `cr` and anything else read as `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lf" => Some(Self::Lf),
            "crlf" => Some(Self::Crlf),
            _ => None,
        }
    }

    /// The terminator text itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// The resolved configuration for one document, as a flat key→value bag.
///
/// The external configuration parser produces this; the crate never discovers
/// or parses configuration files itself. Any subset of keys may be present and
/// values arrive as untyped strings — the typed accessors below perform the
/// lenient interpretation the transforms rely on, reading absent, unparseable,
/// or out-of-domain values as `None`.
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    values: HashMap<String, String>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert, mainly for building snapshots in host glue and tests.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    /// Store `value` under `key`. Keys are normalized the same way catalog
    /// lookup normalizes them (trimmed, ASCII-lowercased).
    pub fn insert(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.trim().to_ascii_lowercase(), value.to_string());
    }

    /// Raw value access for keys the crate passes through unexamined
    /// (e.g. `charset`).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn indent_style(&self) -> Option<IndentStyle> {
        self.get(keys::INDENT_STYLE).and_then(IndentStyle::from_name)
    }

    /// Indent size as a positive integer. EditorConfig's `indent_size = tab`
    /// form does not parse and therefore reads as absent.
    pub fn indent_size(&self) -> Option<usize> {
        self.get(keys::INDENT_SIZE)?
            .trim()
            .parse()
            .ok()
            .filter(|&size| size > 0)
    }

    pub fn end_of_line(&self) -> Option<LineEnding> {
        self.get(keys::END_OF_LINE).and_then(LineEnding::from_name)
    }

    pub fn trim_trailing_whitespace(&self) -> Option<bool> {
        self.flag(keys::TRIM_TRAILING_WHITESPACE)
    }

    pub fn insert_final_newline(&self) -> Option<bool> {
        self.flag(keys::INSERT_FINAL_NEWLINE)
    }

    fn flag(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigSnapshot
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in iter {
            snapshot.insert(key.as_ref(), &value.into());
        }
        snapshot
    }
}

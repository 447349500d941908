use log::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::traits::{DocumentOps, HostEditor};
use crate::types::{ConfigSnapshot, Edit, IndentStyle, LineEnding, Position, Range};

/// Per-line edits rewriting existing leading-whitespace runs into the
/// configured indent style.
///
/// Requires both `indent_style` and `indent_size` to resolve; otherwise the
/// document is left alone. Lines are handled independently: a line whose
/// leading run is already in the target style, or has no run in the source
/// style, produces no edit. The returned edits are in ascending line order,
/// at most one per line, non-overlapping, and may be applied in any order —
/// a consumer should still hand them to the host as one atomic batch.
pub fn convert_indentation<D: DocumentOps>(config: &ConfigSnapshot, doc: &D) -> Vec<Edit> {
    let (Some(style), Some(size)) = (config.indent_style(), config.indent_size()) else {
        trace!("indentation conversion skipped: style or size unresolved");
        return Vec::new();
    };

    let mut edits = Vec::new();
    for line in 0..doc.line_count() {
        if let Some(edit) = convert_line(line, &doc.line_text(line), style, size) {
            edits.push(edit);
        }
    }
    debug!(
        "indentation conversion to {style:?} (size {size}) produced {} edits",
        edits.len()
    );
    edits
}

fn convert_line(line: u32, text: &str, style: IndentStyle, size: usize) -> Option<Edit> {
    let (matched, replacement) = match style {
        IndentStyle::Space => {
            let tabs = leading_tab_run(text);
            if tabs == 0 {
                return None;
            }
            (tabs, " ".repeat(tabs * size))
        }
        IndentStyle::Tab => {
            let matched = leading_space_groups(text, size);
            if matched == 0 {
                return None;
            }
            (matched, "\t".repeat(matched / size))
        }
    };

    let range = Range {
        start: Position { line, col: 0 },
        end: Position {
            line,
            col: matched as u32,
        },
    };
    Some(Edit::replace(range, replacement))
}

/// Longest run of tab characters anchored at the start of `text`.
fn leading_tab_run(text: &str) -> usize {
    text.chars().take_while(|&c| c == '\t').count()
}

/// Longest prefix of complete `size`-space groups anchored at the start of
/// `text`. A trailing partial group of fewer than `size` spaces is excluded.
fn leading_space_groups(text: &str, size: usize) -> usize {
    let spaces = text.chars().take_while(|&c| c == ' ').count();
    spaces / size * size
}

/// Convert indentation and hand the resulting batch to the host in one call.
///
/// Returns the host's verdict, or `true` without a host call when no line
/// needs rewriting.
pub async fn convert_and_apply<D, E>(config: &ConfigSnapshot, doc: &D, editor: &mut E) -> bool
where
    D: DocumentOps,
    E: HostEditor + ?Sized,
{
    let edits = convert_indentation(config, doc);
    if edits.is_empty() {
        return true;
    }
    editor.apply_edits(&edits).await
}

/// Switch the document's terminator to the configured `end_of_line`
/// convention.
///
/// `lf` and `crlf` resolve case-insensitively; anything else — including
/// `cr`, empty, or absent — returns `false` without touching the host.
/// Otherwise the host is asked for one whole-document terminator change and
/// its verdict is surfaced verbatim. The caller suspends until the host
/// confirms.
pub async fn apply_line_ending<E>(config: &ConfigSnapshot, editor: &mut E) -> bool
where
    E: HostEditor + ?Sized,
{
    let Some(ending) = config.end_of_line() else {
        return false;
    };
    debug!("normalizing document terminator to {ending:?}");
    editor.set_line_ending(ending).await
}

/// Per-line edits deleting trailing runs of spaces and tabs.
///
/// Only active when `trim_trailing_whitespace` resolves to `true`. Lines
/// without a trailing run produce no edit.
pub fn trim_trailing_whitespace<D: DocumentOps>(config: &ConfigSnapshot, doc: &D) -> Vec<Edit> {
    if config.trim_trailing_whitespace() != Some(true) {
        return Vec::new();
    }

    let mut edits = Vec::new();
    for line in 0..doc.line_count() {
        let text = doc.line_text(line);
        let trailing = text
            .chars()
            .rev()
            .take_while(|c| matches!(c, ' ' | '\t'))
            .count();
        if trailing == 0 {
            continue;
        }
        let total = text.graphemes(true).count();
        let range = Range {
            start: Position {
                line,
                col: (total - trailing) as u32,
            },
            end: Position {
                line,
                col: total as u32,
            },
        };
        edits.push(Edit::delete(range));
    }
    debug!("trailing-whitespace trim produced {} edits", edits.len());
    edits
}

/// A single insertion terminating the document's last line, when missing.
///
/// Only active when `insert_final_newline` resolves to `true`. The inserted
/// terminator follows the resolved `end_of_line`, defaulting to LF when that
/// key is absent or unrecognized. A document whose last line is empty already
/// ends with a terminator and produces no edit.
pub fn insert_final_newline<D: DocumentOps>(config: &ConfigSnapshot, doc: &D) -> Vec<Edit> {
    if config.insert_final_newline() != Some(true) {
        return Vec::new();
    }

    let lines = doc.line_count();
    if lines == 0 {
        return Vec::new();
    }
    let last = lines - 1;
    let text = doc.line_text(last);
    if text.is_empty() {
        return Vec::new();
    }

    let ending = config.end_of_line().unwrap_or(LineEnding::Lf);
    let at = Position {
        line: last,
        col: text.graphemes(true).count() as u32,
    };
    vec![Edit::insert(at, ending.as_str().to_string())]
}

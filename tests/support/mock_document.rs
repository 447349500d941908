use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use editorconfig_mini::traits::DocumentOps;
use editorconfig_mini::types::Edit;

pub struct MockDocument {
    rope: Rope,
}

impl MockDocument {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    fn line_str(&self, line: u32) -> String {
        if line as usize >= self.rope.len_lines() {
            return String::new();
        }
        let mut s = self.rope.line(line as usize).to_string();
        // Remove trailing terminator if present
        if s.ends_with('\n') {
            s.pop();
            if s.ends_with('\r') {
                s.pop();
            }
        }
        s
    }

    /// Apply a batch of single-line edits the way a host would.
    pub fn apply(&mut self, edits: &[Edit]) {
        let mut sorted: Vec<&Edit> = edits.iter().collect();
        sorted.sort_by_key(|edit| (edit.range.start.line, edit.range.start.col));
        // Bottom-up so positions in earlier edits stay valid
        for edit in sorted.iter().rev() {
            self.apply_one(edit);
        }
    }

    fn apply_one(&mut self, edit: &Edit) {
        let line = edit.range.start.line;
        let text = self.line_str(line);
        let start = byte_at_col(&text, edit.range.start.col);
        let end = byte_at_col(&text, edit.range.end.col);

        let mut replaced = String::with_capacity(text.len() + edit.text.len());
        replaced.push_str(&text[..start]);
        replaced.push_str(&edit.text);
        replaced.push_str(&text[end..]);

        let line_start = self.rope.line_to_char(line as usize);
        let line_end = line_start + text.chars().count();
        self.rope.remove(line_start..line_end);
        self.rope.insert(line_start, &replaced);
    }
}

fn byte_at_col(text: &str, col: u32) -> usize {
    text.grapheme_indices(true)
        .nth(col as usize)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

impl DocumentOps for MockDocument {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line_text(&self, line: u32) -> String {
        self.line_str(line)
    }
}

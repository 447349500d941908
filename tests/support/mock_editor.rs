use async_trait::async_trait;

use editorconfig_mini::traits::HostEditor;
use editorconfig_mini::types::{Edit, LineEnding};

/// Records the host calls a transform makes, with a switchable failure mode.
#[derive(Default, Debug, Clone)]
pub struct MockEditor {
    pub applied: Vec<Edit>,
    pub line_ending: Option<LineEnding>,
    pub edit_calls: u32,
    pub ending_calls: u32,
    pub fail: bool,
}

impl MockEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl HostEditor for MockEditor {
    async fn apply_edits(&mut self, edits: &[Edit]) -> bool {
        self.edit_calls += 1;
        if self.fail {
            return false;
        }
        self.applied.extend(edits.iter().cloned());
        true
    }

    async fn set_line_ending(&mut self, ending: LineEnding) -> bool {
        self.ending_calls += 1;
        if self.fail {
            return false;
        }
        self.line_ending = Some(ending);
        true
    }
}

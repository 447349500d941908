use async_trait::async_trait;

use crate::types::{Edit, LineEnding};

/// Read access to the host's document.
///
/// Hosts implement this over whatever text storage they use; the engine only
/// ever walks lines by zero-based index.
pub trait DocumentOps {
    fn line_count(&self) -> u32;

    /// Text of the line at `line`, without its terminator.
    /// Out-of-range indices return an empty string.
    fn line_text(&self, line: u32) -> String;
}

/// The host editor's mutation surface.
///
/// Both operations are asynchronous and report the host's success or failure
/// verbatim; the engine never retries and does not distinguish failure
/// reasons. Cancellation, if the host needs it, is wired on the host side —
/// the trait is object-safe so hosts can wrap it in their own task machinery.
#[async_trait]
pub trait HostEditor {
    /// Apply `edits` as a single atomic batch.
    ///
    /// Edit batches produced by this crate are non-overlapping, so the host
    /// may apply them in any order as long as the batch lands atomically.
    async fn apply_edits(&mut self, edits: &[Edit]) -> bool;

    /// Switch every terminator in the document to `ending`.
    async fn set_line_ending(&mut self, ending: LineEnding) -> bool;
}

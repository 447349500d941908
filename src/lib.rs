pub mod catalog;
pub mod completion;
pub mod traits;
pub mod transforms;
pub mod types;

pub use crate::catalog::{PROPERTIES, Property};
pub use crate::completion::provide_completions;
pub use crate::traits::{DocumentOps, HostEditor};
pub use crate::transforms::{
    apply_line_ending, convert_and_apply, convert_indentation, insert_final_newline,
    trim_trailing_whitespace,
};
pub use crate::types::{
    CompletionItem, CompletionKind, ConfigSnapshot, Edit, IndentStyle, LineEnding, Position,
    Range,
};

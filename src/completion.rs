use crate::catalog;
use crate::types::{CompletionItem, CompletionKind};

/// Completion candidates for the line text up to the cursor.
///
/// With an `=` on the line, the text before the first `=` is the candidate
/// key: a catalog hit yields its permitted values, an unknown key yields
/// nothing (not an error). Without an `=`, every catalog name is offered
/// regardless of partial text already typed — prefix filtering is the
/// host's responsibility.
///
/// Pure function of the prefix and the static catalog; never fails.
pub fn provide_completions(line_prefix: &str) -> Vec<CompletionItem> {
    match line_prefix.split_once('=') {
        Some((key, _)) => property_values(key),
        None => property_names(),
    }
}

fn property_values(key: &str) -> Vec<CompletionItem> {
    let Some(property) = catalog::lookup(key) else {
        return Vec::new();
    };
    property
        .values
        .iter()
        .map(|value| CompletionItem {
            text: (*value).to_string(),
            kind: CompletionKind::PropertyValue,
        })
        .collect()
}

fn property_names() -> Vec<CompletionItem> {
    catalog::PROPERTIES
        .iter()
        .map(|property| CompletionItem {
            text: property.name.to_string(),
            kind: CompletionKind::PropertyName,
        })
        .collect()
}

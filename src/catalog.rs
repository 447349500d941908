/// Canonical property key names, shared by the catalog, the snapshot
/// accessors, and host glue.
pub mod keys {
    pub const ROOT: &str = "root";
    pub const CHARSET: &str = "charset";
    pub const END_OF_LINE: &str = "end_of_line";
    pub const INDENT_STYLE: &str = "indent_style";
    pub const INDENT_SIZE: &str = "indent_size";
    pub const INSERT_FINAL_NEWLINE: &str = "insert_final_newline";
    pub const TAB_WIDTH: &str = "tab_width";
    pub const TRIM_TRAILING_WHITESPACE: &str = "trim_trailing_whitespace";
}

/// A recognized configuration key and its permitted literal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    /// Permitted values in declaration order, surfaced verbatim in completions.
    pub values: &'static [&'static str],
}

/// Every recognized property, in declaration order.
///
/// The catalog is fixed at compile time; there is no runtime registration.
/// Entries are unique by name.
pub const PROPERTIES: &[Property] = &[
    Property {
        name: keys::ROOT,
        values: &["true", "false"],
    },
    Property {
        name: keys::CHARSET,
        values: &["utf-8", "utf-8-bom", "utf-16be", "utf-16le", "latin1"],
    },
    Property {
        name: keys::END_OF_LINE,
        values: &["lf", "cr", "crlf"],
    },
    Property {
        name: keys::INDENT_STYLE,
        values: &["tab", "space"],
    },
    Property {
        name: keys::INDENT_SIZE,
        values: &["1", "2", "3", "4", "5", "6", "7", "8"],
    },
    Property {
        name: keys::INSERT_FINAL_NEWLINE,
        values: &["true", "false"],
    },
    Property {
        name: keys::TAB_WIDTH,
        values: &["1", "2", "3", "4", "5", "6", "7", "8"],
    },
    Property {
        name: keys::TRIM_TRAILING_WHITESPACE,
        values: &["true", "false"],
    },
];

/// Exact-match lookup after trimming and ASCII-lowercasing `name`.
/// No partial or fuzzy matching.
pub fn lookup(name: &str) -> Option<&'static Property> {
    let needle = name.trim().to_ascii_lowercase();
    PROPERTIES.iter().find(|property| property.name == needle)
}

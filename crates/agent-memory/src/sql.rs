//! SQL literal escaping.

/// Escape a value for splicing between single quotes in a generated
/// statement: every `'` becomes `''`, nothing else changes.
///
/// Only valid for values placed inside single-quoted literal positions.
/// Never use this for identifiers, and never splice the result unquoted.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

//! SQL identifier quoting
//!
//! Aliases and column names are always emitted as double-quoted identifiers.
//! No schema validation happens here: the compiler is purely textual and
//! trusts its caller.

/// Quote a SQL identifier.
///
/// Wraps the identifier in double quotes, doubling any embedded double quote.
/// For quote-free identifiers this is plain `"name"` wrapping.
///
/// # Example
/// ```
/// use nested_where::quote_identifier;
///
/// assert_eq!(quote_identifier("category_id"), "\"category_id\"");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Build the `"alias"."column"` reference used to address a column.
pub fn qualified_column(alias: &str, column: &str) -> String {
    format!("{}.{}", quote_identifier(alias), quote_identifier(column))
}

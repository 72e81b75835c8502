//! Field-name formatting between application and database naming conventions.
//!
//! Hand-rolled rather than a generic case-conversion crate: the exact edge
//! cases (leading uppercase, consecutive underscores) must stay stable since
//! callers match them against real column names.

/// `categoryId` -> `category_id`
///
/// Inserts `_` before each ASCII uppercase letter and lowercases it.
pub fn camel_to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `category_id` -> `categoryId`
///
/// Splits on `_`, lowercases the first segment, and capitalizes the first
/// letter of each later segment while lowercasing the rest.
pub fn snake_to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for (i, segment) in field.split('_').enumerate() {
        if i == 0 {
            out.push_str(&segment.to_lowercase());
        } else {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
    out
}

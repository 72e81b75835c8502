//! SQL generation for condition mappings
//!
//! Provides the condition compiler, operator rendering, key formatting, and
//! identifier quoting.

pub mod compile;
pub mod format;
pub mod operator;
pub mod sanitize;

pub use compile::{compile, compile_with};
pub use format::{camel_to_snake_case, snake_to_camel_case};
pub use operator::{render_literal, render_operator, render_operator_strict};
pub use sanitize::{qualified_column, quote_identifier};

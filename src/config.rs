//! Compile options
//!
//! Provides a builder pattern for configuring WHERE-clause compilation.

use std::fmt;
use std::sync::Arc;

use crate::sql::format::{camel_to_snake_case, snake_to_camel_case};

/// Field-name formatting applied before a field is used as a column name.
#[derive(Clone, Default)]
pub enum KeyFormat {
    /// Use field names unchanged.
    #[default]
    None,
    /// `categoryId` -> `category_id`
    CamelToSnake,
    /// `category_id` -> `categoryId`
    SnakeToCamel,
    /// Caller-supplied formatting strategy.
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl KeyFormat {
    /// Wrap a formatting function.
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        KeyFormat::Custom(Arc::new(f))
    }

    /// Apply this format to a field name.
    pub fn apply(&self, field: &str) -> String {
        match self {
            KeyFormat::None => field.to_string(),
            KeyFormat::CamelToSnake => camel_to_snake_case(field),
            KeyFormat::SnakeToCamel => snake_to_camel_case(field),
            KeyFormat::Custom(f) => f(field),
        }
    }
}

impl fmt::Debug for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFormat::None => f.write_str("None"),
            KeyFormat::CamelToSnake => f.write_str("CamelToSnake"),
            KeyFormat::SnakeToCamel => f.write_str("SnakeToCamel"),
            KeyFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for [`compile_with`](crate::compile_with).
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Field-name formatting mode (default: pass-through).
    pub key_format: KeyFormat,
    /// Fail fast on malformed operand shapes instead of degrading (default: off).
    pub strict: bool,
}

impl CompileOptions {
    /// Create a new options builder.
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::new()
    }
}

/// Builder for [`CompileOptions`].
#[derive(Debug, Default)]
pub struct CompileOptionsBuilder {
    key_format: KeyFormat,
    strict: bool,
}

impl CompileOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field-name formatting mode (default: [`KeyFormat::None`]).
    pub fn key_format(mut self, key_format: KeyFormat) -> Self {
        self.key_format = key_format;
        self
    }

    /// Enable or disable strict mode (default: false).
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Build the options.
    pub fn build(self) -> CompileOptions {
        CompileOptions {
            key_format: self.key_format,
            strict: self.strict,
        }
    }
}

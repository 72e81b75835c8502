//! # nested-where
//!
//! Compile nested find-condition mappings into raw SQL WHERE clauses.
//!
//! Callers of an object-relational mapper can express filters across related
//! entities as plain nested mappings instead of verbose query-builder chains;
//! this crate turns such a mapping into the WHERE-clause fragment the
//! mapper's raw-query path accepts. The compiler is a pure string transform:
//! it holds no state, talks to no database, and trusts its caller's quoting.
//!
//! ## Features
//!
//! - **Nested conditions**: sub-mappings address related entities through
//!   derived `parent__field` aliases, flattened into one `AND`-joined chain
//! - **Operator wrappers**: an explicit tagged union covering `<`, `<=`, `>`,
//!   `>=`, `=`, `LIKE`, `BETWEEN`, `IN`, `ANY`, `IS NULL`, negation, and a
//!   raw-SQL escape hatch, built by small factory functions
//! - **Key formatting**: camelCase↔snake_case column renaming, or a
//!   caller-supplied strategy
//! - **Permissive by default**: malformed operand shapes degrade to an
//!   omitted fragment with a logged warning; an opt-in strict mode fails fast
//! - **JSON ingestion**: mappings and tagged operator wrappers can be read
//!   straight from JSON, with explicit errors for unsupported shapes
//!
//! ## Quick Start
//!
//! ```rust
//! use nested_where::{compile, ConditionMap, KeyFormat};
//!
//! let conditions = ConditionMap::new()
//!     .with("name", "Category B")
//!     .with("posts", ConditionMap::new().with("title", "Post 2"));
//!
//! let sql = compile("Category", &conditions, &KeyFormat::None);
//! assert_eq!(
//!     sql,
//!     r#""Category"."name" = 'Category B' AND "Category__posts"."title" = 'Post 2'"#
//! );
//! ```
//!
//! Operator wrappers and key formatting:
//!
//! ```rust
//! use nested_where::{compile, ops, ConditionMap, KeyFormat};
//!
//! let conditions = ConditionMap::new()
//!     .with("id", ops::more_than(0))
//!     .with("categoryId", ops::in_list([1, 2]));
//!
//! let sql = compile("Post", &conditions, &KeyFormat::CamelToSnake);
//! assert_eq!(sql, r#""Post"."id" > 0 AND "Post"."category_id" IN (1, 2)"#);
//! ```
//!
//! ## Strict mode
//!
//! The default behavior mirrors the translator this crate replaces: it never
//! fails, even on operand shapes that cannot render. Hardened callers can opt
//! into failing fast instead:
//!
//! ```rust
//! use nested_where::{compile_with, CompileOptions, ConditionMap, Operator};
//!
//! let conditions = ConditionMap::new().with("price", Operator::Between(vec![]));
//! let options = CompileOptions::builder().strict(true).build();
//!
//! assert!(compile_with("Product", &conditions, &options).is_err());
//! ```
//!
//! ## Scope
//!
//! Entity metadata, query execution, and result hydration belong to the ORM.
//! OR-combinations of condition sets are not supported; an array-valued
//! condition is rejected at the JSON boundary rather than silently
//! mishandled.

pub mod condition;
pub mod config;
pub mod error;
pub mod sql;

// Re-export the public surface for convenience
pub use condition::{ops, Condition, ConditionMap, NotOperand, Operator, RawSql};
pub use config::{CompileOptions, CompileOptionsBuilder, KeyFormat};
pub use error::{ConditionError, Result};
pub use sql::compile::{compile, compile_with};
pub use sql::format::{camel_to_snake_case, snake_to_camel_case};
pub use sql::operator::{render_literal, render_operator, render_operator_strict};
pub use sql::sanitize::{qualified_column, quote_identifier};

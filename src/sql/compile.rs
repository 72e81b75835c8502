//! WHERE-clause compilation
//!
//! Walks a nested condition mapping depth-first and joins every emitted
//! fragment with `" AND "`. Nesting only affects alias derivation: fragments
//! from related-entity sub-mappings land in the same flat chain, without
//! parentheses.

use crate::condition::{Condition, ConditionMap};
use crate::config::{CompileOptions, KeyFormat};
use crate::error::Result;
use crate::sql::operator::{render_literal, render_operator, render_operator_strict};
use crate::sql::sanitize::qualified_column;

/// Compile a nested condition mapping into a WHERE-clause fragment.
///
/// Permissive entry point: malformed operand shapes are omitted from the
/// output (with a logged warning) rather than failing. An empty mapping
/// compiles to the empty string.
pub fn compile(alias: &str, conditions: &ConditionMap, key_format: &KeyFormat) -> String {
    let options = CompileOptions {
        key_format: key_format.clone(),
        strict: false,
    };
    // the permissive path has no failure cases
    compile_with(alias, conditions, &options).unwrap_or_default()
}

/// Compile with explicit options; with `strict` enabled, malformed operand
/// shapes fail fast instead of degrading.
pub fn compile_with(
    alias: &str,
    conditions: &ConditionMap,
    options: &CompileOptions,
) -> Result<String> {
    let mut fragments = Vec::new();
    collect(alias, conditions, options, &mut fragments)?;
    Ok(fragments.join(" AND "))
}

fn collect(
    alias: &str,
    conditions: &ConditionMap,
    options: &CompileOptions,
    fragments: &mut Vec<String>,
) -> Result<()> {
    for (field, condition) in conditions.iter() {
        match condition {
            Condition::Value(value) => {
                let qualified = qualified_column(alias, &options.key_format.apply(field));
                // a plain null scalar gets the SQL null test, not `= NULL`
                let fragment = if value.is_null() {
                    format!("{} IS NULL", qualified)
                } else {
                    format!("{} = {}", qualified, render_literal(value))
                };
                fragments.push(fragment);
            }
            Condition::Operator(op) => {
                let qualified = qualified_column(alias, &options.key_format.apply(field));
                let fragment = if options.strict {
                    render_operator_strict(op, &qualified)?
                } else {
                    render_operator(op, &qualified)
                };
                if !fragment.is_empty() {
                    fragments.push(fragment);
                }
            }
            Condition::Nested(nested) => {
                // derived aliases use the raw field name, never the formatted column
                let nested_alias = format!("{}__{}", alias, field);
                collect(&nested_alias, nested, options, fragments)?;
            }
        }
    }
    Ok(())
}

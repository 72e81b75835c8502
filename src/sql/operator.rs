//! Operator rendering for SQL WHERE clauses
//!
//! Converts one operator wrapper plus a fully-qualified column reference into
//! its SQL fragment, including literal quoting and multi-value handling.

use serde_json::Value;
use tracing::warn;

use crate::condition::{NotOperand, Operator, RawSql};
use crate::error::{ConditionError, Result};

/// Render an operator against a qualified column reference.
///
/// Permissive: a malformed operand shape degrades to an empty fragment with a
/// logged warning instead of failing. Exposed for callers that already hold a
/// wrapper and a resolved column reference.
pub fn render_operator(op: &Operator, column: &str) -> String {
    render(op, column, false).unwrap_or_default()
}

/// Render an operator, failing fast on malformed operand shapes.
///
/// Checks the preconditions the permissive path only warns about: `between`
/// carries exactly two values, `any` exactly one, `in` at least one. Errors
/// from a negated inner operator propagate.
pub fn render_operator_strict(op: &Operator, column: &str) -> Result<String> {
    render(op, column, true)
}

fn render(op: &Operator, column: &str, strict: bool) -> Result<String> {
    let sql = match op {
        Operator::Not(operand) => return render_not(operand, column, strict),
        Operator::LessThan(value) => format!("{} < {}", column, render_literal(value)),
        Operator::LessThanOrEqual(value) => format!("{} <= {}", column, render_literal(value)),
        Operator::MoreThan(value) => format!("{} > {}", column, render_literal(value)),
        Operator::MoreThanOrEqual(value) => format!("{} >= {}", column, render_literal(value)),
        Operator::Equal(value) => format!("{} = {}", column, render_literal(value)),
        Operator::Like(pattern) => format!("{} LIKE {}", column, render_literal(pattern)),
        Operator::Between(values) => {
            if values.len() != 2 {
                if strict {
                    return Err(ConditionError::invalid_operand(format!(
                        "BETWEEN requires exactly 2 values, got {}",
                        values.len()
                    )));
                }
                warn!(count = values.len(), "BETWEEN operand is not a pair, omitting fragment");
                return Ok(String::new());
            }
            format!(
                "{} BETWEEN {} AND {}",
                column,
                render_literal(&values[0]),
                render_literal(&values[1])
            )
        }
        Operator::In(values) => {
            if values.is_empty() {
                if strict {
                    return Err(ConditionError::invalid_operand(
                        "IN requires at least one value",
                    ));
                }
                warn!("IN operand is empty");
            }
            format!("{} IN ({})", column, join_params(values))
        }
        Operator::Any(values) => {
            if values.len() != 1 {
                if strict {
                    return Err(ConditionError::invalid_operand(format!(
                        "ANY requires exactly one value, got {}",
                        values.len()
                    )));
                }
                warn!(count = values.len(), "ANY operand is not a single value");
            }
            format!("{} = ANY({})", column, join_params(values))
        }
        Operator::IsNull => format!("{} IS NULL", column),
        Operator::Raw(RawSql::Builder(build)) => build(column),
        Operator::Raw(RawSql::Fragment(fragment)) => format!("{} = {}", column, fragment),
    };
    Ok(sql)
}

fn render_not(operand: &NotOperand, column: &str, strict: bool) -> Result<String> {
    match operand {
        // negated null-check has a dedicated SQL spelling
        NotOperand::Operator(inner) if matches!(**inner, Operator::IsNull) => {
            Ok(format!("{} IS NOT NULL", column))
        }
        NotOperand::Operator(inner) => Ok(format!("NOT({})", render(inner, column, strict)?)),
        NotOperand::Value(Value::Null) => Ok(format!("{} IS NOT NULL", column)),
        NotOperand::Value(value) => Ok(format!("{} <> {}", column, render_literal(value))),
    }
}

/// Render a list operand: a single element stays bare, several elements join
/// comma-space.
fn join_params(values: &[Value]) -> String {
    values
        .iter()
        .map(render_literal)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a scalar as a SQL literal.
///
/// Strings are single-quoted verbatim (embedded quotes are the caller's
/// responsibility); numbers and booleans use their natural display form.
/// Non-scalar JSON falls back to its compact text.
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "NULL".to_string(),
        other => other.to_string(),
    }
}

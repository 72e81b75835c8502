//! Condition types for WHERE-clause compilation
//!
//! Includes ConditionMap, Condition, Operator and the `ops` factory helpers.
//! Operator wrappers are an explicit tagged union; detection anywhere in the
//! crate is a tag check, never runtime type inspection.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::{ConditionError, Result};

/// An ordered mapping from field name to condition.
///
/// Mirrors an entity's shape, including sub-mappings for related entities.
/// Entries keep insertion order, which determines fragment order in the
/// compiled output. Inserting an existing field replaces its condition in
/// place, so keys stay unique.
#[derive(Debug, Clone, Default)]
pub struct ConditionMap {
    entries: Vec<(String, Condition)>,
}

impl ConditionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.insert(field, condition);
        self
    }

    /// Insert a condition, replacing any existing entry for the same field.
    pub fn insert(&mut self, field: impl Into<String>, condition: impl Into<Condition>) {
        let field = field.into();
        let condition = condition.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = condition;
        } else {
            self.entries.push((field, condition));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries.iter().map(|(field, cond)| (field.as_str(), cond))
    }

    /// Build a mapping from a JSON object.
    ///
    /// Scalars become equality conditions, objects carrying the tagged
    /// wrapper shape (`{"kind": ..., "operand": ...}`) become operators, any
    /// other object becomes a nested mapping. Arrays are rejected:
    /// OR-combinations of condition sets are explicitly unsupported input.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ConditionError::unsupported("conditions must be a JSON object")
        })?;
        let mut map = ConditionMap::new();
        for (field, value) in object {
            map.insert(field.clone(), Condition::from_json(value)?);
        }
        Ok(map)
    }

    /// Build a mapping from JSON text. See [`ConditionMap::from_json`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}

impl FromIterator<(String, Condition)> for ConditionMap {
    fn from_iter<I: IntoIterator<Item = (String, Condition)>>(iter: I) -> Self {
        let mut map = ConditionMap::new();
        for (field, condition) in iter {
            map.insert(field, condition);
        }
        map
    }
}

/// One entry in a [`ConditionMap`].
#[derive(Debug, Clone)]
pub enum Condition {
    /// Scalar literal, compiled to an equality test.
    Value(Value),
    /// Comparison-operator wrapper.
    Operator(Operator),
    /// Conditions on a related entity, compiled under a derived alias.
    Nested(ConditionMap),
}

impl Condition {
    /// Decode a single condition value from JSON.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(_) => Err(ConditionError::unsupported(
                "array-valued conditions (OR combinations) are not supported",
            )),
            Value::Object(object) => {
                if is_wire_operator(object) {
                    let wire: WireOperator = serde_json::from_value(value.clone())?;
                    Ok(Condition::Operator(Operator::from_tagged(
                        &wire.kind,
                        wire.operand,
                    )?))
                } else {
                    Ok(Condition::Nested(ConditionMap::from_json(value)?))
                }
            }
            scalar => Ok(Condition::Value(scalar.clone())),
        }
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        Condition::Value(value)
    }
}

impl From<Operator> for Condition {
    fn from(op: Operator) -> Self {
        Condition::Operator(op)
    }
}

impl From<ConditionMap> for Condition {
    fn from(map: ConditionMap) -> Self {
        Condition::Nested(map)
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Condition::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::Value(Value::String(value))
    }
}

impl From<bool> for Condition {
    fn from(value: bool) -> Self {
        Condition::Value(Value::Bool(value))
    }
}

impl From<i32> for Condition {
    fn from(value: i32) -> Self {
        Condition::Value(Value::from(value))
    }
}

impl From<i64> for Condition {
    fn from(value: i64) -> Self {
        Condition::Value(Value::from(value))
    }
}

impl From<f64> for Condition {
    fn from(value: f64) -> Self {
        Condition::Value(Value::from(value))
    }
}

/// Comparison-operator wrapper.
///
/// `Between`, `In` and `Any` carry unchecked vectors: adapter shims may
/// construct wrappers from foreign representations, so arity stays a renderer
/// precondition (enforced in strict mode) instead of a type invariant.
#[derive(Debug, Clone)]
pub enum Operator {
    /// Negation of a scalar (`<>`) or of another operator (`NOT(...)`).
    Not(NotOperand),
    LessThan(Value),
    LessThanOrEqual(Value),
    MoreThan(Value),
    MoreThanOrEqual(Value),
    Equal(Value),
    Like(Value),
    /// Inclusive range test; operand must carry exactly two values.
    Between(Vec<Value>),
    /// Set membership test.
    In(Vec<Value>),
    /// `= ANY(...)` test; operand is assumed to carry a single value.
    Any(Vec<Value>),
    IsNull,
    /// Escape hatch emitting caller-controlled SQL.
    Raw(RawSql),
}

impl Operator {
    /// Tag name, as used in diagnostics and the JSON wire shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Operator::Not(_) => "not",
            Operator::LessThan(_) => "lessThan",
            Operator::LessThanOrEqual(_) => "lessThanOrEqual",
            Operator::MoreThan(_) => "moreThan",
            Operator::MoreThanOrEqual(_) => "moreThanOrEqual",
            Operator::Equal(_) => "equal",
            Operator::Like(_) => "like",
            Operator::Between(_) => "between",
            Operator::In(_) => "in",
            Operator::Any(_) => "any",
            Operator::IsNull => "isNull",
            Operator::Raw(_) => "raw",
        }
    }

    /// Decode an operator from its tagged wire shape.
    ///
    /// Unknown tags are an explicit error, not a silently empty fragment.
    pub fn from_tagged(kind: &str, operand: Value) -> Result<Self> {
        let op = match kind {
            "not" => match operand {
                Value::Object(ref object) if is_wire_operator(object) => {
                    let wire: WireOperator = serde_json::from_value(operand.clone())?;
                    let inner = Operator::from_tagged(&wire.kind, wire.operand)?;
                    Operator::Not(NotOperand::Operator(Box::new(inner)))
                }
                Value::Object(_) => {
                    return Err(ConditionError::invalid_operand(
                        "not operand must be a scalar or an operator wrapper",
                    ));
                }
                scalar => Operator::Not(NotOperand::Value(scalar)),
            },
            "lessThan" => Operator::LessThan(operand),
            "lessThanOrEqual" => Operator::LessThanOrEqual(operand),
            "moreThan" => Operator::MoreThan(operand),
            "moreThanOrEqual" => Operator::MoreThanOrEqual(operand),
            "equal" => Operator::Equal(operand),
            "like" => Operator::Like(operand),
            "between" => Operator::Between(expect_list("between", operand)?),
            "in" => Operator::In(expect_list("in", operand)?),
            // a bare scalar is accepted for `any` since a single value is its
            // expected operand
            "any" => match operand {
                Value::Array(values) => Operator::Any(values),
                scalar => Operator::Any(vec![scalar]),
            },
            "isNull" => Operator::IsNull,
            "raw" => match operand {
                Value::String(fragment) => Operator::Raw(RawSql::Fragment(fragment)),
                _ => {
                    return Err(ConditionError::invalid_operand(
                        "raw operand must be a string fragment",
                    ));
                }
            },
            other => return Err(ConditionError::unsupported_operator(other)),
        };
        Ok(op)
    }
}

fn expect_list(kind: &str, operand: Value) -> Result<Vec<Value>> {
    match operand {
        Value::Array(values) => Ok(values),
        _ => Err(ConditionError::invalid_operand(format!(
            "{} operand must be a list",
            kind
        ))),
    }
}

/// Operand of a `not` wrapper.
#[derive(Debug, Clone)]
pub enum NotOperand {
    /// Scalar inequality.
    Value(Value),
    /// Negated operator.
    Operator(Box<Operator>),
}

/// Operand of a `raw` wrapper.
#[derive(Clone)]
pub enum RawSql {
    /// Literal SQL fragment, compared against the column with `=`.
    Fragment(String),
    /// Function from the qualified column reference to a complete fragment.
    Builder(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl fmt::Debug for RawSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSql::Fragment(fragment) => f.debug_tuple("Fragment").field(fragment).finish(),
            RawSql::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// JSON wire shape for operator wrappers: `{"kind": "moreThan", "operand": 0}`.
#[derive(Debug, Deserialize)]
struct WireOperator {
    kind: String,
    #[serde(default)]
    operand: Value,
}

fn is_wire_operator(object: &serde_json::Map<String, Value>) -> bool {
    object.contains_key("kind") && object.keys().all(|key| key == "kind" || key == "operand")
}

/// Factory functions for operator wrappers.
pub mod ops {
    use super::*;

    /// `column = value` (explicit form).
    pub fn equal_to(value: impl Into<Value>) -> Operator {
        Operator::Equal(value.into())
    }

    /// `column < value`
    pub fn less_than(value: impl Into<Value>) -> Operator {
        Operator::LessThan(value.into())
    }

    /// `column <= value`
    pub fn less_than_or_equal(value: impl Into<Value>) -> Operator {
        Operator::LessThanOrEqual(value.into())
    }

    /// `column > value`
    pub fn more_than(value: impl Into<Value>) -> Operator {
        Operator::MoreThan(value.into())
    }

    /// `column >= value`
    pub fn more_than_or_equal(value: impl Into<Value>) -> Operator {
        Operator::MoreThanOrEqual(value.into())
    }

    /// `column LIKE pattern`
    pub fn like(pattern: impl Into<Value>) -> Operator {
        Operator::Like(pattern.into())
    }

    /// `column BETWEEN low AND high`
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Operator {
        Operator::Between(vec![low.into(), high.into()])
    }

    /// `column IN (...)`
    pub fn in_list<I, T>(values: I) -> Operator
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Operator::In(values.into_iter().map(Into::into).collect())
    }

    /// `column = ANY(value)`
    pub fn any_of(value: impl Into<Value>) -> Operator {
        Operator::Any(vec![value.into()])
    }

    /// `column IS NULL`
    pub fn is_null() -> Operator {
        Operator::IsNull
    }

    /// Negate another operator: `NOT(...)`, or `IS NOT NULL` for `is_null`.
    pub fn not(inner: Operator) -> Operator {
        Operator::Not(NotOperand::Operator(Box::new(inner)))
    }

    /// Scalar inequality: `column <> value`.
    pub fn not_value(value: impl Into<Value>) -> Operator {
        Operator::Not(NotOperand::Value(value.into()))
    }

    /// `column = fragment`, with the fragment emitted verbatim and unquoted.
    pub fn raw(fragment: impl Into<String>) -> Operator {
        Operator::Raw(RawSql::Fragment(fragment.into()))
    }

    /// Fragment built by a caller-supplied function of the qualified column.
    pub fn raw_with(builder: impl Fn(&str) -> String + Send + Sync + 'static) -> Operator {
        Operator::Raw(RawSql::Builder(Arc::new(builder)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ConditionMap ====================

    #[test]
    fn test_map_preserves_insertion_order() {
        let map = ConditionMap::new()
            .with("b", 1)
            .with("a", 2)
            .with("c", 3);

        let fields: Vec<&str> = map.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_map_insert_replaces_in_place() {
        let mut map = ConditionMap::new();
        map.insert("name", "first");
        map.insert("age", 10);
        map.insert("name", "second");

        assert_eq!(map.len(), 2);
        let (field, condition) = map.iter().next().unwrap();
        assert_eq!(field, "name");
        match condition {
            Condition::Value(value) => assert_eq!(value, &serde_json::json!("second")),
            other => panic!("expected scalar, got {:?}", other),
        }
    }

    #[test]
    fn test_map_from_iterator() {
        let map: ConditionMap = vec![
            ("a".to_string(), Condition::from(1)),
            ("b".to_string(), Condition::from(2)),
            ("a".to_string(), Condition::from(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 2);
    }

    // ==================== Factory helpers ====================

    #[test]
    fn test_ops_kinds() {
        assert_eq!(ops::equal_to(1).kind(), "equal");
        assert_eq!(ops::less_than(1).kind(), "lessThan");
        assert_eq!(ops::less_than_or_equal(1).kind(), "lessThanOrEqual");
        assert_eq!(ops::more_than(1).kind(), "moreThan");
        assert_eq!(ops::more_than_or_equal(1).kind(), "moreThanOrEqual");
        assert_eq!(ops::like("a%").kind(), "like");
        assert_eq!(ops::between(1, 2).kind(), "between");
        assert_eq!(ops::in_list([1, 2]).kind(), "in");
        assert_eq!(ops::any_of(1).kind(), "any");
        assert_eq!(ops::is_null().kind(), "isNull");
        assert_eq!(ops::not(ops::is_null()).kind(), "not");
        assert_eq!(ops::not_value(1).kind(), "not");
        assert_eq!(ops::raw("(SELECT 1)").kind(), "raw");
        assert_eq!(ops::raw_with(|col| col.to_string()).kind(), "raw");
    }

    #[test]
    fn test_between_factory_builds_pair() {
        match ops::between(1, 10) {
            Operator::Between(values) => {
                assert_eq!(values, vec![serde_json::json!(1), serde_json::json!(10)]);
            }
            other => panic!("expected Between, got {:?}", other),
        }
    }

    // ==================== JSON ingestion ====================

    #[test]
    fn test_from_json_scalars_and_nesting() {
        let map = ConditionMap::from_json_str(
            r#"{"name": "Category B", "posts": {"title": "Post 2"}}"#,
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        let mut entries = map.iter();
        let (field, condition) = entries.next().unwrap();
        assert_eq!(field, "name");
        assert!(matches!(condition, Condition::Value(_)));
        let (field, condition) = entries.next().unwrap();
        assert_eq!(field, "posts");
        assert!(matches!(condition, Condition::Nested(_)));
    }

    #[test]
    fn test_from_json_operator_wrapper() {
        let map =
            ConditionMap::from_json_str(r#"{"id": {"kind": "moreThan", "operand": 0}}"#).unwrap();

        let (_, condition) = map.iter().next().unwrap();
        match condition {
            Condition::Operator(Operator::MoreThan(value)) => {
                assert_eq!(value, &serde_json::json!(0));
            }
            other => panic!("expected moreThan, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_nested_not() {
        let map = ConditionMap::from_json_str(
            r#"{"title": {"kind": "not", "operand": {"kind": "in", "operand": ["Post 2"]}}}"#,
        )
        .unwrap();

        let (_, condition) = map.iter().next().unwrap();
        match condition {
            Condition::Operator(Operator::Not(NotOperand::Operator(inner))) => {
                assert_eq!(inner.kind(), "in");
            }
            other => panic!("expected not(in), got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_is_null_without_operand() {
        let map = ConditionMap::from_json_str(r#"{"deleted_at": {"kind": "isNull"}}"#).unwrap();

        let (_, condition) = map.iter().next().unwrap();
        assert!(matches!(condition, Condition::Operator(Operator::IsNull)));
    }

    #[test]
    fn test_from_json_unknown_kind() {
        let result = ConditionMap::from_json_str(r#"{"id": {"kind": "approximately"}}"#);

        match result {
            Err(ConditionError::UnsupportedOperator(kind)) => assert_eq!(kind, "approximately"),
            other => panic!("expected UnsupportedOperator, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_arrays() {
        let result = ConditionMap::from_json_str(r#"{"status": ["active", "pending"]}"#);

        assert!(matches!(result, Err(ConditionError::Unsupported(_))));
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        assert!(ConditionMap::from_json_str(r#""just a string""#).is_err());
    }

    #[test]
    fn test_from_json_between_requires_list() {
        let result =
            ConditionMap::from_json_str(r#"{"price": {"kind": "between", "operand": 10}}"#);

        assert!(matches!(result, Err(ConditionError::InvalidOperand(_))));
    }

    #[test]
    fn test_raw_sql_debug_does_not_expose_builder() {
        let debug = format!("{:?}", RawSql::Builder(Arc::new(|col: &str| col.to_string())));
        assert_eq!(debug, "Builder(..)");
    }
}

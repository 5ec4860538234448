//! Nested predicate objects sent to the backend as a JSON `where` parameter.

use crate::error::WhereError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Comparison operators supported by the backend, wire-prefixed with `$`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    Gt,
    Gte,
    Lt,
    Lte,
    Ne,
    Not,
    In,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Gt => "$gt",
            Op::Gte => "$gte",
            Op::Lt => "$lt",
            Op::Lte => "$lte",
            Op::Ne => "$ne",
            Op::Not => "$not",
            Op::In => "$in",
        }
    }

    pub fn parse(s: &str) -> Option<Op> {
        match s {
            "$gt" => Some(Op::Gt),
            "$gte" => Some(Op::Gte),
            "$lt" => Some(Op::Lt),
            "$lte" => Some(Op::Lte),
            "$ne" => Some(Op::Ne),
            "$not" => Some(Op::Not),
            "$in" => Some(Op::In),
            _ => None,
        }
    }
}

/// One field's constraint inside a where-clause.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Plain equality: `{"status": "Approve"}`.
    Eq(Value),
    /// Operator map: `{"price": {"$gte": 10, "$lt": 20}}`.
    Ops(BTreeMap<Op, Value>),
    /// Nested predicate object.
    Nested(Where),
}

/// A where-clause: field name to constraint. Fields serialize in sorted order
/// so the emitted JSON is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Where {
    fields: BTreeMap<String, Filter>,
}

impl Where {
    pub fn new() -> Self {
        Where::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Equality constraint. A `Value::Null` is kept here and dropped by pruning.
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), Filter::Eq(value.into()));
        self
    }

    /// Operator constraint. Repeated calls on the same field merge into one map.
    pub fn op(mut self, field: &str, op: Op, value: impl Into<Value>) -> Self {
        match self.fields.get_mut(field) {
            Some(Filter::Ops(ops)) => {
                ops.insert(op, value.into());
            }
            _ => {
                let mut ops = BTreeMap::new();
                ops.insert(op, value.into());
                self.fields.insert(field.to_string(), Filter::Ops(ops));
            }
        }
        self
    }

    /// Nested predicate on a relation or embedded object.
    pub fn nested(mut self, field: &str, inner: Where) -> Self {
        self.fields.insert(field.to_string(), Filter::Nested(inner));
        self
    }

    /// Date range on one field. The start bound is always `$gte` and the end
    /// bound always `$lte`; a `None` bound is skipped.
    pub fn between(
        mut self,
        field: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        if let Some(from) = from {
            self = self.op(field, Op::Gte, from.to_rfc3339());
        }
        if let Some(to) = to {
            self = self.op(field, Op::Lte, to.to_rfc3339());
        }
        self
    }

    /// Serialize without pruning. Null leaves are kept as-is.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        for (field, filter) in &self.fields {
            let v = match filter {
                Filter::Eq(v) => v.clone(),
                Filter::Ops(ops) => {
                    let mut m = Map::new();
                    for (op, v) in ops {
                        m.insert(op.as_str().to_string(), v.clone());
                    }
                    Value::Object(m)
                }
                Filter::Nested(w) => w.to_value(),
            };
            out.insert(field.clone(), v);
        }
        Value::Object(out)
    }

    /// Serialize with pruning: null leaves are removed recursively and nested
    /// objects that become empty are dropped. Returns `None` when nothing is
    /// left, so callers never send an over-constraining `{}` filter.
    pub fn pruned(&self) -> Option<Value> {
        let mut out = Map::new();
        for (field, filter) in &self.fields {
            match filter {
                Filter::Eq(Value::Null) => {}
                Filter::Eq(v) => {
                    out.insert(field.clone(), v.clone());
                }
                Filter::Ops(ops) => {
                    let mut m = Map::new();
                    for (op, v) in ops {
                        if !v.is_null() {
                            m.insert(op.as_str().to_string(), v.clone());
                        }
                    }
                    if !m.is_empty() {
                        out.insert(field.clone(), Value::Object(m));
                    }
                }
                Filter::Nested(w) => {
                    if let Some(v) = w.pruned() {
                        out.insert(field.clone(), v);
                    }
                }
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(Value::Object(out))
        }
    }

    /// Decode a JSON where-clause back into the structured predicate. The
    /// inverse of [`Where::to_value`]; used by the test backend to interpret
    /// received filters.
    pub fn from_value(value: &Value) -> Result<Where, WhereError> {
        let obj = value.as_object().ok_or(WhereError::NotAnObject)?;
        let mut fields = BTreeMap::new();
        for (field, v) in obj {
            fields.insert(field.clone(), parse_filter(field, v)?);
        }
        Ok(Where { fields })
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Filter)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, field: &str) -> Option<&Filter> {
        self.fields.get(field)
    }
}

fn parse_filter(field: &str, v: &Value) -> Result<Filter, WhereError> {
    let Some(obj) = v.as_object() else {
        return Ok(Filter::Eq(v.clone()));
    };
    let operator_keys = obj.keys().filter(|k| k.starts_with('$')).count();
    if operator_keys == 0 {
        let mut fields = BTreeMap::new();
        for (k, inner) in obj {
            fields.insert(k.clone(), parse_filter(k, inner)?);
        }
        return Ok(Filter::Nested(Where { fields }));
    }
    if operator_keys != obj.len() {
        return Err(WhereError::MixedKeys(field.to_string()));
    }
    let mut ops = BTreeMap::new();
    for (k, inner) in obj {
        let op = Op::parse(k).ok_or_else(|| WhereError::UnknownOperator(k.clone()))?;
        ops.insert(op, inner.clone());
    }
    Ok(Filter::Ops(ops))
}

//! Decoded audit log rows and their JSON projection.

use serde_json::{Map, Number, Value};

use crate::types::{DbId, Timestamp};

/// A single decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Timestamp(Timestamp),
    Json(Value),
}

impl ColumnValue {
    /// Convert to a JSON value.
    ///
    /// Timestamps become RFC 3339 strings with a `+00:00` offset, JSON values
    /// pass through untouched. NaN and infinities have no JSON form and map
    /// to `null`.
    pub fn to_json(&self) -> Value {
        match self {
            ColumnValue::Null => Value::Null,
            ColumnValue::Integer(v) => Value::from(*v),
            ColumnValue::Float(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
            ColumnValue::Bool(v) => Value::Bool(*v),
            ColumnValue::Text(v) => Value::String(v.clone()),
            ColumnValue::Timestamp(ts) => Value::String(ts.to_rfc3339()),
            ColumnValue::Json(v) => v.clone(),
        }
    }
}

/// One row of `audit_logs`, as `(column, value)` pairs in schema order.
///
/// Records are never mutated once read.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogRecord {
    id: DbId,
    fields: Vec<(&'static str, ColumnValue)>,
}

impl AuditLogRecord {
    pub fn new(id: DbId, fields: Vec<(&'static str, ColumnValue)>) -> Self {
        Self { id, fields }
    }

    /// Cursor value of this row.
    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn fields(&self) -> &[(&'static str, ColumnValue)] {
        &self.fields
    }

    /// Look up a column by name.
    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }
}

/// Project a record into a JSON object, keys in column order.
pub fn project_row(record: &AuditLogRecord) -> Map<String, Value> {
    record
        .fields()
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.to_json()))
        .collect()
}

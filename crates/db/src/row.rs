//! Decoding `audit_logs` rows through the typed column schema.

use audit_core::record::{AuditLogRecord, ColumnValue};
use audit_core::schema::{ColumnKind, AUDIT_LOG_COLUMNS, ID_COLUMN};
use audit_core::types::{DbId, Timestamp};
use sqlx::postgres::PgRow;
use sqlx::Row;

/// Decode one row into an [`AuditLogRecord`].
///
/// Every column except `id` may be NULL.
pub fn decode_audit_row(row: &PgRow) -> Result<AuditLogRecord, sqlx::Error> {
    let id: DbId = row.try_get(ID_COLUMN)?;

    let mut fields = Vec::with_capacity(AUDIT_LOG_COLUMNS.len());
    for column in AUDIT_LOG_COLUMNS {
        let value = decode_column(row, column.name, column.kind)?;
        fields.push((column.name, value));
    }

    Ok(AuditLogRecord::new(id, fields))
}

fn decode_column(row: &PgRow, name: &str, kind: ColumnKind) -> Result<ColumnValue, sqlx::Error> {
    let value = match kind {
        ColumnKind::BigInt => row
            .try_get::<Option<i64>, _>(name)?
            .map(ColumnValue::Integer),
        ColumnKind::Int => row
            .try_get::<Option<i32>, _>(name)?
            .map(|v| ColumnValue::Integer(i64::from(v))),
        ColumnKind::Double => row
            .try_get::<Option<f64>, _>(name)?
            .map(ColumnValue::Float),
        ColumnKind::Bool => row.try_get::<Option<bool>, _>(name)?.map(ColumnValue::Bool),
        ColumnKind::Text => row
            .try_get::<Option<String>, _>(name)?
            .map(ColumnValue::Text),
        ColumnKind::Timestamp => row
            .try_get::<Option<Timestamp>, _>(name)?
            .map(ColumnValue::Timestamp),
        ColumnKind::Json => row
            .try_get::<Option<serde_json::Value>, _>(name)?
            .map(ColumnValue::Json),
    };
    Ok(value.unwrap_or(ColumnValue::Null))
}

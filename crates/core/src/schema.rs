//! Typed column schema for the `audit_logs` table.
//!
//! Each selected column carries its semantic kind, which drives both row
//! decoding in the database layer and JSON projection in [`crate::record`].

/// Semantic type of a selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// `BIGINT` / `BIGSERIAL`.
    BigInt,
    /// `INTEGER`.
    Int,
    /// `DOUBLE PRECISION` timing measurements.
    Double,
    Bool,
    Text,
    /// `TIMESTAMPTZ`, projected as an ISO-8601 string.
    Timestamp,
    /// `JSONB`, projected unchanged.
    Json,
}

/// A selected column and its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column { name, kind }
}

/// Name of the identifier column used as the paging cursor.
pub const ID_COLUMN: &str = "id";

/// Columns returned by the feed, in output order.
pub const AUDIT_LOG_COLUMNS: &[Column] = &[
    col(ID_COLUMN, ColumnKind::BigInt),
    col("timestamp", ColumnKind::Timestamp),
    col("action", ColumnKind::Text),
    col("status", ColumnKind::Text),
    col("email", ColumnKind::Text),
    col("email_raw", ColumnKind::Text),
    col("ip", ColumnKind::Text),
    col("user_agent", ColumnKind::Text),
    col("headers", ColumnKind::Json),
    col("request_body", ColumnKind::Json),
    col("threats", ColumnKind::Json),
    col("reason", ColumnKind::Text),
    col("user_id", ColumnKind::Text),
    col("response_time", ColumnKind::Double),
    col("db_query_time", ColumnKind::Double),
    col("request_size", ColumnKind::Int),
    col("method", ColumnKind::Text),
    col("protocol", ColumnKind::Text),
    col("user_exists", ColumnKind::Bool),
    col("error_message", ColumnKind::Text),
    col("error_stack", ColumnKind::Text),
];

/// Comma-separated column list for `SELECT` statements.
pub fn select_list() -> String {
    AUDIT_LOG_COLUMNS
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

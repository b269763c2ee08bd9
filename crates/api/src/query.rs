//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /audit_logs` (`?limit=&since_id=`).
///
/// Type checking happens during deserialization; bounds are checked in
/// `audit_core::audit_feed::validate_limit`.
#[derive(Debug, Deserialize)]
pub struct AuditLogParams {
    pub limit: Option<i64>,
    pub since_id: Option<i64>,
}

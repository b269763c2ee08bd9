//! Route definitions for the audit log feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit_logs;
use crate::state::AppState;

/// Feed routes, mounted at the root.
///
/// ```text
/// GET /audit_logs?limit=&since_id=   -> list_audit_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/audit_logs", get(audit_logs::list_audit_logs))
}

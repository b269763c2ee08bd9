//! Handlers for the audit log feed.

use audit_core::audit_feed::{validate_limit, AuditPageRequest};
use audit_db::repositories::AuditLogRepo;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::query::AuditLogParams;
use crate::state::AppState;

/// GET /audit_logs
///
/// Returns up to `limit` records with `id > since_id`, ascending by id, as a
/// bare JSON array. The descending order supported by the repository is not
/// exposed here.
pub async fn list_audit_logs(
    State(state): State<AppState>,
    params: Result<Query<AuditLogParams>, QueryRejection>,
) -> AppResult<Json<Vec<Map<String, Value>>>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let limit = validate_limit(params.limit)?;

    let page = AuditPageRequest::ascending(params.since_id, limit);
    let rows = AuditLogRepo::fetch_projected(&state.pool, &page).await?;

    Ok(Json(rows))
}

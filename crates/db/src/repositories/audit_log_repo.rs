//! Repository for the read-only `audit_logs` feed.

use audit_core::audit_feed::{AuditPageRequest, SortOrder};
use audit_core::record::{project_row, AuditLogRecord};
use audit_core::schema::select_list;
use serde_json::{Map, Value};

use crate::row::decode_audit_row;
use crate::DbPool;

/// Provides paged reads over `audit_logs`. This service never writes to it.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Build the page query for the given shape.
    ///
    /// Without a cursor `$1` is the limit. With a cursor `$1` is `since_id`
    /// and `$2` the limit. The cursor always bounds from below, whatever
    /// the direction.
    pub fn build_query(with_cursor: bool, order: SortOrder) -> String {
        let columns = select_list();
        let direction = order.as_sql();
        if with_cursor {
            format!(
                "SELECT {columns} FROM audit_logs \
                 WHERE id > $1 \
                 ORDER BY id {direction} \
                 LIMIT $2"
            )
        } else {
            format!(
                "SELECT {columns} FROM audit_logs \
                 ORDER BY id {direction} \
                 LIMIT $1"
            )
        }
    }

    /// Fetch one page of records.
    ///
    /// Holds a single pooled connection for exactly one round-trip; the
    /// connection goes back to the pool on every exit path. Failures are
    /// returned as-is, without retry.
    pub async fn fetch_page(
        pool: &DbPool,
        page: &AuditPageRequest,
    ) -> Result<Vec<AuditLogRecord>, sqlx::Error> {
        let sql = Self::build_query(page.since_id.is_some(), page.order);

        let mut conn = pool.acquire().await?;
        let query = match page.since_id {
            Some(since_id) => sqlx::query(&sql).bind(since_id).bind(page.limit),
            None => sqlx::query(&sql).bind(page.limit),
        };
        let rows = query.fetch_all(&mut *conn).await?;
        drop(conn);

        tracing::debug!(
            since_id = ?page.since_id,
            limit = page.limit,
            order = page.order.as_sql(),
            rows = rows.len(),
            "Fetched audit log page"
        );

        rows.iter().map(decode_audit_row).collect()
    }

    /// Fetch one page and project every record into a JSON object.
    pub async fn fetch_projected(
        pool: &DbPool,
        page: &AuditPageRequest,
    ) -> Result<Vec<Map<String, Value>>, sqlx::Error> {
        let records = Self::fetch_page(pool, page).await?;
        Ok(records.iter().map(project_row).collect())
    }
}

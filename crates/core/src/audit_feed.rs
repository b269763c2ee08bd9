//! Paging rules for the audit log feed.
//!
//! Clients page through `audit_logs` by remembering the last identifier they
//! saw (`since_id`) and asking for the next `limit` rows. The server keeps no
//! cursor state.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Page size bounds
// ---------------------------------------------------------------------------

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Smallest accepted page size.
pub const MIN_PAGE_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: i64 = 5000;

/// Resolve and bounds-check a caller-supplied page size.
///
/// Out-of-range values are rejected rather than clamped.
pub fn validate_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between {MIN_PAGE_LIMIT} and {MAX_PAGE_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Direction of the `ORDER BY id` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction. The only text ever spliced into the
    /// query; everything caller-supplied is bound as a parameter.
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a direction token. `"asc"` in any case is ascending, every
    /// other value (including the empty string) is descending.
    pub fn parse_lenient(token: &str) -> Self {
        if token.eq_ignore_ascii_case("asc") {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// One page request against the feed.
///
/// When `since_id` is set only rows with `id > since_id` are returned, in
/// either direction. Descending pages therefore start at the newest row above
/// the cursor's lower bound, not below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditPageRequest {
    pub since_id: Option<DbId>,
    pub limit: i64,
    pub order: SortOrder,
}

impl AuditPageRequest {
    /// Ascending page of `limit` rows after `since_id`.
    pub fn ascending(since_id: Option<DbId>, limit: i64) -> Self {
        Self {
            since_id,
            limit,
            order: SortOrder::Asc,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

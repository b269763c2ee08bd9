//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&DbPool` as the first argument.

pub mod audit_log_repo;

pub use audit_log_repo::AuditLogRepo;

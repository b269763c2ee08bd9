//! Domain types and pure rules for the audit log feed.
//!
//! This crate performs no I/O. The database layer decodes rows into
//! [`record::AuditLogRecord`] and the API layer serializes the projection.

pub mod audit_feed;
pub mod error;
pub mod record;
pub mod schema;
pub mod types;

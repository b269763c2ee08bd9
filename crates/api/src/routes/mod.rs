pub mod audit_logs;
pub mod health;

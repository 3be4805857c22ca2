//! Pantry Database — SurrealDB connection management, migrations,
//! write-path repositories and the dashboard data source.
//!
//! This crate provides:
//! - Connection management ([`DbManager`], [`DbConfig`])
//! - Schema initialization and migrations ([`run_migrations`])
//! - Repository implementations of the `pantry-core` traits
//! - [`SurrealDashboardSource`], the read side behind the dashboard
//! - Error types ([`DbError`])

mod connection;
mod error;
pub mod repository;
mod schema;
mod source;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
pub use source::SurrealDashboardSource;

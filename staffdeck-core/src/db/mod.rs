//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with an explicit cap - no shared mutable connection
//! - Every operation is a single parameterized statement (the department
//!   delete adds a read-only probe first); pooled connections are released
//!   on all exit paths by sqlx's guards
//! - Integrity rules live in the schema; violations are classified by
//!   constraint name, never by matching message text

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;

//! staffdeck-core: data-access layer for the staffdeck directory
//!
//! Owns the schema, the connection pool, validated domain models, and every
//! employee/department operation with its integrity-error translation. The
//! HTTP crate consumes this layer and maps [`db::DbError`] onto user-facing
//! responses; nothing in here renders user-facing text or inspects requests.

pub mod config;
pub mod db;
pub mod models;

pub use config::{ConfigError, StoreConfig};
pub use db::pool::{create_pool, create_pool_with_options};
pub use db::schema::init_schema;
pub use db::{DbError, Department, DepartmentRepo, Employee, EmployeeListing, EmployeeRepo};
pub use models::{
    DepartmentName, EmailAddress, EmployeeName, EmployeeUpdate, NewEmployee, ValidationError,
};

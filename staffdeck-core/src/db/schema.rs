//! Schema initialization
//!
//! Both tables are created idempotently on every process start; existing
//! data is never touched. A failure here must propagate - the caller treats
//! it as fatal and aborts startup.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

/// Constraint names declared in the DDL below. The repositories translate
/// violations of these into domain errors, so the two sets must stay paired.
pub const UNIQUE_DEPARTMENT_NAME: &str = "departments_name_key";
pub const UNIQUE_EMPLOYEE_EMAIL: &str = "employees_email_key";
pub const FK_EMPLOYEE_DEPARTMENT: &str = "employees_department_id_fkey";

/// Ensure both tables exist.
///
/// Deleting a department clears the reference on its employees via
/// `ON DELETE SET NULL`; that cascade is only reachable once
/// `DepartmentRepo::delete` has verified there are no dependents left.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id   SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            CONSTRAINT departments_name_key UNIQUE (name)
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create departments table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id            SERIAL PRIMARY KEY,
            name          VARCHAR(100) NOT NULL,
            email         VARCHAR(100) NOT NULL,
            department_id INTEGER,
            salary        NUMERIC(10, 2) NOT NULL DEFAULT 0.00,
            CONSTRAINT employees_email_key UNIQUE (email),
            CONSTRAINT employees_department_id_fkey
                FOREIGN KEY (department_id) REFERENCES departments (id)
                ON DELETE SET NULL
        );
    "#,
    )
    .execute(pool)
    .await
    .context("failed to create employees table")?;

    info!("database schema ready");
    Ok(())
}

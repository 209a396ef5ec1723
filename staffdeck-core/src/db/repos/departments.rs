//! Department repository
//!
//! Departments are a flat lookup table; the integrity rules are the unique
//! name and the dependent-employee guard on deletion.

use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::models::DepartmentName;

use super::{violated_constraint, DbError, Violation};

/// Department record from database
#[derive(Debug, Clone, FromRow)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

/// Department repository
pub struct DepartmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new department.
    ///
    /// A name collision surfaces as [`DbError::DuplicateName`]; the table
    /// gains no row in that case.
    pub async fn create(&self, name: DepartmentName) -> Result<Department, DbError> {
        let row = sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await;

        match row {
            Ok(department) => {
                debug!(id = department.id, name = %department.name, "department added");
                Ok(department)
            }
            Err(e) => match violated_constraint(&e) {
                Some(Violation::DepartmentName | Violation::UnnamedUnique) => {
                    Err(DbError::DuplicateName)
                }
                _ => Err(DbError::Unexpected(e)),
            },
        }
    }

    /// All departments ordered by name ascending.
    pub async fn list(&self) -> Result<Vec<Department>, DbError> {
        let rows =
            sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY name")
                .fetch_all(self.pool)
                .await?;
        Ok(rows)
    }

    /// Delete a department that no employee references.
    ///
    /// The probe classifies the failure; the guarded DELETE enforces the
    /// rule, so the foreign key's SET NULL cascade cannot fire through this
    /// path even if an employee is assigned between the two statements.
    /// Returns whether a row was removed (`false` = not found).
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let has_dependents: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE department_id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        if has_dependents {
            return Err(DbError::HasDependents { department_id: id });
        }

        let result = sqlx::query(
            r#"
            DELETE FROM departments d
            WHERE d.id = $1
              AND NOT EXISTS (SELECT 1 FROM employees e WHERE e.department_id = d.id)
            "#,
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            debug!(id, "department deleted");
        }
        Ok(removed)
    }
}

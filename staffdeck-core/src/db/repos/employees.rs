//! Employee repository
//!
//! List projections join the department name so the browser table can show
//! it directly; `get` returns the raw row with the foreign key so edit forms
//! can round-trip the assignment.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::models::{EmployeeUpdate, NewEmployee};

use super::{violated_constraint, DbError, Violation};

/// Employee record from database
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub salary: Decimal,
}

/// Employee row joined with its department name for list display
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeListing {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

/// Employee repository
pub struct EmployeeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new employee row.
    ///
    /// An email collision surfaces as [`DbError::DuplicateEmail`]; a
    /// department id with no matching row as [`DbError::InvalidDepartment`].
    pub async fn create(&self, new: NewEmployee) -> Result<Employee, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, email, department_id, salary)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, department_id, salary
            "#,
        )
        .bind(new.name.as_str())
        .bind(new.email.as_str())
        .bind(new.department_id)
        .bind(new.salary)
        .fetch_one(self.pool)
        .await;

        match row {
            Ok(employee) => {
                debug!(id = employee.id, name = %employee.name, "employee added");
                Ok(employee)
            }
            Err(e) => Err(classify_employee_write(e, new.department_id)),
        }
    }

    /// All employees with their department name, ordered by id ascending.
    pub async fn list(&self) -> Result<Vec<EmployeeListing>, DbError> {
        let rows = sqlx::query_as::<_, EmployeeListing>(
            r#"
            SELECT e.id, e.name, e.email, d.name AS department, e.salary
            FROM employees e
            LEFT JOIN departments d ON e.department_id = d.id
            ORDER BY e.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search on the employee name.
    ///
    /// Same projection and ordering as [`Self::list`]; an empty result set
    /// is a valid outcome, not an error.
    pub async fn search(&self, fragment: &str) -> Result<Vec<EmployeeListing>, DbError> {
        let rows = sqlx::query_as::<_, EmployeeListing>(
            r#"
            SELECT e.id, e.name, e.email, d.name AS department, e.salary
            FROM employees e
            LEFT JOIN departments d ON e.department_id = d.id
            WHERE e.name ILIKE '%' || $1 || '%'
            ORDER BY e.id
            "#,
        )
        .bind(fragment)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Fetch a single employee with the raw department id, or `None`.
    pub async fn get(&self, id: i32) -> Result<Option<Employee>, DbError> {
        let row = sqlx::query_as::<_, Employee>(
            "SELECT id, name, email, department_id, salary FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a partial update; only supplied fields change.
    ///
    /// An empty change set is a successful no-op that issues no statement.
    /// Returns whether a row matched - zero rows affected reports "not
    /// found" even though the statement itself passed validation.
    pub async fn update(&self, id: i32, changes: EmployeeUpdate) -> Result<bool, DbError> {
        if changes.is_empty() {
            return Ok(true);
        }

        let department_id = changes.department_id;
        let mut query = build_update(id, &changes);
        let result = query.build().execute(self.pool).await;

        match result {
            Ok(done) => Ok(done.rows_affected() > 0),
            Err(e) => Err(classify_employee_write(e, department_id)),
        }
    }

    /// Delete an employee unconditionally; returns whether a row existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            debug!(id, "employee deleted");
        }
        Ok(removed)
    }
}

/// Translate a failed employee write into its domain error.
fn classify_employee_write(err: sqlx::Error, department_id: Option<i32>) -> DbError {
    match violated_constraint(&err) {
        Some(Violation::EmployeeEmail | Violation::UnnamedUnique) => DbError::DuplicateEmail,
        Some(Violation::EmployeeDepartment | Violation::UnnamedForeignKey) => {
            // A foreign-key violation implies a department id was supplied.
            DbError::InvalidDepartment {
                department_id: department_id.unwrap_or_default(),
            }
        }
        _ => DbError::Unexpected(err),
    }
}

/// Assemble the UPDATE statement for the supplied fields only.
fn build_update<'q>(id: i32, changes: &'q EmployeeUpdate) -> QueryBuilder<'q, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE employees SET ");
    let mut fields = builder.separated(", ");

    if let Some(name) = &changes.name {
        fields.push("name = ").push_bind_unseparated(name.as_str());
    }
    if let Some(email) = &changes.email {
        fields.push("email = ").push_bind_unseparated(email.as_str());
    }
    if let Some(department_id) = changes.department_id {
        fields
            .push("department_id = ")
            .push_bind_unseparated(department_id);
    }
    if let Some(salary) = changes.salary {
        fields.push("salary = ").push_bind_unseparated(salary);
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailAddress, EmployeeName};

    #[test]
    fn update_includes_only_supplied_fields() {
        let changes = EmployeeUpdate {
            salary: Some(Decimal::new(9_500_000, 2)),
            ..Default::default()
        };

        let builder = build_update(7, &changes);
        assert_eq!(builder.sql(), "UPDATE employees SET salary = $1 WHERE id = $2");
    }

    #[test]
    fn update_binds_fields_in_declaration_order() {
        let changes = EmployeeUpdate {
            name: Some(EmployeeName::new("Ada").unwrap()),
            email: Some(EmailAddress::new("ada@example.com").unwrap()),
            department_id: Some(3),
            salary: Some(Decimal::ZERO),
        };

        let builder = build_update(1, &changes);
        assert_eq!(
            builder.sql(),
            "UPDATE employees SET name = $1, email = $2, department_id = $3, salary = $4 WHERE id = $5"
        );
    }

    #[test]
    fn update_with_name_and_salary_skips_the_rest() {
        let changes = EmployeeUpdate {
            name: Some(EmployeeName::new("Grace").unwrap()),
            salary: Some(Decimal::new(100, 0)),
            ..Default::default()
        };

        let builder = build_update(2, &changes);
        assert_eq!(
            builder.sql(),
            "UPDATE employees SET name = $1, salary = $2 WHERE id = $3"
        );
    }
}

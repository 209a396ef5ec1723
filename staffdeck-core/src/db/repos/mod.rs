//! Repositories - CRUD/search operations and their error translation
//!
//! Every operation either returns its documented result or fails with one of
//! the [`DbError`] kinds. "Not found" on update/delete/get is reported as a
//! boolean or `Option`, not as an error.

mod departments;
mod employees;

pub use departments::{Department, DepartmentRepo};
pub use employees::{Employee, EmployeeListing, EmployeeRepo};

use sqlx::error::ErrorKind;

use crate::db::schema::{FK_EMPLOYEE_DEPARTMENT, UNIQUE_DEPARTMENT_NAME, UNIQUE_EMPLOYEE_EMAIL};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Department name uniqueness violated
    #[error("department name already exists")]
    DuplicateName,

    /// Employee email uniqueness violated
    #[error("email address already in use")]
    DuplicateEmail,

    /// Employee references a department that does not exist
    #[error("department {department_id} does not exist")]
    InvalidDepartment { department_id: i32 },

    /// Department deletion blocked by referencing employees
    #[error("department {department_id} still has employees assigned")]
    HasDependents { department_id: i32 },

    /// Any other store failure; the caller logs and surfaces it, never
    /// swallows it
    #[error("database error: {0}")]
    Unexpected(#[from] sqlx::Error),
}

/// Integrity rule tripped by a failed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    DepartmentName,
    EmployeeEmail,
    EmployeeDepartment,
    /// Unique violation with no reported constraint name; the call site
    /// knows which unique constraint its statement could have tripped.
    UnnamedUnique,
    /// Foreign-key violation with no reported constraint name.
    UnnamedForeignKey,
}

/// Map a reported constraint name onto the integrity rule it enforces.
pub(crate) fn violation_for_constraint(name: &str) -> Option<Violation> {
    match name {
        UNIQUE_DEPARTMENT_NAME => Some(Violation::DepartmentName),
        UNIQUE_EMPLOYEE_EMAIL => Some(Violation::EmployeeEmail),
        FK_EMPLOYEE_DEPARTMENT => Some(Violation::EmployeeDepartment),
        _ => None,
    }
}

/// Classify a failed write without matching on message text.
///
/// Postgres names the violated constraint in its error metadata; the
/// driver-reported violation kind is only consulted as a last resort when no
/// constraint name is present.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<Violation> {
    let db = err.as_database_error()?;

    if let Some(name) = db.constraint() {
        return violation_for_constraint(name);
    }

    match db.kind() {
        ErrorKind::UniqueViolation => Some(Violation::UnnamedUnique),
        ErrorKind::ForeignKeyViolation => Some(Violation::UnnamedForeignKey),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_names_map_to_their_rules() {
        assert_eq!(
            violation_for_constraint("departments_name_key"),
            Some(Violation::DepartmentName)
        );
        assert_eq!(
            violation_for_constraint("employees_email_key"),
            Some(Violation::EmployeeEmail)
        );
        assert_eq!(
            violation_for_constraint("employees_department_id_fkey"),
            Some(Violation::EmployeeDepartment)
        );
    }

    #[test]
    fn unknown_constraints_stay_unclassified() {
        assert_eq!(violation_for_constraint("employees_pkey"), None);
        assert_eq!(violation_for_constraint(""), None);
    }

    #[test]
    fn non_database_errors_stay_unclassified() {
        assert_eq!(violated_constraint(&sqlx::Error::RowNotFound), None);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            DbError::InvalidDepartment { department_id: 42 }.to_string(),
            "department 42 does not exist"
        );
        assert_eq!(
            DbError::HasDependents { department_id: 7 }.to_string(),
            "department 7 still has employees assigned"
        );
    }
}

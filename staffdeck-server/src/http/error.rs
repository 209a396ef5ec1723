//! API error types with IntoResponse
//!
//! Domain errors map onto stable HTTP statuses and JSON bodies; unexpected
//! store errors are logged here and replaced with a generic message so no
//! store internals reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use staffdeck_core::db::DbError;
use staffdeck_core::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request input failed validation (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i32 },

    /// Domain or store error from the data-access layer
    Db(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} {} not found", resource, id)
                }),
            ),
            Self::Db(DbError::DuplicateName) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "duplicate_name",
                    "message": "a department with that name already exists"
                }),
            ),
            Self::Db(DbError::DuplicateEmail) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "duplicate_email",
                    "message": "an employee with that email already exists"
                }),
            ),
            Self::Db(DbError::InvalidDepartment { department_id }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "invalid_department",
                    "message": format!("department {} does not exist", department_id)
                }),
            ),
            Self::Db(DbError::HasDependents { department_id }) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "department_in_use",
                    "message": format!(
                        "department {} still has employees; reassign or remove them first",
                        department_id
                    )
                }),
            ),
            Self::Db(e @ DbError::Unexpected(_)) => {
                // Log the actual error, return a generic message
                tracing::error!("store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "employee",
            id: 7,
        };
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicates_and_dependents_are_409() {
        assert_eq!(
            ApiError::Db(DbError::DuplicateName).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Db(DbError::DuplicateEmail).into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Db(DbError::HasDependents { department_id: 3 })
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn invalid_department_is_422() {
        let err = ApiError::Db(DbError::InvalidDepartment { department_id: 9 });
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn unexpected_store_error_is_500() {
        let err = ApiError::Db(DbError::Unexpected(sqlx::Error::RowNotFound));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

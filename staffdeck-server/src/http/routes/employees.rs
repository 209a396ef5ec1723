//! Employee endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use staffdeck_core::db::{Employee, EmployeeListing, EmployeeRepo};
use staffdeck_core::models::{EmailAddress, EmployeeName, EmployeeUpdate, NewEmployee};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Query parameters for the employee listing
#[derive(Deserialize)]
pub struct ListEmployeesParams {
    /// Name fragment; blank or absent means "list everyone"
    pub search: Option<String>,
}

/// Create employee request
#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department_id: Option<i32>,
    /// Defaults to 0.00 when omitted
    #[serde(default)]
    pub salary: Decimal,
}

/// Partial update request; absent fields are left unchanged
#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department_id: Option<i32>,
    pub salary: Option<Decimal>,
}

/// Employee row with the joined department name, as shown in the listing
#[derive(Serialize)]
pub struct EmployeeListingResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

impl From<EmployeeListing> for EmployeeListingResponse {
    fn from(e: EmployeeListing) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            department: e.department,
            salary: e.salary,
        }
    }
}

/// Raw employee record with the department id (edit-form round trip)
#[derive(Serialize)]
pub struct EmployeeResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department_id: Option<i32>,
    pub salary: Decimal,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            department_id: e.department_id,
            salary: e.salary,
        }
    }
}

/// GET /employees - list all, or search by name fragment
async fn list_employees(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListEmployeesParams>,
) -> Result<Json<Vec<EmployeeListingResponse>>, ApiError> {
    let repo = EmployeeRepo::new(&state.pool);

    let fragment = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let rows = match fragment {
        Some(fragment) => repo.search(fragment).await?,
        None => repo.list().await?,
    };

    Ok(Json(
        rows.into_iter().map(EmployeeListingResponse::from).collect(),
    ))
}

/// POST /employees - create an employee
async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let new = NewEmployee {
        name: EmployeeName::new(&req.name)?,
        email: EmailAddress::new(&req.email)?,
        department_id: req.department_id,
        salary: req.salary,
    };

    let employee = EmployeeRepo::new(&state.pool).create(new).await?;
    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// GET /employees/{id} - single raw record
async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let employee = EmployeeRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound {
            resource: "employee",
            id,
        })?;
    Ok(Json(EmployeeResponse::from(employee)))
}

/// PUT /employees/{id} - partial update from the supplied fields
async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<StatusCode, ApiError> {
    let changes = EmployeeUpdate {
        name: req.name.as_deref().map(EmployeeName::new).transpose()?,
        email: req.email.as_deref().map(EmailAddress::new).transpose()?,
        department_id: req.department_id,
        salary: req.salary,
    };

    let matched = EmployeeRepo::new(&state.pool).update(id, changes).await?;
    if matched {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            resource: "employee",
            id,
        })
    }
}

/// DELETE /employees/{id} - unconditional delete
async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let removed = EmployeeRepo::new(&state.pool).delete(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            resource: "employee",
            id,
        })
    }
}

/// Employee routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

//! Department endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use staffdeck_core::db::{Department, DepartmentRepo};
use staffdeck_core::models::DepartmentName;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Create department request
#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

/// Department response
#[derive(Serialize)]
pub struct DepartmentResponse {
    pub id: i32,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(d: Department) -> Self {
        Self {
            id: d.id,
            name: d.name,
        }
    }
}

/// GET /departments - all departments ordered by name
async fn list_departments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DepartmentResponse>>, ApiError> {
    let departments = DepartmentRepo::new(&state.pool).list().await?;
    Ok(Json(
        departments.into_iter().map(DepartmentResponse::from).collect(),
    ))
}

/// POST /departments - create a department
async fn create_department(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    let name = DepartmentName::new(&req.name)?;
    let department = DepartmentRepo::new(&state.pool).create(name).await?;
    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

/// DELETE /departments/{id} - delete when no employee references it
async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let removed = DepartmentRepo::new(&state.pool).delete(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            resource: "department",
            id,
        })
    }
}

/// Department routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/departments", get(list_departments).post(create_department))
        .route("/departments/{id}", delete(delete_department))
}

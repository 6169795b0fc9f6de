//! Employee management routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::employees::Employee;
use crate::web::{app_state::AppState, error::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_employees).post(create_employee)).route("/:id", delete(delete_employee))
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    name: String,
}

#[derive(Debug, Serialize)]
struct CreatedResponse {
    id: i64,
    name: String,
}

#[instrument(name = "GET /employees", skip(state))]
async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employees()?.list()?;
    Ok(Json(employees))
}

#[instrument(name = "POST /employees", skip(state, body))]
async fn create_employee(State(state): State<AppState>, Form(body): Form<CreateBody>) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.trim().to_string();
    let id = state.employees()?.create(&name)?;
    tracing::info!(id, name = %name, "employee created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, name })))
}

#[instrument(name = "DELETE /employees/:id", skip(state))]
async fn delete_employee(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.employees()?.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

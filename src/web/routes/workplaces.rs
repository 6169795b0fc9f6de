//! Workplace management routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::workplaces::Workplace;
use crate::web::{app_state::AppState, error::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_workplaces).post(create_workplace)).route("/:id", delete(delete_workplace))
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

#[instrument(name = "GET /workplaces", skip(state))]
async fn list_workplaces(State(state): State<AppState>) -> Result<Json<Vec<Workplace>>, ApiError> {
    let workplaces = state.workplaces()?.list()?;
    Ok(Json(workplaces))
}

#[instrument(name = "POST /workplaces", skip(state, body))]
async fn create_workplace(State(state): State<AppState>, Form(body): Form<CreateBody>) -> Result<impl IntoResponse, ApiError> {
    let name = body.name.trim().to_string();
    let id = state.workplaces()?.create(&name)?;
    tracing::info!(id, name = %name, "workplace created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id, name })))
}

#[instrument(name = "DELETE /workplaces/:id", skip(state))]
async fn delete_workplace(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.workplaces()?.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

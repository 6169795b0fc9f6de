//! Work log routes: submission, filtered listing, deletion and export.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get},
    Form, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::worklog::{LogFilter, LogOrder, LogRow, LogSubmission, DATE_FORMAT};
use crate::web::{app_state::AppState, error::ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(submit_log))
        .route("/export", get(export_logs))
        .route("/:id", delete(delete_log))
}

/// Raw filter query parameters.
///
/// Everything arrives as optional text: an absent or empty parameter
/// imposes no constraint, anything else must parse. Malformed values are
/// rejected outright rather than silently dropped from the filter.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    employee_id: Option<String>,
    workplace_id: Option<String>,
    name: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl FilterParams {
    fn into_filter(self) -> Result<LogFilter, ApiError> {
        let mut violations = Vec::new();

        let filter = LogFilter {
            employee_id: parse_id("employee_id", self.employee_id, &mut violations),
            workplace_id: parse_id("workplace_id", self.workplace_id, &mut violations),
            name: self.name.filter(|name| !name.trim().is_empty()),
            from: parse_date("from", self.from, &mut violations),
            to: parse_date("to", self.to, &mut violations),
        };

        if !violations.is_empty() {
            return Err(ApiError::bad_request("invalid filter").with_violations(violations));
        }
        Ok(filter)
    }
}

fn parse_id(field: &str, value: Option<String>, violations: &mut Vec<String>) -> Option<i64> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            violations.push(format!("{} '{}' is not a valid id", field, value));
            None
        }
    }
}

fn parse_date(field: &str, value: Option<String>, violations: &mut Vec<String>) -> Option<NaiveDate> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(format!("{} '{}' is not a valid YYYY-MM-DD date", field, value));
            None
        }
    }
}

#[instrument(name = "GET /logs", skip(state))]
async fn list_logs(State(state): State<AppState>, Query(params): Query<FilterParams>) -> Result<Json<Vec<LogRow>>, ApiError> {
    let filter = params.into_filter()?;
    let rows = state.work_logs()?.fetch(&filter, LogOrder::Display)?;
    Ok(Json(rows))
}

#[derive(Debug, Serialize)]
struct SubmittedResponse {
    id: i64,
}

#[instrument(name = "POST /logs", skip(state, submission))]
async fn submit_log(State(state): State<AppState>, Form(submission): Form<LogSubmission>) -> Result<impl IntoResponse, ApiError> {
    let new_log = submission
        .validate()
        .map_err(|violations| ApiError::bad_request("validation failed").with_violations(violations))?;

    let id = state.work_logs()?.insert(&new_log)?;
    tracing::info!(id, "work log submitted");
    Ok((StatusCode::CREATED, Json(SubmittedResponse { id })))
}

#[instrument(name = "DELETE /logs/:id", skip(state))]
async fn delete_log(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.work_logs()?.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Default, Deserialize)]
struct ExportParams {
    #[serde(flatten)]
    filter: FilterParams,
    format: Option<String>,
}

#[instrument(name = "GET /logs/export", skip(state))]
async fn export_logs(State(state): State<AppState>, Query(params): Query<ExportParams>) -> Result<impl IntoResponse, ApiError> {
    let format = match params.format.as_deref() {
        None | Some("") => ExportFormat::Xlsx,
        Some(value) => value.parse::<ExportFormat>().map_err(ApiError::bad_request)?,
    };
    let filter = params.filter.into_filter()?;

    let mut logs = state.work_logs()?;
    let rows = logs.fetch(&filter, LogOrder::Export)?;
    let total_hours = logs.sum_hours(&filter)?;
    let bytes = Exporter::new(format).build(&rows, total_hours)?;

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", format.file_name())),
    ];
    Ok((headers, bytes))
}

use axum::{http::header, http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::web::{app_state::AppState, routes};

/// Assembles the application router: resource routes, CORS and tracing.
pub fn create(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(|| async { "worklog is running" }))
        .nest("/logs", routes::logs::router())
        .nest("/employees", routes::employees::router())
        .nest("/workplaces", routes::workplaces::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

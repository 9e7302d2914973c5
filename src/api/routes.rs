use crate::api::api_error::APIError;
use crate::api::model::UpdateRecordResult;
use crate::api::server::AppState;
use crate::updater::{SharedUpdater, UpdateRecordRequest};
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Request;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use serde_json::json;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

/// Build the API [`Router`] around `updater`, with requests cut off after `timeout`.
pub fn new(updater: SharedUpdater, timeout: Duration) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route("/", get(update).post(update))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(TimeoutLayer::new(timeout))
        .with_state(AppState { updater })
}

/// Method and path only: the query string carries the password.
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path()
    )
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

async fn update(
    State(state): State<AppState>,
    WithRejection(Query(request), _): WithRejection<Query<UpdateRecordRequest>, APIError>,
) -> Result<UpdateRecordResult, APIError> {
    let outcome = state.updater.handle(request).await?;
    Ok(UpdateRecordResult(outcome))
}

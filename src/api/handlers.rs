//! HTTP request handlers for the bean calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_batch;
use crate::models::{AgentInput, ResultSet};
use crate::report::{EXPORT_FILE_NAME, ExportOptions, export_csv_bytes};

use super::page::index_html;
use super::request::{CalculationRequest, ExportQuery};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for GET /, the calculator form page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(index_html(state.config()))
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a batch of agent rows and returns the calculated result set.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let result = match run_batch(&state, payload, correlation_id) {
        Ok(result) => result,
        Err(error) => return json_error(error),
    };

    info!(
        correlation_id = %correlation_id,
        records = result.totals.record_count,
        total_beans = %result.totals.total_beans,
        total_diamonds = result.totals.total_diamonds,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse::new(result)),
    )
        .into_response()
}

/// Handler for POST /export endpoint.
///
/// Accepts the same body as `/calculate` and returns the results as a CSV
/// download.
async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let result = match run_batch(&state, payload, correlation_id) {
        Ok(result) => result,
        Err(error) => return json_error(error),
    };

    let options: ExportOptions = query.into();
    match export_csv_bytes(&result, state.config(), &options) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                records = result.totals.record_count,
                bytes = bytes.len(),
                include_breakdown = options.include_breakdown,
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            json_error(err.into())
        }
    }
}

/// Parses the request body, validates it, and calculates the result set.
fn run_batch(
    state: &AppState,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<ResultSet, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let inputs: Vec<AgentInput> = request.agents.into_iter().map(Into::into).collect();
    let start_time = Instant::now();

    calculate_batch(&inputs, state.config())
        .inspect(|_| {
            info!(
                correlation_id = %correlation_id,
                duration_us = start_time.elapsed().as_micros(),
                "Batch calculated"
            );
        })
        .map_err(|err| {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            err.into()
        })
}

fn json_error(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::error::NAME_REQUIRED_MESSAGE;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::reference())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{"agents":[{"name":"Ava","beans_earned":"12000"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: CalculationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.result.records.len(), 1);
        assert_eq!(result.result.records[0].total_beans, Decimal::from(5430));
        assert_eq!(result.summary.total_diamonds, 1488);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/calculate", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_blank_name_returns_single_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/calculate",
                r#"{"agents":[{"name":"","beans_earned":"1"},{"name":" ","beans_earned":"2"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.message, NAME_REQUIRED_MESSAGE);
    }

    #[tokio::test]
    async fn test_api_004_export_returns_csv_attachment() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json(
                "/export?include_breakdown=false",
                r#"{"agents":[{"name":"Ava","beans_earned":"12000"}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"agent_beans.csv\""
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.lines().last(), Some("Ava,12000,23,4830,600,5430,1488"));
    }

    #[tokio::test]
    async fn test_index_page_is_html() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}

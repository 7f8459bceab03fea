//! HTTP surface over the audit pipeline.

use crate::audit::audit_url;
use crate::error::{AuditError, Result};
use crate::page::fetch::PageFetcher;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub const TOOL_NAME: &str = "AEO On-Page Auditor";

#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<dyn PageFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}

impl ViewQuery {
    fn nested(&self) -> bool {
        self.view.as_deref() == Some("nested")
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/aeo-analyze", post(analyze_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AuditError::Server(format!("failed to bind {addr}: {e}")))?;
    tracing::info!(%addr, "aeo-audit listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|e| AuditError::Server(e.to_string()))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "tool": TOOL_NAME }))
}

async fn analyze_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> std::result::Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: rejection.body_text(),
            }),
        )
    })?;
    let raw_url = request.url.unwrap_or_default();

    // Fetching and parsing block; keep them off the async workers.
    let fetcher = Arc::clone(&state.fetcher);
    let report = tokio::task::spawn_blocking(move || audit_url(fetcher.as_ref(), &raw_url))
        .await
        .map_err(|e| error_response(AuditError::Server(e.to_string())))?
        .map_err(error_response)?;

    let body = if query.nested() {
        serde_json::to_value(&report)
    } else {
        serde_json::to_value(report.flatten())
    }
    .map_err(|e| error_response(AuditError::Json(e)))?;
    Ok(Json(body))
}

fn error_response(err: AuditError) -> ApiError {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        tracing::warn!(error = %err, "analysis failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::testing::{FailingFetcher, StaticFetcher, SAMPLE_PAGE};

    fn state_with(fetcher: impl PageFetcher + 'static) -> AppState {
        AppState::new(Arc::new(fetcher))
    }

    fn request(url: Option<&str>) -> std::result::Result<Json<AnalyzeRequest>, JsonRejection> {
        Ok(Json(AnalyzeRequest {
            url: url.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn health_reports_static_payload() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tool"], TOOL_NAME);
    }

    #[tokio::test]
    async fn analyze_returns_flattened_view_by_default() {
        let state = state_with(StaticFetcher::new(SAMPLE_PAGE));
        let Json(body) = analyze_handler(
            State(state),
            Query(ViewQuery::default()),
            request(Some("https://example.com/coffee")),
        )
        .await
        .expect("analysis should succeed");

        assert_eq!(body["url"], "https://example.com/coffee");
        assert_eq!(body["faq_schema_present"], true);
        assert_eq!(body["faq_count"], 3);
        assert_eq!(body["aeo_checks"]["FAQ Schema"], true);
        assert_eq!(body["score_breakdown"]["schema"]["max"], 25.0);
        assert!(body["engine_scores"]["Perplexity"]["score"].is_number());
        assert!(body["recommendations"].is_array());
        assert!(body["recommendations"][0].get("id").is_none());
        assert!(body["recommendations"][0]["priority"].is_string());
    }

    #[tokio::test]
    async fn analyze_can_return_nested_view() {
        let state = state_with(StaticFetcher::new(SAMPLE_PAGE));
        let Json(body) = analyze_handler(
            State(state),
            Query(ViewQuery {
                view: Some("nested".to_string()),
            }),
            request(Some("https://example.com/coffee")),
        )
        .await
        .expect("analysis should succeed");

        assert_eq!(body["signals"]["schema"]["faq_present"], true);
        assert!(body.get("faq_schema_present").is_none());
    }

    #[tokio::test]
    async fn missing_url_is_a_bad_request() {
        let state = state_with(StaticFetcher::new(SAMPLE_PAGE));
        let (status, Json(body)) =
            analyze_handler(State(state), Query(ViewQuery::default()), request(None))
                .await
                .expect_err("missing url should fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "URL is required");
    }

    #[tokio::test]
    async fn fetch_failure_is_a_server_error() {
        let state = state_with(FailingFetcher { status: 404 });
        let (status, Json(body)) = analyze_handler(
            State(state),
            Query(ViewQuery::default()),
            request(Some("https://example.com/missing")),
        )
        .await
        .expect_err("fetch should fail");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("HTTP 404"));
    }

    #[tokio::test]
    async fn responses_allow_cross_origin_callers() {
        use axum::body::Body;
        use axum::http::{header, Method, Request};
        use tower::ServiceExt;

        let app = router(state_with(StaticFetcher::new(SAMPLE_PAGE)));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/health")
                    .header(header::ORIGIN, "https://dashboard.example.com")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn preflight_for_analyze_is_accepted() {
        use axum::body::Body;
        use axum::http::{header, Method, Request};
        use tower::ServiceExt;

        let app = router(state_with(StaticFetcher::new(SAMPLE_PAGE)));
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/aeo-analyze")
                    .header(header::ORIGIN, "https://dashboard.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");

        assert!(response.status().is_success());
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}

//! Inbound REST endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::PipelineError;
use crate::pipeline::{BookingRequest, ForwardingPipeline};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ForwardingPipeline>,
}

/// Build the relay router.
pub fn relay_routes(pipeline: Arc<ForwardingPipeline>) -> Router {
    let state = AppState { pipeline };

    Router::new()
        .route("/forward-booking", post(forward_booking))
        // Path used by the booking web form.
        .route("/create-workflow", post(forward_booking))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ── Forwarding ──────────────────────────────────────────────────────────

/// POST /forward-booking
///
/// Runs the full pipeline. On success returns the aggregate outcome; on
/// failure returns `{"detail": ...}` with the failing stage's status.
async fn forward_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Rejected booking payload");
            return detail_response(rejection.status(), rejection.body_text());
        }
    };

    match state.pipeline.forward(&request).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        detail_response(self.status_code(), self.to_string())
    }
}

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::RelayConfig;

    fn router() -> Router {
        let pipeline = ForwardingPipeline::new(RelayConfig::new("sk-test")).unwrap();
        relay_routes(Arc::new(pipeline))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn missing_field_is_rejected_with_detail() {
        let response = router()
            .oneshot(
                Request::post("/forward-booking")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"subaccountToken":"t1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["detail"].as_str().unwrap().contains("subaccountLocationId"));
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let response = router()
            .oneshot(
                Request::post("/forward-booking")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn pipeline_error_renders_detail_body() {
        let response = PipelineError::UpstreamStatusError {
            status: 503,
            body: serde_json::json!({"error": "down"}),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(
            json["detail"],
            r#"Webhook returned error status: 503. Response: {"error":"down"}"#
        );
    }
}

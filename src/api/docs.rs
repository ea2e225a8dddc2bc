//! 文档生成 API 端点

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::models::{DocRequest, DocResponse};
use crate::state::AppState;

/// 请求体上限（10 MiB）
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// 创建文档生成路由
pub fn docs_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/generate-docs", post(generate_docs))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// 生成文档
async fn generate_docs(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DocRequest>, JsonRejection>,
) -> AppResult<Json<DocResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate-docs body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    })?;

    let documentation = state.docs.generate_docs(&request).await?;
    Ok(Json(DocResponse::success(documentation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_api_routes;
    use crate::config::AppConfig;
    use crate::llm::stub::StubGenerator;
    use crate::llm::{GeminiClient, TextGenerator};
    use crate::services::{GENERATION_FAILED_MESSAGE, MISSING_CODE_MESSAGE};
    use crate::state::create_shared_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(generator: Arc<dyn TextGenerator>) -> Router {
        create_api_routes(create_shared_state(generator))
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-docs")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn as_json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_stub_docs_example() {
        let stub = Arc::new(StubGenerator::echo("# Stub Docs"));
        let body = json!({"code": "function add(a,b){return a+b;}", "language": "javascript"});

        let (status, bytes) = send(app(stub.clone()), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(as_json(&bytes), json!({"success": true, "documentation": "# Stub Docs"}));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_or_empty_code_is_400() {
        let bodies = [
            json!({}),
            json!({"language": "python"}),
            json!({"code": ""}),
            json!({"code": "", "language": "rust"}),
            json!({"code": null, "language": "go"}),
        ];

        for body in bodies {
            let stub = Arc::new(StubGenerator::echo("unused"));
            let (status, bytes) = send(app(stub.clone()), post_json(body.to_string())).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(
                as_json(&bytes),
                json!({"success": false, "error": MISSING_CODE_MESSAGE})
            );
            assert_eq!(stub.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_details() {
        let stub = Arc::new(StubGenerator::failing(
            429,
            "Resource has been exhausted (e.g. check quota).",
        ));
        let body = json!({"code": "print('hi')", "language": "python"});

        let (status, bytes) = send(app(stub), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            as_json(&bytes),
            json!({
                "success": false,
                "error": GENERATION_FAILED_MESSAGE,
                "details": "API error (429): Resource has been exhausted (e.g. check quota)."
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_500_with_details() {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:1".to_string(),
            ..AppConfig::default()
        };
        let client = Arc::new(GeminiClient::new(&config).unwrap());
        let body = json!({"code": "fn main() {}", "language": "rust"});

        let (status, bytes) = send(app(client), post_json(body.to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value = as_json(&bytes);
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"], json!(GENERATION_FAILED_MESSAGE));
        assert!(value.get("documentation").is_none());
        let details = value["details"].as_str().unwrap();
        assert!(details.starts_with("HTTP request failed: "), "details: {}", details);
    }

    #[tokio::test]
    async fn test_identical_requests_yield_identical_bytes() {
        let stub: Arc<dyn TextGenerator> = Arc::new(StubGenerator::echo("# Same\n\nText"));
        let body = json!({"code": "int main() { return 0; }", "language": "c"}).to_string();

        let (first_status, first) = send(app(stub.clone()), post_json(body.clone())).await;
        let (second_status, second) = send(app(stub), post_json(body)).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(first_status, second_status);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let stub = Arc::new(StubGenerator::echo("unused"));
        let (status, bytes) = send(app(stub.clone()), post_json("{not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(as_json(&bytes)["success"], json!(false));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_rejected() {
        let stub = Arc::new(StubGenerator::echo("unused"));
        let request = Request::builder()
            .method("POST")
            .uri("/api/generate-docs")
            .body(Body::from(r#"{"code":"x"}"#))
            .unwrap();

        let (status, bytes) = send(app(stub), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(as_json(&bytes)["success"], json!(false));
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let stub = Arc::new(StubGenerator::echo("unused"));
        let code = "a".repeat(MAX_BODY_BYTES + 1);
        let body = json!({"code": code}).to_string();

        let (status, _) = send(app(stub.clone()), post_json(body)).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_large_body_under_limit_is_accepted() {
        let stub = Arc::new(StubGenerator::echo("# Big"));
        let code = "x".repeat(3 * 1024 * 1024);
        let body = json!({"code": code}).to_string();

        let (status, _) = send(app(stub), post_json(body)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

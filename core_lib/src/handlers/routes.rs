//! Route table for the uploader service

use axum::{
    routing::{get, post},
    Router,
};

use super::{health, preview};
use crate::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handle_health))
        .route("/api/uploader/config", get(preview::handle_get_config))
        .route("/api/uploader/preview", post(preview::handle_preview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_routes().with_state(AppState::default())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn test_full_app_with_tracing_and_cors() {
        let app = crate::create_app(AppState::default());
        let request = Request::builder()
            .uri("/health")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );

        let body = body_json(response).await;
        assert_eq!(body["data"]["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn test_config_endpoint() {
        let request = Request::builder()
            .uri("/api/uploader/config")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["max_files"], json!(10));
        assert_eq!(body["data"]["max_file_size"], json!(16_777_216));
        assert_eq!(body["data"]["allowed_types"], json!([".pdf", ".docx"]));
    }

    #[tokio::test]
    async fn test_preview_endpoint() {
        let request = post_json(
            "/api/uploader/preview",
            json!({
                "options": { "maxFiles": 2, "maxFileSize": 1000, "allowedTypes": [".pdf"], "extra": true },
                "files": [
                    { "name": "a.pdf", "size": 500 },
                    { "name": "b.docx", "size": 500 },
                    { "name": "c.pdf", "size": 500 }
                ]
            }),
        );

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["data"]["handled"], json!(true));
        assert_eq!(body["data"]["staged"], json!(["a.pdf", "c.pdf"]));
        assert_eq!(
            body["data"]["errors"],
            json!(["File \"b.docx\" has invalid type. Allowed: .pdf"])
        );
    }

    #[tokio::test]
    async fn test_preview_escapes_markup() {
        let request = post_json(
            "/api/uploader/preview",
            json!({ "files": [{ "name": "<script>.pdf", "size": 1 }] }),
        );

        let response = app().oneshot(request).await.unwrap();
        let body = body_json(response).await;
        let html = body["data"]["list_html"].as_str().unwrap();
        assert!(html.contains("&lt;script&gt;.pdf"));
        assert!(!html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_preview_rejects_empty_file_name() {
        let request = post_json(
            "/api/uploader/preview",
            json!({ "files": [{ "name": "", "size": 1 }] }),
        );

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], json!(400));
    }
}

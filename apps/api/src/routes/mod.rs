pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contracts::handlers;
use crate::state::AppState;
use crate::static_files::handlers as static_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(static_handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route("/select", post(handlers::handle_select))
        .route("/generate", post(handlers::handle_generate))
        .route("/download", get(static_handlers::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::contracts::registry::{ContractRegistry, INVALID_SELECTION_MESSAGE};
    use crate::errors::MISSING_FILE_MESSAGE;
    use crate::llm_client::LlmError;
    use crate::static_files::DOCX_MIME;
    use crate::test_support::FakeGateway;

    fn test_config(download_path: PathBuf) -> Config {
        Config {
            openai_api_key: "sk-test".to_string(),
            openai_base_url: "http://127.0.0.1:9/v1".to_string(),
            llm_timeout_secs: 5,
            download_path,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn setup_test_app(llm: Arc<FakeGateway>, download_path: PathBuf) -> Router {
        build_router(AppState {
            registry: Arc::new(ContractRegistry::default()),
            llm,
            config: test_config(download_path),
        })
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_select_known_codes() {
        let app = setup_test_app(Arc::new(FakeGateway::default()), PathBuf::from("unused"));

        for (code, name) in [("1", "부동산임대차계약서"), ("2", "위임장"), ("3", "소장")] {
            let response = app
                .clone()
                .oneshot(post_json("/select", json!({ "selection": code })))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let json = read_json(response).await;
            assert_eq!(
                json["message"],
                format!("선택하신 계약서는 '{name}'입니다. 이어지는 계약서 예시 샘플을 확인해 주세요")
            );
        }
    }

    #[tokio::test]
    async fn test_select_unknown_code() {
        let app = setup_test_app(Arc::new(FakeGateway::default()), PathBuf::from("unused"));

        let response = app
            .oneshot(post_json("/select", json!({ "selection": "9" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "message": INVALID_SELECTION_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_generate_unknown_code_is_in_band_error() {
        let llm = Arc::new(FakeGateway::replying(["unused"]));
        let app = setup_test_app(llm.clone(), PathBuf::from("unused"));

        let response = app
            .oneshot(post_json("/generate", json!({ "selection": "7" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "error": INVALID_SELECTION_MESSAGE })
        );
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_without_fields_returns_template() {
        let llm = Arc::new(FakeGateway::replying(["위임장\n\n위임인: [위임인]"]));
        let app = setup_test_app(llm.clone(), PathBuf::from("unused"));

        let response = app
            .oneshot(post_json("/generate", json!({ "selection": "2" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "contract": "위임장\n\n위임인: [위임인]" })
        );
        assert_eq!(llm.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_with_fields_merges() {
        let llm = Arc::new(FakeGateway::replying(["위임인: [위임인]", "위임인: 김철수"]));
        let app = setup_test_app(llm.clone(), PathBuf::from("unused"));

        let response = app
            .oneshot(post_json(
                "/generate",
                json!({ "selection": "2", "extracted_fields": { "위임인": "김철수" } }),
            ))
            .await
            .unwrap();

        assert_eq!(
            read_json(response).await,
            json!({ "contract": "위임인: 김철수" })
        );
        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].user.contains("위임인: [위임인]"));
    }

    #[tokio::test]
    async fn test_generate_accepts_non_string_field_values() {
        let llm = Arc::new(FakeGateway::replying(["보증금: [보증금]", "보증금: 1000"]));
        let app = setup_test_app(llm.clone(), PathBuf::from("unused"));

        let response = app
            .oneshot(post_json(
                "/generate",
                json!({ "selection": "1", "extracted_fields": { "보증금": 1000, "월세": null } }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "contract": "보증금: 1000" })
        );
        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].user.contains(r#"{"보증금":1000,"월세":null}"#));
    }

    #[tokio::test]
    async fn test_generate_upstream_failure_is_in_band_error() {
        let llm = Arc::new(FakeGateway::new([Err(LlmError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        })]));
        let app = setup_test_app(llm, PathBuf::from("unused"));

        let response = app
            .oneshot(post_json("/generate", json!({ "selection": "1" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert!(json.get("contract").is_none());
        assert_eq!(
            json["error"],
            "OpenAI API 호출 실패: API error (status 429): Rate limit reached"
        );
    }

    #[tokio::test]
    async fn test_download_serves_saved_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("completed_contract.docx");
        std::fs::write(&path, b"PK\x03\x04docx-bytes").unwrap();
        let app = setup_test_app(Arc::new(FakeGateway::default()), path);

        let response = app
            .oneshot(Request::builder().uri("/download").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], DOCX_MIME);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"completed_contract.docx\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"PK\x03\x04docx-bytes");
    }

    #[tokio::test]
    async fn test_download_without_file_is_in_band_error() {
        let dir = tempdir().unwrap();
        let app = setup_test_app(
            Arc::new(FakeGateway::default()),
            dir.path().join("completed_contract.docx"),
        );

        let response = app
            .oneshot(Request::builder().uri("/download").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await,
            json!({ "error": MISSING_FILE_MESSAGE })
        );
    }

    #[tokio::test]
    async fn test_index_serves_front_end() {
        let app = setup_test_app(Arc::new(FakeGateway::default()), PathBuf::from("unused"));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/generate"));
    }

    #[tokio::test]
    async fn test_health() {
        let app = setup_test_app(Arc::new(FakeGateway::default()), PathBuf::from("unused"));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(read_json(response).await["status"], "ok");
    }
}

//! HTTP contract tests for the note generation and model listing endpoints.
//!
//! The router is driven in-process with `oneshot`; the provider is a mock.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use notes_service::models::ModelInfo;
use notes_service::services::providers::mock::MockTextProvider;
use notes_service::services::providers::ProviderError;
use notes_service::startup::{build_router, AppState};
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

const REQUIRED_MESSAGE: &str = "Subject, grade level, and topic are required.";

fn app(provider: Arc<MockTextProvider>) -> Router {
    build_router(AppState::new(provider))
}

fn post_notes(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate-notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn valid_body() -> Value {
    json!({"subject": "Math", "gradeLevel": "5th grade", "topic": "fractions"})
}

#[tokio::test]
async fn generated_notes_are_trimmed() {
    let provider = Arc::new(MockTextProvider::replying("  Foo bar.  "));

    let (status, body) = send(app(provider.clone()), post_notes(valid_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"notes": "Foo bar."}));
    assert_eq!(provider.generate_calls(), 1);
}

#[tokio::test]
async fn missing_or_empty_fields_are_rejected_before_the_provider() {
    let cases = [
        json!({}),
        json!({"gradeLevel": "5th grade", "topic": "fractions"}),
        json!({"subject": "Math", "topic": "fractions"}),
        json!({"subject": "Math", "gradeLevel": "5th grade"}),
        json!({"subject": "", "gradeLevel": "5th grade", "topic": "fractions"}),
        json!({"subject": "Math", "gradeLevel": "", "topic": "fractions"}),
        json!({"subject": "Math", "gradeLevel": "5th grade", "topic": ""}),
        json!({"subject": null, "gradeLevel": "5th grade", "topic": "fractions"}),
        json!({"subject": "", "gradeLevel": "", "topic": ""}),
    ];

    for case in cases {
        let provider = Arc::new(MockTextProvider::replying("unused"));

        let (status, body) = send(app(provider.clone()), post_notes(case.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "case: {case}");
        assert_eq!(body, json!({"error": REQUIRED_MESSAGE}), "case: {case}");
        assert_eq!(provider.generate_calls(), 0, "case: {case}");
    }
}

#[tokio::test]
async fn unreadable_bodies_are_validation_errors() {
    let provider = Arc::new(MockTextProvider::replying("unused"));

    let not_json = Request::builder()
        .method("POST")
        .uri("/generate-notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("subject=Math"))
        .unwrap();
    let no_content_type = Request::builder()
        .method("POST")
        .uri("/generate-notes")
        .body(Body::from(valid_body().to_string()))
        .unwrap();
    let wrong_types = post_notes(json!({"subject": 5, "gradeLevel": true, "topic": []}));

    for request in [not_json, no_content_type, wrong_types] {
        let (status, body) = send(app(provider.clone()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], REQUIRED_MESSAGE);
    }

    assert_eq!(provider.generate_calls(), 0);
}

#[tokio::test]
async fn provider_diagnostic_text_maps_to_gemini_api_error() {
    let provider = Arc::new(MockTextProvider::failing(ProviderError::Blocked {
        reason: "SAFETY".to_string(),
        diagnostic: Some("blocked".to_string()),
    }));

    let (status, body) = send(app(provider), post_notes(valid_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Gemini API Error"}));
}

#[tokio::test]
async fn plain_provider_failures_map_to_generic_error() {
    let failures = [
        ProviderError::NetworkError("connection refused".to_string()),
        ProviderError::RateLimited,
        ProviderError::ApiError {
            status: 400,
            message: "API key not valid".to_string(),
        },
        ProviderError::MalformedResponse("Response contained no candidates".to_string()),
        ProviderError::Blocked {
            reason: "SAFETY".to_string(),
            diagnostic: None,
        },
    ];

    for failure in failures {
        let provider = Arc::new(MockTextProvider::failing(failure.clone()));

        let (status, body) = send(app(provider), post_notes(valid_body())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{failure:?}");
        assert_eq!(body, json!({"error": "Failed to generate notes."}), "{failure:?}");
    }
}

#[tokio::test]
async fn repeated_requests_get_identical_responses() {
    let provider = Arc::new(MockTextProvider::replying("Fractions are parts of a whole.\n"));
    let router = app(provider.clone());

    let first = send(router.clone(), post_notes(valid_body())).await;
    let second = send(router, post_notes(valid_body())).await;

    assert_eq!(first, second);
    assert_eq!(first.0, StatusCode::OK);
    assert_eq!(provider.generate_calls(), 2);
}

#[tokio::test]
async fn list_models_returns_provider_catalog() {
    let model = ModelInfo {
        name: "models/gemini-1.5-flash".to_string(),
        display_name: Some("Gemini 1.5 Flash".to_string()),
        description: None,
        input_token_limit: Some(1_048_576),
        output_token_limit: Some(8192),
        supported_generation_methods: vec!["generateContent".to_string()],
    };
    let provider = Arc::new(MockTextProvider::replying("unused").with_models(vec![model]));

    let request = Request::builder()
        .uri("/list-models")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(provider.clone()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["models"][0]["name"], "models/gemini-1.5-flash");
    assert_eq!(body["models"][0]["displayName"], "Gemini 1.5 Flash");
    assert_eq!(body["models"][0]["outputTokenLimit"], 8192);
    assert_eq!(provider.list_calls(), 1);
    assert_eq!(provider.generate_calls(), 0);
}

#[tokio::test]
async fn list_models_failure_is_generic() {
    let provider = Arc::new(
        MockTextProvider::replying("unused")
            .with_model_list_error(ProviderError::NetworkError("dns failure".to_string())),
    );

    let request = Request::builder()
        .uri("/list-models")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(provider), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to list models."}));
}

#[tokio::test]
async fn index_page_is_served_at_root() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let state = AppState::new(provider)
        .with_index_path(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));

    let response = build_router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("/generate-notes"));
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let provider = Arc::new(MockTextProvider::replying("notes"));

    let mut request = post_notes(valid_body());
    request
        .headers_mut()
        .insert("x-request-id", "req-42".parse().unwrap());
    let response = app(provider).oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

// ============================================================================
// Log capture
// ============================================================================

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn provider_diagnostic_text_is_logged() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let provider = Arc::new(MockTextProvider::failing(ProviderError::Blocked {
        reason: "SAFETY".to_string(),
        diagnostic: Some("blocked".to_string()),
    }));

    let (status, _) = send(app(provider), post_notes(valid_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let output = logs.contents();
    assert!(output.contains("Gemini API error"), "logs: {output}");
    assert!(output.contains("diagnostic=blocked"), "logs: {output}");
}

//! Client behavior against an in-process fake backend.

use std::sync::mpsc;
use std::thread;

use pretty_assertions::assert_eq;
use verity_client::{BackendClient, ClientError, ImageUpload};
use verity_config::ApiConfig;
use verity_core::Verdict;

const ANALYSIS_BODY: &str = r#"{
    "id": "3f1c2a9e-7b4d-4e8a-9c0f-1d2e3f4a5b6c",
    "score": 66.7,
    "summaryVerdict": "Mixed credibility: 2 of 3 claims are supported.",
    "claims": [
        {
            "id": "c1-a1b2c3d4",
            "text": "The Eiffel Tower is in Paris.",
            "verdict": "TRUE",
            "explanation": "Widely documented.",
            "sources": [{"domain": "wikipedia.org", "title": "Eiffel Tower", "url": "https://en.wikipedia.org/wiki/Eiffel_Tower"}]
        }
    ],
    "searchQueries": ["eiffel tower location"],
    "timestamp": "2024-06-01T12:30:45.123456Z",
    "inputPreview": "The Eiffel Tower is in Paris..."
}"#;

struct Captured {
    method: String,
    url: String,
    content_type: String,
    request_id: Option<String>,
    body: Vec<u8>,
}

/// Serve one request with `status`/`body`, reporting what was received.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let header = |name: &'static str| {
            request
                .headers()
                .iter()
                .find(|h| h.field.equiv(name))
                .map(|h| h.value.as_str().to_string())
        };
        let request_id = header("X-Request-ID");
        let content_type = header("Content-Type").unwrap_or_default();
        let mut captured_body = Vec::new();
        request.as_reader().read_to_end(&mut captured_body).unwrap();

        let mut response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
            );
        if let Some(id) = &request_id {
            response = response
                .with_header(tiny_http::Header::from_bytes("X-Request-ID", id.as_bytes()).unwrap());
        }

        tx.send(Captured {
            method: request.method().to_string(),
            url: request.url().to_string(),
            content_type,
            request_id,
            body: captured_body,
        })
        .unwrap();
        request.respond(response).unwrap();
    });

    (format!("http://127.0.0.1:{port}"), rx)
}

fn client(base_url: &str) -> BackendClient {
    BackendClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(10),
    })
    .unwrap()
}

#[tokio::test]
async fn analyze_text_posts_json_and_parses_result() {
    let (base, rx) = serve_once(200, ANALYSIS_BODY);
    let text = "The Eiffel Tower is in Paris. It was completed in 1889 for the World's Fair.";

    let result = client(&base).analyze_text(text).await.unwrap();

    assert_eq!(result.score.get(), 67);
    assert_eq!(result.claims[0].verdict, Verdict::True);
    assert_eq!(result.search_queries, ["eiffel tower location"]);

    let captured = rx.recv().unwrap();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.url, "/analyze-text");
    assert!(captured.content_type.starts_with("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    assert_eq!(body, serde_json::json!({ "text": text }));
    let id = captured.request_id.expect("request id header sent");
    assert_eq!(id.len(), 32);
}

#[tokio::test]
async fn analyze_image_posts_multipart_file_field() {
    let (base, rx) = serve_once(200, ANALYSIS_BODY);
    let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
    let upload = ImageUpload::new("tweet.jpg", jpeg).unwrap();

    let result = client(&base).analyze_image(upload).await.unwrap();
    assert_eq!(result.id, "3f1c2a9e-7b4d-4e8a-9c0f-1d2e3f4a5b6c");

    let captured = rx.recv().unwrap();
    assert_eq!(captured.url, "/analyze-image");
    assert!(captured.content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&captured.body);
    assert!(body.contains(r#"name="file""#), "{body}");
    assert!(body.contains(r#"filename="tweet.jpg""#));
    assert!(body.contains("Content-Type: image/jpeg"));
}

#[tokio::test]
async fn server_error_surfaces_detail() {
    let (base, _rx) = serve_once(500, r#"{"detail":"Analysis failed: upstream model timeout"}"#);
    let err = client(&base).analyze_text(&"a".repeat(80)).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(err.user_message(), "Analysis failed: upstream model timeout");
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let (base, _rx) = serve_once(200, r#"{"id":"x","score":"high"}"#);
    let err = client(&base).analyze_text(&"a".repeat(80)).await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn health_reads_status() {
    let (base, rx) = serve_once(
        200,
        r#"{"message":"AI-Powered Fact Checker API is running","version":"1.0.0","status":"healthy"}"#,
    );
    let health = client(&base).health().await.unwrap();
    assert!(health.is_healthy());
    assert_eq!(health.version, "1.0.0");

    let captured = rx.recv().unwrap();
    assert_eq!(captured.method, "GET");
    assert_eq!(captured.url, "/");
}

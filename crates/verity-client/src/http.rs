//! Shared HTTP response helpers.
//!
//! The backend reports failures as `{"detail": ...}`, where `detail` is a
//! string for handled errors and a list of `{loc, msg, type}` objects for
//! request validation failures (422). Non-success responses become
//! [`ClientError::Api`] carrying the most readable message available.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;

/// Header used to correlate client and server logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string()),
    })
}

/// Read a success body as JSON, reporting shape mismatches as [`ClientError::Parse`].
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Extract a human-readable message from an error body.
///
/// Falls back to the raw body when it is not a `detail` envelope, and to
/// `None` when the body is blank.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    match detail {
        Some(Value::String(message)) if !message.trim().is_empty() => Some(message),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Some(body.to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        _ => Some(body.to_string()),
    }
}

/// Random 16-byte hex identifier for the `X-Request-ID` header.
///
/// Returns `None` if the OS RNG is unavailable; the request is sent without
/// the header in that case.
pub fn request_id() -> Option<String> {
    let mut bytes = [0u8; 16];
    match getrandom::fill(&mut bytes) {
        Ok(()) => Some(bytes.iter().map(|b| format!("{b:02x}")).collect()),
        Err(error) => {
            tracing::warn!(%error, "failed to generate request id");
            None
        }
    }
}

/// The request id the server echoed back, if any.
pub fn echoed_request_id(resp: &reqwest::Response) -> Option<&str> {
    resp.headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn string_detail_becomes_message() {
        let resp = mock_response(429, r#"{"detail":"Daily quota exceeded. Try again tomorrow."}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api { status: 429, ref message } if message == "Daily quota exceeded. Try again tomorrow."
        ));
        assert_eq!(err.user_message(), "Daily quota exceeded. Try again tomorrow.");
    }

    #[tokio::test]
    async fn validation_detail_joins_messages() {
        let resp = mock_response(
            422,
            r#"{"detail":[{"loc":["body","text"],"msg":"field required","type":"value_error.missing"},{"loc":["body"],"msg":"extra fields not permitted","type":"x"}]}"#,
        );
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(
            err.user_message(),
            "field required; extra fields not permitted"
        );
    }

    #[tokio::test]
    async fn plain_body_is_kept() {
        let resp = mock_response(502, "Bad Gateway from proxy");
        let err = check_response(resp).await.unwrap_err();
        assert_eq!(err.user_message(), "Bad Gateway from proxy");
    }

    #[tokio::test]
    async fn empty_body_falls_back_to_reason() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert_eq!(err.user_message(), "Internal Server Error");
    }

    #[tokio::test]
    async fn read_json_reports_shape_errors_as_parse() {
        let resp = mock_response(200, r#"{"unexpected":true}"#);
        let err = read_json::<verity_core::AnalysisResult>(resp)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn request_ids_are_hex_and_distinct() {
        let a = request_id().unwrap();
        let b = request_id().unwrap();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn echoed_header_is_read() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .header("X-Request-ID", "abc123")
                .body("")
                .unwrap(),
        );
        assert_eq!(echoed_request_id(&resp), Some("abc123"));
    }
}

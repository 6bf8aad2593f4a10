//! reqwest-backed client for the analysis service.

use std::future::Future;

use verity_config::ApiConfig;
use verity_core::AnalysisResult;
use verity_core::responses::HealthStatus;

use crate::backend::AnalysisBackend;
use crate::error::ClientError;
use crate::http::{REQUEST_ID_HEADER, check_response, echoed_request_id, read_json, request_id};
use crate::upload::ImageUpload;

#[derive(serde::Serialize)]
struct AnalyzeTextRequest<'a> {
    text: &'a str,
}

/// HTTP client for the analysis backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL does not parse,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.base().to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("verity/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /analyze-text` with `{"text": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not an analysis result.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        let request = self
            .http
            .post(self.url("/analyze-text"))
            .json(&AnalyzeTextRequest { text });
        let result: AnalysisResult = self.send("analyze-text", request).await?;
        tracing::info!(id = %result.id, score = %result.score, claims = result.claims.len(), "text analysis complete");
        Ok(result)
    }

    /// `POST /analyze-image` as multipart with a single `file` field.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the body is not an analysis result.
    pub async fn analyze_image(&self, upload: ImageUpload) -> Result<AnalysisResult, ClientError> {
        tracing::debug!(
            filename = upload.filename(),
            bytes = upload.len(),
            mime = upload.kind().mime_type(),
            "uploading image"
        );
        let form = reqwest::multipart::Form::new().part("file", upload.into_part()?);
        let request = self.http.post(self.url("/analyze-image")).multipart(form);
        let result: AnalysisResult = self.send("analyze-image", request).await?;
        tracing::info!(id = %result.id, score = %result.score, claims = result.claims.len(), "image analysis complete");
        Ok(result)
    }

    /// `GET /`: service name, version and status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.send("health", self.http.get(self.url("/"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &'static str,
        mut request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let id = request_id();
        if let Some(id) = &id {
            request = request.header(REQUEST_ID_HEADER, id);
        }
        tracing::debug!(endpoint, request_id = id.as_deref().unwrap_or("-"), "dispatching request");

        let resp = request.send().await.inspect_err(|error| {
            tracing::warn!(endpoint, %error, "request failed");
        })?;
        tracing::debug!(
            endpoint,
            status = resp.status().as_u16(),
            server_request_id = echoed_request_id(&resp).unwrap_or("-"),
            "response received"
        );
        read_json(check_response(resp).await?).await
    }
}

impl AnalysisBackend for BackendClient {
    fn analyze_text(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalysisResult, ClientError>> + Send {
        Self::analyze_text(self, text)
    }

    fn analyze_image(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<AnalysisResult, ClientError>> + Send {
        Self::analyze_image(self, upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = BackendClient::new(&config("http://localhost:8000/")).unwrap();
        assert_eq!(client.url("/analyze-text"), "http://localhost:8000/analyze-text");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = BackendClient::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(AnalyzeTextRequest { text: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "hello" }));
    }

    #[tokio::test]
    async fn unreachable_backend_is_http_error() {
        let client = BackendClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            timeout_secs: Some(5),
        })
        .unwrap();
        let err = client.analyze_text("x".repeat(60).as_str()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    #[ignore] // requires a running backend on localhost:8000
    async fn live_health() {
        let client = BackendClient::new(&ApiConfig::default()).unwrap();
        let health = client.health().await.unwrap();
        println!("{} v{} ({})", health.message, health.version, health.status);
        assert!(health.is_healthy());
    }
}

//! # verity-client
//!
//! HTTP client for the Verity analysis backend.
//!
//! Endpoints:
//! - `POST /analyze-text`: JSON `{"text": ...}`
//! - `POST /analyze-image`: multipart, single `file` field (PNG or JPEG)
//! - `GET /`: health
//!
//! Both analysis endpoints answer with an [`verity_core::AnalysisResult`].
//! Every request carries a random `X-Request-ID` header which is logged
//! alongside the id the server echoes back.

mod backend;
mod client;
mod error;
mod http;
mod upload;

pub use backend::AnalysisBackend;
pub use client::BackendClient;
pub use error::ClientError;
pub use http::REQUEST_ID_HEADER;
pub use upload::ImageUpload;

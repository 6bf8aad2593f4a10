//! The seam between the session and the network.

use std::future::Future;

use verity_core::AnalysisResult;

use crate::error::ClientError;
use crate::upload::ImageUpload;

/// Something that can turn user input into an [`AnalysisResult`].
///
/// [`crate::BackendClient`] is the production implementation; tests supply
/// in-process fakes.
pub trait AnalysisBackend: Send + Sync {
    /// Analyze a block of text.
    fn analyze_text(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<AnalysisResult, ClientError>> + Send;

    /// Analyze an uploaded screenshot or photo.
    fn analyze_image(
        &self,
        upload: ImageUpload,
    ) -> impl Future<Output = Result<AnalysisResult, ClientError>> + Send;
}

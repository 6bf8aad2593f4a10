//! Share URLs of the form `<origin><path>?result=<token>`.

use verity_core::AnalysisResult;

use crate::codec;
use crate::error::EncodeError;

/// Query parameter carrying the token.
pub const SHARE_PARAM: &str = "result";

/// Build a share URL for `result` on `page_url`.
///
/// Any query string or fragment already on `page_url` is dropped.
///
/// # Errors
///
/// Returns [`EncodeError`] if the result cannot be encoded.
pub fn share_url(page_url: &str, result: &AnalysisResult) -> Result<String, EncodeError> {
    let token = codec::encode(result)?;
    Ok(format!("{}?{SHARE_PARAM}={token}", page_base(page_url)))
}

/// `page_url` without query string or fragment.
#[must_use]
pub fn page_base(page_url: &str) -> &str {
    let trimmed = page_url.trim();
    let end = trimmed.find(['?', '#']).unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Extract the share token from a URL, if it carries one.
///
/// Returns `None` when the URL has no query string or no non-empty `result`
/// parameter. The value is percent-decoded; a `+` is kept as-is since it is a
/// base64 character, not a form-encoded space.
#[must_use]
pub fn token_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.trim().split_once('?')?;
    let query = rest.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .and_then(|(_, value)| match urlencoding::decode(value) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(error) => {
                tracing::warn!(%error, "share parameter is not valid UTF-8");
                None
            }
        })
        .filter(|token| !token.is_empty())
}

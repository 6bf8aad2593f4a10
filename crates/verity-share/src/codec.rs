//! Token codec: `base64(percent-encode(JSON))`.
//!
//! The JSON is the result object plus a format tag `"v"`. Tokens minted
//! before the tag existed carry no `"v"` and are read as version 1.
//!
//! Encoding emits the URL-safe base64 alphabet without padding. Decoding also
//! accepts the standard alphabet with padding (browser `btoa` output), and a
//! space where a `+` was form-decoded away.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde::de::Error as _;
use serde_json::Value;
use verity_core::AnalysisResult;

use crate::error::{DecodeError, EncodeError};

/// Format tag written into every new token.
pub const CODEC_VERSION: u64 = 1;

const VERSION_FIELD: &str = "v";

#[derive(Serialize)]
struct Envelope<'a> {
    v: u64,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

/// Encode a result as a query-parameter-safe token.
///
/// # Errors
///
/// Returns [`EncodeError::Serialize`] if the result cannot be serialized.
pub fn encode(result: &AnalysisResult) -> Result<String, EncodeError> {
    let json = serde_json::to_string(&Envelope {
        v: CODEC_VERSION,
        result,
    })?;
    let escaped = urlencoding::encode(&json);
    Ok(URL_SAFE_NO_PAD.encode(escaped.as_bytes()))
}

/// Decode a token produced by [`encode`] or by the legacy browser client.
///
/// # Errors
///
/// Returns the [`DecodeError`] of the first stage that fails: base64,
/// UTF-8, percent-decoding, JSON syntax, version tag, or result shape.
pub fn decode(token: &str) -> Result<AnalysisResult, DecodeError> {
    let normalized = normalize_alphabet(token);
    if normalized.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let escaped = String::from_utf8(bytes).map_err(|_| DecodeError::Utf8 { stage: "base64" })?;
    let json = percent_decode(&escaped)?;

    let mut value: Value = serde_json::from_str(&json).map_err(DecodeError::Json)?;
    check_version(&mut value)?;
    serde_json::from_value(value).map_err(DecodeError::Shape)
}

/// Map either base64 alphabet onto the URL-safe one and drop padding.
fn normalize_alphabet(token: &str) -> String {
    token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|ch| match ch {
            '+' | ' ' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Strict percent-decoding: every `%` must start a two-hex-digit escape.
fn percent_decode(escaped: &str) -> Result<String, DecodeError> {
    let bytes = escaped.as_bytes();
    let mut offset = 0;
    while offset < bytes.len() {
        if bytes[offset] == b'%' {
            let well_formed = bytes
                .get(offset + 1..offset + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(DecodeError::PercentEscape { offset });
            }
            offset += 3;
        } else {
            offset += 1;
        }
    }

    urlencoding::decode(escaped)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| DecodeError::Utf8 {
            stage: "percent-decoding",
        })
}

/// Strip the format tag, rejecting versions this build cannot read.
fn check_version(value: &mut Value) -> Result<(), DecodeError> {
    let Some(object) = value.as_object_mut() else {
        return Err(DecodeError::Shape(serde_json::Error::custom(
            "expected a JSON object",
        )));
    };

    match object.remove(VERSION_FIELD) {
        None => {
            tracing::debug!("untagged share token; reading as v1");
            Ok(())
        }
        Some(tag) => match tag.as_u64() {
            Some(found) if (1..=CODEC_VERSION).contains(&found) => Ok(()),
            Some(found) => Err(DecodeError::UnsupportedVersion {
                found,
                supported: CODEC_VERSION,
            }),
            None => Err(DecodeError::Shape(serde_json::Error::custom(format!(
                "format tag must be a positive integer, got {tag}"
            )))),
        },
    }
}

use thiserror::Error;

/// Failure modes of payload decoding. Scoped to one chart: a rejected
/// payload aborts that chart's setup and nothing else.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

use thiserror::Error;

/// Failures surfaced by the feed fetcher and post uploader.
///
/// Every error is propagated to the caller as one of these variants;
/// nothing is swallowed beyond diagnostic logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Any non-2xx HTTP response. The body is kept for diagnostics when
    /// it could be decoded as text.
    #[error("server returned status {status}")]
    Server { status: u16, body: Option<String> },

    /// Response body did not match the expected JSON schema.
    #[error("failed to decode response: {0}")]
    Decoding(#[from] serde_json::Error),

    /// Local image could not be re-encoded as JPEG. Raised before any
    /// network call is made.
    #[error("failed to encode image: {0}")]
    MediaEncoding(String),

    /// Local video asset could not be read. Raised before any network
    /// call is made.
    #[error("failed to read video asset: {0}")]
    MediaRead(#[from] std::io::Error),
}

impl ApiError {
    /// Status code for server errors, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Transport helpers shared by the reqwest-backed adapters.

use std::time::Duration;

use reqwest::{Client, Url};

/// Failure building an outbound HTTP adapter at startup.
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterBuildError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The configured endpoint cannot carry a path.
    #[error("endpoint `{0}` cannot be used as a base URL")]
    Endpoint(String),
}

/// Build a client with a whole-request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, HttpAdapterBuildError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Append one path segment to `base`, keeping any existing path prefix.
///
/// `http://host:8000` and `http://host:8000/` both become
/// `http://host:8000/customers`; `http://host/kyc` becomes `http://host/kyc/customers`.
pub(crate) fn append_segment(base: &Url, segment: &str) -> Result<Url, HttpAdapterBuildError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| HttpAdapterBuildError::Endpoint(base.to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Single-line, length-capped preview of a response body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

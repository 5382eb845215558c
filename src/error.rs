use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// Upper bound on how much of a non-2xx response body is read when
/// building an [`ApiError`].
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Error body returned by the Zscaler management APIs.
///
/// ZIA-family services answer with `{"code": "...", "message": "..."}`
/// while ZPA answers with `{"id": "...", "reason": "..."}`; both shapes
/// deserialize into this struct.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiError {
    pub status: i32,
    pub code: Option<String>,
    pub message: Option<String>,
    pub id: Option<String>,
    pub reason: Option<String>,
}

impl ApiError {
    fn detail(&self) -> Option<&str> {
        self.message.as_deref().or(self.reason.as_deref())
    }

    fn label(&self) -> Option<&str> {
        self.code.as_deref().or(self.id.as_deref())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.label(), self.detail()) {
            (Some(label), Some(detail)) => {
                write!(f, "status={}, code={}, message={}", self.status, label, detail)
            }
            (Some(label), None) => write!(f, "status={}, code={}", self.status, label),
            (None, Some(detail)) => write!(f, "status={}, message={}", self.status, detail),
            (None, None) => write!(f, "status={}", self.status),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("zscaler api error: {0}")]
    Api(ApiError),
}

/// Reads at most `limit` bytes of a blocking response body.
pub(crate) fn read_body_with_limit(
    resp: &mut reqwest::blocking::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    resp.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Async counterpart of [`read_body_with_limit`]. Reads the body chunk by
/// chunk and stops at the cap rather than buffering the whole stream.
#[cfg(feature = "async-client")]
pub(crate) async fn read_body_with_limit_async(
    mut resp: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        let room = limit - buf.len();
        if chunk.len() >= room {
            buf.extend_from_slice(&chunk[..room]);
            break;
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

pub(crate) fn fallback_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("http status {status}")
    } else {
        format!("http status {status}: {text}")
    }
}

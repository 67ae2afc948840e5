//! Transport failures.

use std::path::PathBuf;

use thiserror::Error;

/// Why a request to the backend did not produce a usable response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server refused the bearer token (401/403).
    #[error("unauthorized: {detail}")]
    Unauthorized { detail: String },

    /// Any other non-2xx status.
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// A 2xx response whose body is not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Classify a non-2xx response.
    ///
    /// The backend reports failures as `{"detail": ...}` where `detail` is a
    /// string or, for request validation errors, an array of objects. Bodies
    /// that are not in that shape are kept verbatim.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 | 403 => Self::Unauthorized { detail },
            _ => Self::Status { status, detail },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

fn extract_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.trim().to_string();
    };
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => body.trim().to_string(),
    }
}

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    /// The server answered, but with a non-200 status or `success: false`.
    #[error("API rejected the request (HTTP {status})")]
    Protocol { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is missing expected field: {0}")]
    MissingField(&'static str),

    #[error("invalid base URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SmokeError {
    /// Protocol failures carry the raw response body; everything else
    /// (network, timeout, decode, missing field) counts as transport-kind.
    pub fn is_protocol(&self) -> bool {
        matches!(self, SmokeError::Protocol { .. })
    }

    /// Diagnostic payload attached to a FAIL record. The raw body is kept
    /// as structured JSON when it parses, raw text otherwise.
    pub fn diagnostic(&self) -> Value {
        match self {
            SmokeError::Protocol { body, .. } => {
                serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.clone()))
            }
            other => Value::String(other.to_string()),
        }
    }
}

/// Result type for the winzo-smoke crate
pub type Result<T> = std::result::Result<T, SmokeError>;

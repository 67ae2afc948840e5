//! Wire types exchanged with the backend.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label the classifier assigns to one uploaded invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(String);

/// The only label rendered as an alert.
pub const FRAUDULENT: &str = "Fraudulent";

/// How a row is styled: alert (red) or normal (green).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Alert,
    Normal,
}

impl Classification {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    pub fn is_fraudulent(&self) -> bool {
        self.0 == FRAUDULENT
    }

    pub fn tone(&self) -> Tone {
        if self.is_fraudulent() {
            Tone::Alert
        } else {
            Tone::Normal
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful `POST /upload-invoice/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub classification: Vec<Classification>,
    #[serde(default)]
    pub message: String,
    /// Name of the uploaded file as the server saw it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Claim identifier; the service sends integers but strings are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Claim amount as extracted from the invoice. Usually a number, but the
/// extractor passes through whatever text it found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimAmount {
    /// Kept first so numeric-looking strings stay verbatim.
    Text(String),
    Number(Decimal),
}

impl fmt::Display for ClaimAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 10.00 renders as 10, the way the service's own numbers do
            Self::Number(n) => write!(f, "{}", n.normalize()),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<Decimal> for ClaimAmount {
    fn from(amount: Decimal) -> Self {
        Self::Number(amount)
    }
}

/// A processed medical claim. Read-only on the client.
///
/// Everything but the id comes from invoice extraction and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub id: ClaimId,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub amount: Option<ClaimAmount>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Opaque credential sent as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Body of `POST /token`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn into_bearer(self) -> BearerToken {
        BearerToken::new(self.access_token)
    }
}

/// Body of `GET /users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

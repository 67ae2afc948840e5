//! Endpoint configuration.
//!
//! The backend runs on a fixed local port; the invoice service answers on
//! `127.0.0.1` and the claims service on `localhost`. Both hosts can be
//! replaced as a whole with [`Endpoints::from_bases`].

use crate::claims::FailurePolicy;

/// Base URL of the invoice service (upload, token, identity).
pub const DEFAULT_INVOICE_API: &str = "http://127.0.0.1:8000";
/// Base URL of the claims service.
pub const DEFAULT_CLAIMS_API: &str = "http://localhost:8000";

/// Fully qualified URLs of every endpoint the front-ends call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `POST` multipart CSV upload.
    pub upload_invoice: String,
    /// `GET` list of processed claims.
    pub claims: String,
    /// `POST` username/password exchange for a bearer token.
    pub token: String,
    /// `GET` identity of the bearer token's owner.
    pub current_user: String,
}

impl Endpoints {
    /// Build the endpoint set from two base URLs.
    ///
    /// A trailing slash on either base is ignored.
    pub fn from_bases(invoice_api: &str, claims_api: &str) -> Self {
        let invoice_api = invoice_api.trim_end_matches('/');
        let claims_api = claims_api.trim_end_matches('/');
        Self {
            upload_invoice: format!("{invoice_api}/upload-invoice/"),
            claims: format!("{claims_api}/claims"),
            token: format!("{invoice_api}/token"),
            current_user: format!("{invoice_api}/users/me"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_bases(DEFAULT_INVOICE_API, DEFAULT_CLAIMS_API)
    }
}

/// Client configuration shared by the CLI and the web screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// What the claim list does when the fetch fails.
    pub claims_failure: FailurePolicy,
}

impl ClientConfig {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            claims_failure: FailurePolicy::default(),
        }
    }

    pub fn with_claims_failure(mut self, policy: FailurePolicy) -> Self {
        self.claims_failure = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_match_backend() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.upload_invoice, "http://127.0.0.1:8000/upload-invoice/");
        assert_eq!(endpoints.claims, "http://localhost:8000/claims");
        assert_eq!(endpoints.token, "http://127.0.0.1:8000/token");
        assert_eq!(endpoints.current_user, "http://127.0.0.1:8000/users/me");
    }

    #[test]
    fn test_from_bases_strips_trailing_slash() {
        let endpoints = Endpoints::from_bases("http://10.0.0.5:9000/", "http://claims.local/");
        assert_eq!(endpoints.upload_invoice, "http://10.0.0.5:9000/upload-invoice/");
        assert_eq!(endpoints.claims, "http://claims.local/claims");
    }

    #[test]
    fn test_config_carries_claims_policy() {
        let config = ClientConfig::default();
        assert_eq!(config.claims_failure, FailurePolicy::Silent);

        let config = config.with_claims_failure(FailurePolicy::from_notify(true));
        assert_eq!(config.claims_failure, FailurePolicy::Notify);
        assert_eq!(config.endpoints, Endpoints::default());
    }
}

//! Obtaining and checking the bearer token.
//!
//! The invoice service issues tokens from `/token` and reports the owner of
//! a token at `/users/me`. Neither result is stored; the caller decides what
//! to do with the token.

use crate::api::InvoiceApi;
use crate::model::{BearerToken, Credentials, CurrentUser};
use crate::notice::Notice;

/// Exchange a username and password for a bearer token.
pub async fn sign_in<A>(api: &A, credentials: &Credentials) -> Result<BearerToken, Notice>
where
    A: InvoiceApi + ?Sized,
{
    if !credentials.is_complete() {
        return Err(Notice::MissingCredentials);
    }

    match api.request_token(credentials).await {
        Ok(response) => {
            tracing::info!(username = %credentials.username, token_type = %response.token_type, "token issued");
            Ok(response.into_bearer())
        }
        Err(err) => {
            tracing::error!(username = %credentials.username, error = %err, "login failed");
            Err(Notice::LoginFailed)
        }
    }
}

/// Ask the server who `token` belongs to.
pub async fn whoami<A>(api: &A, token: &BearerToken) -> Result<CurrentUser, Notice>
where
    A: InvoiceApi + ?Sized,
{
    if token.is_empty() {
        return Err(Notice::TokenRejected);
    }

    api.current_user(token).await.map_err(|err| {
        tracing::error!(error = %err, "token check failed");
        Notice::TokenRejected
    })
}

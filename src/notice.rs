//! Blocking notices shown to the user.
//!
//! Notices never carry transport detail; the underlying [`ClientError`]
//! is logged where the notice is raised.
//!
//! [`ClientError`]: crate::ClientError

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("Please provide both file and token")]
    MissingFileOrToken,

    #[error("Upload failed or unauthorized. Check token or server.")]
    UploadFailed,

    #[error("Could not load claims. Check the server.")]
    ClaimsUnavailable,

    #[error("Please provide both username and password")]
    MissingCredentials,

    #[error("Login failed. Check username and password.")]
    LoginFailed,

    #[error("Token rejected by server.")]
    TokenRejected,
}

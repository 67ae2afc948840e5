//! # claims-desk
//!
//! Client side of a medical-invoice fraud service: an invoice dashboard
//! that uploads a CSV with a bearer token and shows the per-row
//! classification, and a claim list that fetches processed claims.
//!
//! ## Overview
//!
//! Each screen is a small state container driven by one HTTP round-trip:
//! - **State**: [`UploadState`] and [`ClaimsState`] hold everything a screen shows
//! - **Transport**: [`InvoiceApi`] and [`ClaimsApi`] are implemented by the
//!   native [`HttpClient`] and by the browser client in `claims-desk-web`
//! - **Rendering**: [`render`] turns state into rows, independent of the UI toolkit
//!
//! ## Example
//!
//! ```
//! use claims_desk::{Notice, SelectedFile, UploadState};
//!
//! let mut state = UploadState::default();
//! state.select_file(Some(SelectedFile::csv("invoices.csv", b"Claim Amount\n1200\n".to_vec())));
//!
//! // No token yet: the request is never built.
//! assert_eq!(state.prepare().unwrap_err(), Notice::MissingFileOrToken);
//!
//! state.set_token("eyJhbGciOi...");
//! assert!(state.prepare().is_ok());
//! ```

pub mod api;
pub mod auth;
pub mod claims;
pub mod config;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod model;
pub mod notice;
pub mod render;
#[cfg(test)]
mod testing;
pub mod upload;
pub mod workflow;

pub use api::{ClaimsApi, InvoiceApi, SelectedFile, UploadRequest};
pub use auth::{sign_in, whoami};
pub use claims::{ClaimsState, FailurePolicy};
pub use config::{ClientConfig, Endpoints};
pub use error::ClientError;
#[cfg(feature = "native")]
pub use http::HttpClient;
pub use model::{
    BearerToken, ClaimAmount, ClaimId, ClaimRecord, Classification, Credentials, CurrentUser, Tone,
    TokenResponse, UploadResponse,
};
pub use notice::Notice;
pub use render::{ClaimRow, ClassificationRow};
pub use upload::UploadState;
pub use workflow::{CancellationToken, Phase, guarded};

//! In-memory backend for workflow tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ClaimsApi, InvoiceApi, UploadRequest};
use crate::error::ClientError;
use crate::model::{
    BearerToken, ClaimRecord, Classification, Credentials, CurrentUser, TokenResponse,
    UploadResponse,
};

/// Canned reply: a body, or the HTTP status of a failure.
pub type Reply<T> = Result<T, u16>;

/// Counts calls and answers from canned replies. Status `0` stands for a
/// connection failure.
#[derive(Default)]
pub struct FakeBackend {
    pub upload_reply: RefCell<Option<Reply<UploadResponse>>>,
    pub claims_reply: RefCell<Option<Reply<Vec<ClaimRecord>>>>,
    pub token_reply: RefCell<Option<Reply<TokenResponse>>>,
    pub user_reply: RefCell<Option<Reply<CurrentUser>>>,
    pub uploads: Cell<usize>,
    pub fetches: Cell<usize>,
    pub token_requests: Cell<usize>,
    pub user_requests: Cell<usize>,
    pub last_upload: RefCell<Option<UploadRequest>>,
}

impl FakeBackend {
    pub fn uploading(labels: &[&str], message: &str) -> Self {
        let backend = Self::default();
        *backend.upload_reply.borrow_mut() = Some(Ok(UploadResponse {
            classification: labels.iter().map(|l| Classification::new(*l)).collect(),
            message: message.to_string(),
            filename: None,
        }));
        backend
    }

    pub fn failing_upload(status: u16) -> Self {
        let backend = Self::default();
        *backend.upload_reply.borrow_mut() = Some(Err(status));
        backend
    }

    pub fn serving_claims(claims: Vec<ClaimRecord>) -> Self {
        let backend = Self::default();
        *backend.claims_reply.borrow_mut() = Some(Ok(claims));
        backend
    }

    pub fn failing_claims(status: u16) -> Self {
        let backend = Self::default();
        *backend.claims_reply.borrow_mut() = Some(Err(status));
        backend
    }

    pub fn issuing_token(token: &str) -> Self {
        let backend = Self::default();
        *backend.token_reply.borrow_mut() = Some(Ok(TokenResponse {
            access_token: token.to_string(),
            token_type: "bearer".to_string(),
        }));
        *backend.user_reply.borrow_mut() = Some(Ok(CurrentUser {
            username: "test".to_string(),
        }));
        backend
    }

    pub fn rejecting_tokens() -> Self {
        let backend = Self::default();
        *backend.token_reply.borrow_mut() = Some(Err(401));
        *backend.user_reply.borrow_mut() = Some(Err(401));
        backend
    }
}

fn answer<T: Clone>(reply: &RefCell<Option<Reply<T>>>) -> Result<T, ClientError> {
    match reply.borrow().as_ref() {
        Some(Ok(body)) => Ok(body.clone()),
        Some(Err(0)) | None => Err(ClientError::Network("connection refused".to_string())),
        Some(Err(status)) => Err(ClientError::from_status(
            *status,
            r#"{"detail":"canned failure"}"#,
        )),
    }
}

#[async_trait(?Send)]
impl InvoiceApi for FakeBackend {
    async fn upload_invoice(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError> {
        self.uploads.set(self.uploads.get() + 1);
        *self.last_upload.borrow_mut() = Some(request.clone());
        answer(&self.upload_reply)
    }

    async fn request_token(&self, _credentials: &Credentials) -> Result<TokenResponse, ClientError> {
        self.token_requests.set(self.token_requests.get() + 1);
        answer(&self.token_reply)
    }

    async fn current_user(&self, _token: &BearerToken) -> Result<CurrentUser, ClientError> {
        self.user_requests.set(self.user_requests.get() + 1);
        answer(&self.user_reply)
    }
}

#[async_trait(?Send)]
impl ClaimsApi for FakeBackend {
    async fn fetch_claims(&self) -> Result<Vec<ClaimRecord>, ClientError> {
        self.fetches.set(self.fetches.get() + 1);
        answer(&self.claims_reply)
    }
}

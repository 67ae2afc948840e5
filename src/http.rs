//! Native HTTP transport.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::{ClaimsApi, InvoiceApi, UploadRequest};
use crate::config::Endpoints;
use crate::error::ClientError;
use crate::model::{
    BearerToken, ClaimRecord, Credentials, CurrentUser, TokenResponse, UploadResponse,
};

/// Multipart field the upload endpoint reads the CSV from.
pub const UPLOAD_FIELD: &str = "file";

/// reqwest-backed client for both services.
///
/// No timeout is configured: a request that never answers keeps its
/// screen loading.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("claims-desk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Map a response to its JSON body, or to the error its status describes.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_status(status.as_u16(), &body));
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl InvoiceApi for HttpClient {
    async fn upload_invoice(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError> {
        let part = Part::bytes(request.file.bytes.clone())
            .file_name(request.file.name.clone())
            .mime_str(&request.file.content_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(url = %self.endpoints.upload_invoice, "POST upload");
        let response = self
            .client
            .post(&self.endpoints.upload_invoice)
            .bearer_auth(request.token.as_str())
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ClientError> {
        tracing::debug!(url = %self.endpoints.token, "POST token");
        let response = self
            .client
            .post(&self.endpoints.token)
            .json(credentials)
            .send()
            .await?;
        read_json(response).await
    }

    async fn current_user(&self, token: &BearerToken) -> Result<CurrentUser, ClientError> {
        tracing::debug!(url = %self.endpoints.current_user, "GET current user");
        let response = self
            .client
            .get(&self.endpoints.current_user)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        read_json(response).await
    }
}

#[async_trait(?Send)]
impl ClaimsApi for HttpClient {
    async fn fetch_claims(&self) -> Result<Vec<ClaimRecord>, ClientError> {
        tracing::debug!(url = %self.endpoints.claims, "GET claims");
        let response = self.client.get(&self.endpoints.claims).send().await?;
        read_json(response).await
    }
}

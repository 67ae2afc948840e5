//! Browser transport over `fetch`, via gloo-net.

use async_trait::async_trait;
use gloo::file::{Blob, File};
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use claims_desk::{
    BearerToken, ClaimRecord, ClaimsApi, ClientError, Credentials, CurrentUser, Endpoints,
    InvoiceApi, SelectedFile, TokenResponse, UploadRequest, UploadResponse,
};

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserClient {
    endpoints: Endpoints,
}

fn network(err: impl std::fmt::Display) -> ClientError {
    ClientError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.text().await.map_err(network)?;
    if !response.ok() {
        return Err(ClientError::from_status(response.status(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Multipart body with the file under the `file` field. The browser sets
/// the boundary header itself.
fn upload_form(file: &SelectedFile) -> Result<web_sys::FormData, ClientError> {
    let blob = Blob::new_with_options(file.bytes.as_slice(), Some(file.content_type.as_str()));
    let form = web_sys::FormData::new().map_err(|e| network(format!("{e:?}")))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &web_sys::Blob::from(blob), &file.name)
        .map_err(|e| network(format!("{e:?}")))?;
    Ok(form)
}

/// Read a picked file into memory.
pub async fn read_selected(file: &File) -> Result<SelectedFile, ClientError> {
    let bytes = gloo::file::futures::read_as_bytes(file)
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    let content_type = match file.raw_mime_type() {
        mime if mime.is_empty() => "text/csv".to_string(),
        mime => mime,
    };
    Ok(SelectedFile::new(file.name(), bytes, content_type))
}

#[async_trait(?Send)]
impl InvoiceApi for BrowserClient {
    async fn upload_invoice(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError> {
        let form = upload_form(&request.file)?;
        let response = Request::post(&self.endpoints.upload_invoice)
            .header("Authorization", &request.token.header_value())
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ClientError> {
        let response = Request::post(&self.endpoints.token)
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }

    async fn current_user(&self, token: &BearerToken) -> Result<CurrentUser, ClientError> {
        let response = Request::get(&self.endpoints.current_user)
            .header("Authorization", &token.header_value())
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }
}

#[async_trait(?Send)]
impl ClaimsApi for BrowserClient {
    async fn fetch_claims(&self) -> Result<Vec<ClaimRecord>, ClientError> {
        let response = Request::get(&self.endpoints.claims)
            .send()
            .await
            .map_err(network)?;
        read_json(response).await
    }
}

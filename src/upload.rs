//! Invoice dashboard state and the upload round-trip.

use crate::api::{InvoiceApi, SelectedFile, UploadRequest};
use crate::error::ClientError;
use crate::model::{BearerToken, Classification, UploadResponse};
use crate::notice::Notice;
use crate::workflow::{CancellationToken, Phase, guarded};

/// Everything the invoice dashboard shows.
///
/// Starts empty; changed only through the setters below and by the outcome
/// of an upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    selected_file: Option<SelectedFile>,
    auth_token: String,
    phase: Phase,
    classifications: Vec<Classification>,
    status_message: String,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.auth_token = token.into();
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Build the request, or say why it cannot be sent.
    pub fn prepare(&self) -> Result<UploadRequest, Notice> {
        let token = BearerToken::new(self.auth_token.clone());
        match &self.selected_file {
            Some(file) if !token.is_empty() => Ok(UploadRequest {
                file: file.clone(),
                token,
            }),
            _ => Err(Notice::MissingFileOrToken),
        }
    }

    /// Enter the in-flight window.
    pub fn begin(&mut self) {
        if self.phase.is_loading() {
            tracing::warn!("upload started while another is in flight");
        }
        self.phase = Phase::Requesting;
    }

    /// Apply the outcome of the request and return to idle.
    ///
    /// On failure the previous classifications and message are kept and the
    /// caller gets the notice to show.
    pub fn settle(&mut self, result: Result<UploadResponse, ClientError>) -> Option<Notice> {
        let notice = match result {
            Ok(response) => {
                self.phase = self.phase.complete(true);
                tracing::info!(
                    rows = response.classification.len(),
                    filename = response.filename.as_deref().unwrap_or_default(),
                    "invoice classified"
                );
                self.classifications = response.classification;
                self.status_message = response.message;
                None
            }
            Err(err) => {
                self.phase = self.phase.complete(false);
                tracing::error!(error = %err, "invoice upload failed");
                Some(Notice::UploadFailed)
            }
        };
        self.phase = self.phase.settle();
        notice
    }

    /// Run the whole upload against `api`.
    ///
    /// Nothing is sent when [`prepare`](Self::prepare) fails. If `cancel`
    /// fires while the request is in flight the response is discarded,
    /// results stay as they were at send time and the phase returns to idle.
    pub async fn submit<A>(&mut self, api: &A, cancel: &CancellationToken) -> Result<(), Notice>
    where
        A: InvoiceApi + ?Sized,
    {
        let request = self.prepare().inspect_err(|notice| {
            tracing::warn!(%notice, "upload not sent");
        })?;

        self.begin();
        tracing::debug!(file = %request.file.name, bytes = request.file.len(), "uploading invoice");

        match guarded(cancel, api.upload_invoice(&request)).await {
            Some(result) => match self.settle(result) {
                Some(notice) => Err(notice),
                None => Ok(()),
            },
            None => {
                self.phase = Phase::Idle;
                Ok(())
            }
        }
    }
}

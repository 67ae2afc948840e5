//! Transport contracts.
//!
//! One trait per screen. Futures are `?Send`: the browser client holds
//! JS handles across awaits, and the CLI awaits on its main task.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::model::{
    BearerToken, ClaimRecord, Credentials, CurrentUser, TokenResponse, UploadResponse,
};

const CSV_MIME: &str = "text/csv";
const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// A file picked by the user, read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn csv(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, bytes, CSV_MIME)
    }

    /// Read a file from disk. The MIME type follows the extension.
    pub fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = std::fs::read(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        let content_type = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => CSV_MIME,
            _ => OCTET_STREAM_MIME,
        };
        Ok(Self::new(name, bytes, content_type))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Everything needed to send one upload: sent as the multipart field
/// `file` with the bearer header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: SelectedFile,
    pub token: BearerToken,
}

/// Calls made by the invoice dashboard.
#[async_trait(?Send)]
pub trait InvoiceApi {
    async fn upload_invoice(&self, request: &UploadRequest) -> Result<UploadResponse, ClientError>;

    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse, ClientError>;

    async fn current_user(&self, token: &BearerToken) -> Result<CurrentUser, ClientError>;
}

/// Calls made by the claim list.
#[async_trait(?Send)]
pub trait ClaimsApi {
    async fn fetch_claims(&self) -> Result<Vec<ClaimRecord>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path_reads_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoices.CSV");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Invoice ID,Claim Amount").unwrap();
        writeln!(file, "1,250.00").unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();
        assert_eq!(selected.name, "invoices.CSV");
        assert_eq!(selected.content_type, "text/csv");
        assert!(selected.bytes.starts_with(b"Invoice ID"));
    }

    #[test]
    fn test_from_path_other_extension_is_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let selected = SelectedFile::from_path(&path).unwrap();
        assert_eq!(selected.content_type, "application/octet-stream");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        match SelectedFile::from_path(&path) {
            Err(ClientError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_debug_omits_contents() {
        let selected = SelectedFile::csv("a.csv", b"secret,row".to_vec());
        let debug = format!("{selected:?}");
        assert!(debug.contains("len: 10"));
        assert!(!debug.contains("secret"));
    }
}

use std::path::PathBuf;

use shared::{domain::DocumentKind, protocol::AnalysisResponse};

use crate::error::RequestError;

/// Where the bytes of a selected document come from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Read lazily, right before the upload.
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// What the file input currently holds.
#[derive(Debug, Clone)]
pub struct SelectedDocument {
    pub file_name: String,
    pub source: DocumentSource,
}

impl SelectedDocument {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            file_name,
            source: DocumentSource::Path(path),
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DocumentSource::Bytes(bytes),
        }
    }

    pub async fn into_request(self, kind: DocumentKind) -> Result<AnalysisRequest, RequestError> {
        let bytes = match self.source {
            DocumentSource::Bytes(bytes) => bytes,
            DocumentSource::Path(path) => tokio::fs::read(&path)
                .await
                .map_err(|source| RequestError::Read { path, source })?,
        };
        Ok(AnalysisRequest {
            file_name: self.file_name,
            kind,
            bytes,
        })
    }
}

/// One validated upload, alive only for the duration of its network call.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

/// Form submission delivered to the controller. The host checks
/// `default_prevented` to decide whether to run its own submit action.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The response was rendered and the results panel revealed.
    Rendered(AnalysisResponse),
    /// A newer submission started before this one resolved; its result was dropped.
    Superseded,
}

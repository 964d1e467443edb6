use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub const NO_FILE_SELECTED_MESSAGE: &str = "Please select a file to analyze";
pub const UNSUPPORTED_FILE_TYPE_MESSAGE: &str = "Only PDF and TXT files are supported";
pub const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred while analyzing the document. Please try again.";

/// Anything that goes wrong between reading the document and parsing the reply.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("server responded with status: {0}")]
    Status(StatusCode),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to read document '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no document selected")]
    NoFileSelected,
    #[error("unsupported document type '{extension}'")]
    UnsupportedFileType { extension: String },
    #[error("analysis request failed: {0}")]
    RequestFailed(#[from] RequestError),
}

impl UploadError {
    /// Text shown to the user. Request failures collapse into one generic
    /// message; the cause only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::NoFileSelected => NO_FILE_SELECTED_MESSAGE,
            UploadError::UnsupportedFileType { .. } => UNSUPPORTED_FILE_TYPE_MESSAGE,
            UploadError::RequestFailed(_) => REQUEST_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failures_share_one_user_message() {
        let status = UploadError::from(RequestError::Status(StatusCode::BAD_GATEWAY));
        let decode = UploadError::from(RequestError::Decode(
            serde_json::from_str::<u8>("nope").expect_err("invalid json"),
        ));
        assert_eq!(status.user_message(), REQUEST_FAILED_MESSAGE);
        assert_eq!(decode.user_message(), REQUEST_FAILED_MESSAGE);
        assert!(status.to_string().contains("502"));
    }

    #[test]
    fn validation_errors_have_distinct_messages() {
        assert_eq!(
            UploadError::NoFileSelected.user_message(),
            "Please select a file to analyze"
        );
        let unsupported = UploadError::UnsupportedFileType {
            extension: "docx".into(),
        };
        assert_eq!(
            unsupported.user_message(),
            "Only PDF and TXT files are supported"
        );
        assert_eq!(unsupported.to_string(), "unsupported document type 'docx'");
    }
}

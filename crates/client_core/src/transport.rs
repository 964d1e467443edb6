use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::protocol::{AnalysisResponse, ANALYZE_PATH, FILE_FIELD};
use tracing::{debug, info};
use url::Url;

use crate::{error::RequestError, types::AnalysisRequest};

/// Performs the single network call of a submission.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse, RequestError>;
}

/// Uploads documents to `{server_url}/analyze/` as multipart form data.
///
/// No timeout is configured; a call waits as long as the underlying
/// connection does.
pub struct HttpAnalysisClient {
    http: Client,
    endpoint: Url,
}

impl HttpAnalysisClient {
    pub fn new(server_url: &str) -> Result<Self, url::ParseError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(server_url)?.join(ANALYZE_PATH)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisClient {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse, RequestError> {
        let AnalysisRequest {
            file_name,
            kind,
            bytes,
        } = request;
        info!(
            file = %file_name,
            size_bytes = bytes.len(),
            endpoint = %self.endpoint,
            "uploading document for analysis"
        );

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(kind.mime_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status));
        }

        let body = response.bytes().await?;
        debug!(status = %status, body_bytes = body.len(), "analysis response received");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use shared::{
    domain::{file_extension, DocumentKind},
    protocol::AnalysisResponse,
};
use tracing::{debug, error, info, warn};

use crate::{
    error::{RequestError, UploadError},
    transport::AnalysisTransport,
    types::{SelectedDocument, SubmitEvent, SubmitOutcome},
    view::{AnalysisView, Notifier, ViewRegion},
};

/// Handles submissions of the upload form.
///
/// Every submission takes a fresh request token. A call that resolves after a
/// newer submission has started is discarded without touching the view, so
/// the page always reflects the most recent submission.
pub struct UploadController<V, N, T> {
    view: Arc<V>,
    notifier: Arc<N>,
    transport: Arc<T>,
    latest_request: AtomicU64,
}

impl<V, N, T> UploadController<V, N, T>
where
    V: AnalysisView,
    N: Notifier,
    T: AnalysisTransport,
{
    pub fn new(view: Arc<V>, notifier: Arc<N>, transport: Arc<T>) -> Self {
        Self {
            view,
            notifier,
            transport,
            latest_request: AtomicU64::new(0),
        }
    }

    pub async fn handle_submit(
        &self,
        event: &mut SubmitEvent,
    ) -> Result<SubmitOutcome, UploadError> {
        event.prevent_default();
        let token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::enter(self.view.as_ref(), &self.latest_request, token);

        let (document, kind) = match self.validate() {
            Ok(validated) => validated,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        let result = self.request_analysis(document, kind).await;
        if !self.is_latest(token) {
            debug!(token, "discarding result of superseded submission");
            return Ok(SubmitOutcome::Superseded);
        }

        match result {
            Ok(response) => {
                self.render(&response);
                Ok(SubmitOutcome::Rendered(response))
            }
            Err(cause) => {
                let err = UploadError::from(cause);
                self.report(&err);
                Err(err)
            }
        }
    }

    fn validate(&self) -> Result<(SelectedDocument, DocumentKind), UploadError> {
        let document = self
            .view
            .selected_document()
            .ok_or(UploadError::NoFileSelected)?;
        let extension = file_extension(&document.file_name).unwrap_or_default();
        let kind = DocumentKind::from_extension(&extension)
            .ok_or(UploadError::UnsupportedFileType { extension })?;
        Ok((document, kind))
    }

    async fn request_analysis(
        &self,
        document: SelectedDocument,
        kind: DocumentKind,
    ) -> Result<AnalysisResponse, RequestError> {
        let request = document.into_request(kind).await?;
        self.transport.analyze(request).await
    }

    fn render(&self, response: &AnalysisResponse) {
        let score = response.trustworthiness_score;
        let band = score.band();
        self.view.set_text(ViewRegion::ScoreValue, &score.to_string());
        self.view.set_text(ViewRegion::SummaryText, &response.summary);
        self.view
            .set_text(ViewRegion::DetailedAnalysis, &response.detailed_analysis);
        self.view.set_background(ViewRegion::ScoreDisplay, band.color());
        self.view.set_visible(ViewRegion::ResultsSection, true);
        info!(score = %score, band = ?band, "analysis rendered");
    }

    fn report(&self, err: &UploadError) {
        match err {
            UploadError::RequestFailed(cause) => error!(error = %cause, "document analysis failed"),
            _ => warn!(error = %err, "document submission rejected"),
        }
        self.notifier.alert(err.user_message());
    }

    fn is_latest(&self, token: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == token
    }
}

/// Shows the loading indicator for the lifetime of a submission. On drop it
/// hides the indicator again, unless a newer submission owns it by then.
struct LoadingGuard<'a, V: AnalysisView> {
    view: &'a V,
    latest_request: &'a AtomicU64,
    token: u64,
}

impl<'a, V: AnalysisView> LoadingGuard<'a, V> {
    fn enter(view: &'a V, latest_request: &'a AtomicU64, token: u64) -> Self {
        view.set_visible(ViewRegion::Loading, true);
        view.set_visible(ViewRegion::ResultsSection, false);
        Self {
            view,
            latest_request,
            token,
        }
    }
}

impl<V: AnalysisView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        if self.latest_request.load(Ordering::SeqCst) == self.token {
            self.view.set_visible(ViewRegion::Loading, false);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

//! Seams between the controller and whatever hosts it.

use shared::domain::ScoreColor;

use crate::types::SelectedDocument;

/// Named regions of the upload page the controller reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRegion {
    UploadForm,
    Document,
    Loading,
    ResultsSection,
    ScoreValue,
    SummaryText,
    DetailedAnalysis,
    ScoreDisplay,
}

impl ViewRegion {
    pub const ALL: [ViewRegion; 8] = [
        ViewRegion::UploadForm,
        ViewRegion::Document,
        ViewRegion::Loading,
        ViewRegion::ResultsSection,
        ViewRegion::ScoreValue,
        ViewRegion::SummaryText,
        ViewRegion::DetailedAnalysis,
        ViewRegion::ScoreDisplay,
    ];

    /// Element id of the region in the HTML front end.
    pub fn element_id(self) -> &'static str {
        match self {
            ViewRegion::UploadForm => "upload-form",
            ViewRegion::Document => "document",
            ViewRegion::Loading => "loading",
            ViewRegion::ResultsSection => "results-section",
            ViewRegion::ScoreValue => "score-value",
            ViewRegion::SummaryText => "summary-text",
            ViewRegion::DetailedAnalysis => "detailed-analysis",
            ViewRegion::ScoreDisplay => "score-display",
        }
    }
}

/// Read/write access to the page. Methods take `&self`; implementations
/// keep their own interior state.
pub trait AnalysisView: Send + Sync {
    /// First file of the `document` input, if any.
    fn selected_document(&self) -> Option<SelectedDocument>;
    fn set_visible(&self, region: ViewRegion, visible: bool);
    fn set_text(&self, region: ViewRegion, text: &str);
    fn set_background(&self, region: ViewRegion, color: ScoreColor);
}

/// Surfaces a user-facing message. Must not block on user input.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

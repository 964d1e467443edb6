//! HTTP contract shared with the analysis service.

use serde::{Deserialize, Serialize};

use crate::domain::Score;

/// Path of the analysis endpoint, relative to the service origin.
pub const ANALYZE_PATH: &str = "/analyze/";

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

/// Body of a successful `POST /analyze/`. All three fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub trustworthiness_score: Score,
    pub summary: String,
    pub detailed_analysis: String,
}

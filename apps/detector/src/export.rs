use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::protocol::AnalysisResponse;

#[derive(Debug, Serialize)]
struct SavedAnalysis<'a> {
    source_file: &'a str,
    analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    analysis: &'a AnalysisResponse,
}

/// `{dir}/{stem}_analysis.json`, where the stem is the file name up to its
/// first `.`.
pub fn analysis_path(dir: &Path, file_name: &str) -> PathBuf {
    let stem = file_name.split('.').next().unwrap_or(file_name);
    dir.join(format!("{stem}_analysis.json"))
}

pub fn save_analysis(
    dir: &Path,
    file_name: &str,
    analysis: &AnalysisResponse,
    analyzed_at: DateTime<Utc>,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create results directory '{}'", dir.display()))?;

    let path = analysis_path(dir, file_name);
    let record = SavedAnalysis {
        source_file: file_name,
        analyzed_at,
        analysis,
    };
    let json = serde_json::to_string_pretty(&record)?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write analysis '{}'", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use shared::domain::Score;

    use super::*;

    #[test]
    fn stem_stops_at_first_dot() {
        let dir = Path::new("results");
        assert_eq!(
            analysis_path(dir, "claim.v2.pdf"),
            dir.join("claim_analysis.json")
        );
        assert_eq!(analysis_path(dir, "notes.TXT"), dir.join("notes_analysis.json"));
    }

    #[test]
    fn writes_response_with_source_and_timestamp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("out");
        let analysis = AnalysisResponse {
            trustworthiness_score: Score::from(64),
            summary: "Minor gaps".into(),
            detailed_analysis: "Repair invoice is undated.".into(),
        };
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();

        let path = save_analysis(&nested, "claim.pdf", &analysis, at).expect("save");

        assert_eq!(path, nested.join("claim_analysis.json"));
        let raw = fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"trustworthiness_score\": 64,"), "{raw}");
        let saved: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(saved["source_file"], "claim.pdf");
        assert_eq!(saved["analyzed_at"], "2026-10-16T09:30:00Z");
        assert_eq!(saved["trustworthiness_score"].as_i64(), Some(64));
        assert_eq!(saved["summary"], "Minor gaps");
        assert_eq!(saved["detailed_analysis"], "Repair invoice is undated.");

        let reparsed: AnalysisResponse = serde_json::from_value(saved).expect("round trip");
        assert_eq!(reparsed, analysis);
    }
}

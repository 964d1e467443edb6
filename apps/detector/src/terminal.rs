//! Terminal rendition of the upload page.

use std::{io::Write, sync::Mutex};

use client_core::{AnalysisView, Notifier, SelectedDocument, ViewRegion};
use colored::{ColoredString, Colorize};
use shared::domain::ScoreColor;
use tracing::warn;

#[derive(Debug, Default)]
struct ResultsPanel {
    score: Option<String>,
    summary: Option<String>,
    detailed_analysis: Option<String>,
    swatch: Option<ScoreColor>,
}

/// Prints the loading indicator to `status` and the results panel to `out`
/// when it becomes visible.
pub struct TerminalView<O, S> {
    document: Option<SelectedDocument>,
    out: Mutex<O>,
    status: Mutex<S>,
    panel: Mutex<ResultsPanel>,
}

impl<O: Write + Send, S: Write + Send> TerminalView<O, S> {
    pub fn new(document: Option<SelectedDocument>, out: O, status: S) -> Self {
        Self {
            document,
            out: Mutex::new(out),
            status: Mutex::new(status),
            panel: Mutex::new(ResultsPanel::default()),
        }
    }

    fn print_loading(&self) {
        let name = self
            .document
            .as_ref()
            .map(|document| document.file_name.as_str())
            .unwrap_or("document");
        let Ok(mut status) = self.status.lock() else {
            return;
        };
        if let Err(err) = writeln!(status, "Analyzing {name}...") {
            warn!(error = %err, "failed to write loading indicator");
        }
    }

    fn print_results(&self) {
        let Ok(panel) = self.panel.lock() else {
            return;
        };
        let rendered = render_panel(&panel);
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = out.write_all(rendered.as_bytes()).and_then(|()| out.flush()) {
            warn!(error = %err, "failed to write analysis results");
        }
    }
}

/// Block of the score color; plain spaces when coloring is turned off.
fn swatch(color: ScoreColor) -> ColoredString {
    "    ".on_truecolor(color.r, color.g, color.b)
}

fn render_panel(panel: &ResultsPanel) -> String {
    let score = panel.score.as_deref().unwrap_or("-");
    let swatch_line = panel
        .swatch
        .map(|color| format!(" {} {}", swatch(color), color.hex()))
        .unwrap_or_default();
    format!(
        "Trustworthiness score: {score}{swatch_line}\n\nSummary\n{}\n\nDetailed analysis\n{}\n",
        panel.summary.as_deref().unwrap_or_default(),
        panel.detailed_analysis.as_deref().unwrap_or_default(),
    )
}

impl<O: Write + Send, S: Write + Send> AnalysisView for TerminalView<O, S> {
    fn selected_document(&self) -> Option<SelectedDocument> {
        self.document.clone()
    }

    fn set_visible(&self, region: ViewRegion, visible: bool) {
        match (region, visible) {
            (ViewRegion::Loading, true) => self.print_loading(),
            (ViewRegion::ResultsSection, true) => self.print_results(),
            _ => {}
        }
    }

    fn set_text(&self, region: ViewRegion, text: &str) {
        let Ok(mut panel) = self.panel.lock() else {
            return;
        };
        let slot = match region {
            ViewRegion::ScoreValue => &mut panel.score,
            ViewRegion::SummaryText => &mut panel.summary,
            ViewRegion::DetailedAnalysis => &mut panel.detailed_analysis,
            other => {
                warn!(region = other.element_id(), "ignoring text for non-text region");
                return;
            }
        };
        *slot = Some(text.to_string());
    }

    fn set_background(&self, region: ViewRegion, color: ScoreColor) {
        if region != ViewRegion::ScoreDisplay {
            return;
        }
        if let Ok(mut panel) = self.panel.lock() {
            panel.swatch = Some(color);
        }
    }
}

/// Writes alerts as plain lines, typically to stderr.
pub struct TerminalNotifier<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn alert(&self, message: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{message}") {
            warn!(error = %err, "failed to write alert");
        }
    }
}

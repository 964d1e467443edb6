use std::{io, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use client_core::{
    AnalysisTransport, HttpAnalysisClient, SelectedDocument, SubmitEvent, SubmitOutcome,
    UploadController,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod export;
mod terminal;

use config::{load_settings, Settings, DEFAULT_CONFIG_PATH};
use export::save_analysis;
use terminal::{TerminalNotifier, TerminalView};

/// Score how trustworthy a claim document looks.
#[derive(Parser, Debug)]
#[command(name = "detector")]
struct Args {
    /// Document to analyze (.pdf or .txt)
    document: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long)]
    server_url: Option<String>,

    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Also write each rendered analysis to `<dir>/<stem>_analysis.json`
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Print the score swatch without terminal colors
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let settings = apply_args(load_settings(&args.config)?, &args);
    let transport = HttpAnalysisClient::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;

    if run(args.document, &settings, transport).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Command-line flags win over the config file and the environment.
fn apply_args(mut settings: Settings, args: &Args) -> Settings {
    if let Some(server_url) = &args.server_url {
        settings.server_url = server_url.clone();
    }
    if let Some(save_dir) = &args.save_dir {
        settings.save_dir = Some(save_dir.clone());
    }
    settings
}

/// Submits `document` once through the terminal page. Returns whether a
/// result was rendered; a failed export is logged and does not change that.
async fn run<T: AnalysisTransport>(
    document: Option<PathBuf>,
    settings: &Settings,
    transport: T,
) -> bool {
    let document = document.map(SelectedDocument::from_path);
    let file_name = document.as_ref().map(|d| d.file_name.clone());

    let view = Arc::new(TerminalView::new(document, io::stdout(), io::stderr()));
    let notifier = Arc::new(TerminalNotifier::new(io::stderr()));
    let controller = UploadController::new(view, notifier, Arc::new(transport));

    let mut event = SubmitEvent::default();
    let analysis = match controller.handle_submit(&mut event).await {
        Ok(SubmitOutcome::Rendered(analysis)) => analysis,
        Ok(SubmitOutcome::Superseded) | Err(_) => return false,
    };

    if let (Some(dir), Some(file_name)) = (&settings.save_dir, &file_name) {
        match save_analysis(dir, file_name, &analysis, Utc::now()) {
            Ok(path) => info!(path = %path.display(), "analysis saved"),
            Err(err) => error!(error = %err, "failed to save analysis"),
        }
    }
    true
}

#[cfg(test)]
#[path = "tests/run_tests.rs"]
mod tests;

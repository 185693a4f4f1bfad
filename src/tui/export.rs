use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::sync::OnceLock;
use std::time::Duration;

use super::state::UiState;
use crate::dashboard;
use crate::samples::RESPONSE_TIMES_MS;

/// How long the worker keeps ownership of the clipboard after a copy. X11 and
/// Wayland only serve the selection while the owning handle is alive.
const CLIPBOARD_HOLD: Duration = Duration::from_secs(2);

static CLIPBOARD: OnceLock<ClipboardWorker> = OnceLock::new();

/// File name derived from the report timestamp, e.g.
/// `latency-dashboard-2024-05-01_10-20-30Z.json`.
fn default_export_path(dir: &Path, timestamp_utc: &str, ext: &str) -> PathBuf {
    let stamp = timestamp_utc.replace(':', "-").replace('T', "_");
    dir.join(format!("latency-dashboard-{stamp}.{ext}"))
}

/// Use the path given on the command line, else a timestamped file in the current directory.
fn target_path(configured: Option<&PathBuf>, timestamp_utc: &str, ext: &str) -> Result<PathBuf> {
    if let Some(p) = configured {
        return Ok(p.clone());
    }
    let current_dir = std::env::current_dir().context("get current directory")?;
    Ok(default_export_path(&current_dir, timestamp_utc, ext))
}

/// Export the JSON report. Returns the path written.
pub fn export_report_json(state: &UiState) -> Result<PathBuf> {
    let report = dashboard::build_report(&state.title, &RESPONSE_TIMES_MS, state.dashboard)?;
    let path = target_path(state.export_json.as_ref(), &report.timestamp_utc, "json")?;
    crate::storage::export_json(&path, &report)?;
    Ok(path)
}

/// Export the SVG dashboard. Returns the path written.
pub fn export_dashboard_svg(state: &UiState) -> Result<PathBuf> {
    let timestamp = dashboard::now_utc_rfc3339()?;
    let path = target_path(state.export_svg.as_ref(), &timestamp, "svg")?;
    let svg = crate::svg::render_svg(&state.title, state.dashboard)?;
    crate::storage::export_svg(&path, &svg)?;
    Ok(path)
}

/// Run an export and report the outcome in the status line.
pub fn export_and_show_path(state: &mut UiState, export: fn(&UiState) -> Result<PathBuf>) {
    match export(state) {
        Ok(path) => {
            state.info = format!("Saved: {}", path.display());
            state.last_exported_path = Some(path);
        }
        Err(e) => {
            state.info = format!("Export failed: {e:#}");
        }
    }
}

/// Copy the text summary to the clipboard.
pub fn copy_text_summary(state: &UiState) -> Result<()> {
    let summary = crate::text_summary::build_text_summary(&state.title, state.dashboard)?;
    copy_to_clipboard(&summary.lines.join("\n"))
}

/// Background thread that owns the system clipboard. Copies are queued so the
/// UI never blocks while a selection is being held.
struct ClipboardWorker {
    queue: Sender<String>,
}

impl ClipboardWorker {
    fn spawn() -> Self {
        let (queue, pending) = mpsc::channel::<String>();
        std::thread::spawn(move || {
            while let Ok(text) = pending.recv() {
                let held = arboard::Clipboard::new().and_then(|mut board| {
                    board.set_text(text)?;
                    Ok(board)
                });
                match held {
                    Ok(_board) => std::thread::sleep(CLIPBOARD_HOLD),
                    Err(e) => tracing::debug!("clipboard unavailable: {e}"),
                }
            }
        });
        Self { queue }
    }

    fn send(&self, text: String) -> Result<()> {
        self.queue
            .send(text)
            .map_err(|_| anyhow::anyhow!("clipboard worker stopped"))
    }
}

/// Queue text for the clipboard; returns without waiting for the copy.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    CLIPBOARD
        .get_or_init(ClipboardWorker::spawn)
        .send(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DashboardConfig, OutputMode};

    fn state_with_exports(dir: &std::path::Path) -> UiState {
        let cfg = DashboardConfig {
            title: "Latency".to_string(),
            mode: OutputMode::Tui,
            export_json: Some(dir.join("report.json")),
            export_svg: Some(dir.join("dashboard.svg")),
        };
        UiState::new(&cfg, dashboard::sample_dashboard().unwrap())
    }

    #[test]
    fn exports_go_to_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_with_exports(dir.path());

        export_and_show_path(&mut state, export_dashboard_svg);
        assert_eq!(state.last_exported_path, Some(dir.path().join("dashboard.svg")));
        assert!(state.info.starts_with("Saved: "));

        export_and_show_path(&mut state, export_report_json);
        assert_eq!(state.last_exported_path, Some(dir.path().join("report.json")));
        assert!(dir.path().join("report.json").exists());
    }

    #[test]
    fn default_path_is_filesystem_friendly() {
        let p = default_export_path(Path::new("/tmp"), "2024-05-01T10:20:30Z", "svg");
        assert_eq!(
            p,
            PathBuf::from("/tmp/latency-dashboard-2024-05-01_10-20-30Z.svg")
        );
    }

    #[test]
    fn configured_path_wins_over_default() {
        let configured = PathBuf::from("out/report.json");
        let p = target_path(Some(&configured), "2024-05-01T10:20:30Z", "json").unwrap();
        assert_eq!(p, configured);
    }
}

use crate::dashboard;
use crate::model::{DashboardConfig, OutputMode, Report};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "latency-dashboard",
    version,
    about = "API response time dashboard with optional TUI"
)]
pub struct Cli {
    /// Print the JSON report and exit (no TUI)
    #[arg(long, conflicts_with_all = ["text", "svg"])]
    pub json: bool,

    /// Print the text summary and exit (no TUI)
    #[arg(long, conflicts_with = "svg")]
    pub text: bool,

    /// Print the SVG dashboard and exit (no TUI)
    #[arg(long)]
    pub svg: bool,

    /// Suppress stdout; only write the requested exports
    #[arg(long)]
    pub silent: bool,

    /// Export the report as JSON
    #[arg(long)]
    pub export_json: Option<std::path::PathBuf>,

    /// Export the dashboard as SVG
    #[arg(long)]
    pub export_svg: Option<std::path::PathBuf>,

    /// Dashboard title
    #[arg(long, default_value = "API Response Time Distribution")]
    pub title: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        if self.silent {
            OutputMode::Silent
        } else if self.json {
            OutputMode::Json
        } else if self.text {
            OutputMode::Text
        } else if self.svg {
            OutputMode::Svg
        } else {
            OutputMode::Tui
        }
    }
}

/// Build a `DashboardConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> DashboardConfig {
    DashboardConfig {
        title: args.title.clone(),
        mode: args.output_mode(),
        export_json: args.export_json.clone(),
        export_svg: args.export_svg.clone(),
    }
}

fn validate(args: &Cli) -> Result<()> {
    if args.silent && args.export_json.is_none() && args.export_svg.is_none() {
        return Err(anyhow::anyhow!(
            "--silent needs --export-json or --export-svg, otherwise nothing is produced."
        ));
    }
    if args.silent && (args.json || args.text || args.svg) {
        return Err(anyhow::anyhow!(
            "--silent cannot be combined with --json, --text or --svg."
        ));
    }
    Ok(())
}

pub fn run(args: Cli) -> Result<()> {
    validate(&args)?;
    let cfg = build_config(&args);
    tracing::debug!(?cfg, "dashboard configuration");

    // Exports are written up front in every mode, the TUI included.
    let report = write_exports(&cfg)?;

    if cfg.mode == OutputMode::Tui {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(&cfg);
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return print_text(&cfg, &report);
        }
    }

    match cfg.mode {
        OutputMode::Json => {
            let out = serde_json::to_string_pretty(&report)?;
            write_stdout(&[out])
        }
        OutputMode::Svg => {
            let svg = crate::svg::render_svg(&cfg.title, &report.dashboard)?;
            write_stdout(&[svg])
        }
        OutputMode::Text => print_text(&cfg, &report),
        OutputMode::Silent | OutputMode::Tui => Ok(()),
    }
}

fn print_text(cfg: &DashboardConfig, report: &Report) -> Result<()> {
    let summary = crate::text_summary::build_text_summary(&cfg.title, &report.dashboard)?;
    write_stdout(&summary.lines)
}

fn write_stdout(lines: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = std::io::LineWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{}", line.trim_end_matches('\n')).context("write to stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

/// Build the report and write the `--export-*` files it was asked for.
fn write_exports(cfg: &DashboardConfig) -> Result<Report> {
    let report = dashboard::sample_report(&cfg.title)?;
    handle_exports(cfg, &report)?;
    Ok(report)
}

/// Handle export operations (JSON and SVG).
fn handle_exports(cfg: &DashboardConfig, report: &Report) -> Result<()> {
    if let Some(p) = cfg.export_json.as_deref() {
        crate::storage::export_json(p, report)?;
    }
    if let Some(p) = cfg.export_svg.as_deref() {
        let svg = crate::svg::render_svg(&cfg.title, &report.dashboard)?;
        crate::storage::export_svg(p, &svg)?;
    }
    Ok(())
}

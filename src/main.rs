mod chart;
mod cli;
mod dashboard;
mod metrics;
mod model;
mod samples;
mod storage;
mod svg;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset. The TUI stays quiet so log lines never
/// land on the alternate screen; silent runs only report errors.
fn default_log_level(args: &cli::Cli) -> &'static str {
    if args.verbose {
        return "debug";
    }
    match args.output_mode() {
        model::OutputMode::Tui => "off",
        model::OutputMode::Silent => "error",
        _ => "info",
    }
}

/// Log to stderr. `RUST_LOG` wins over the mode's default level.
fn init_logging(args: &cli::Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(args)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_silent = args.silent;
    init_logging(&args);

    match cli::run(args) {
        Ok(()) => Ok(()),
        Err(e) => {
            if is_silent {
                tracing::error!("{e:#}");
                std::process::exit(1);
            } else {
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(argv: &[&str]) -> &'static str {
        let args = cli::Cli::parse_from(argv.iter().copied());
        default_log_level(&args)
    }

    #[test]
    fn silent_exports_only_log_errors() {
        assert_eq!(
            level_for(&["latency-dashboard", "--silent", "--export-json", "r.json"]),
            "error"
        );
    }

    #[test]
    fn default_levels_per_mode() {
        assert_eq!(level_for(&["latency-dashboard"]), "off");
        assert_eq!(level_for(&["latency-dashboard", "--text"]), "info");
        assert_eq!(level_for(&["latency-dashboard", "--json", "-v"]), "debug");
    }
}

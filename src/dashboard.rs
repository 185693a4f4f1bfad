use crate::metrics;
use crate::model::{Dashboard, Report};
use crate::samples::RESPONSE_TIMES_MS;
use anyhow::{Context, Result};
use std::sync::OnceLock;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

// Computed on first access; the sample set never changes for the life of the process.
static SAMPLE_DASHBOARD: OnceLock<Option<Dashboard>> = OnceLock::new();

/// Dashboard for the recorded batch, computed once and shared by every renderer.
pub fn sample_dashboard() -> Result<&'static Dashboard> {
    SAMPLE_DASHBOARD
        .get_or_init(|| {
            tracing::debug!(
                samples = RESPONSE_TIMES_MS.len(),
                "computing response time statistics"
            );
            metrics::compute_dashboard(&RESPONSE_TIMES_MS)
        })
        .as_ref()
        .context("response time sample set is empty")
}

/// Current UTC time as RFC 3339, used to stamp reports.
pub fn now_utc_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format report timestamp")
}

/// Wrap a dashboard and its input into the exported envelope.
pub fn build_report(title: &str, samples: &[u64], dashboard: &Dashboard) -> Result<Report> {
    Ok(Report {
        timestamp_utc: now_utc_rfc3339()?,
        title: title.to_string(),
        sample_count: samples.len(),
        samples_ms: samples.to_vec(),
        dashboard: dashboard.clone(),
    })
}

/// Report for the recorded batch.
pub fn sample_report(title: &str) -> Result<Report> {
    build_report(title, &RESPONSE_TIMES_MS, sample_dashboard()?)
}

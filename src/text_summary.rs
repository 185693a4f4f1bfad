//! Text summary builder for CLI output.
//!
//! The panel helpers are shared with the terminal UI so both views print the
//! same wording.

use crate::model::{Dashboard, QuartileKind, Summary};
use anyhow::{Context, Result};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

pub(crate) fn stats_panel(summary: &Summary) -> Vec<String> {
    vec![
        format!("Min: {}ms", summary.min_ms),
        format!("Avg: {}ms", summary.mean_ms),
        format!("Max: {}ms", summary.max_ms),
    ]
}

pub(crate) fn common_times_panel(summary: &Summary) -> Vec<String> {
    summary
        .common_times
        .iter()
        .map(|e| format!("{}ms ({} requests)", e.value_ms, e.frequency))
        .collect()
}

pub(crate) fn thresholds_panel(dashboard: &Dashboard) -> Vec<String> {
    [QuartileKind::Q1, QuartileKind::Q2, QuartileKind::Q3]
        .into_iter()
        .map(|kind| {
            format!(
                "{}% under {}ms",
                kind.percent(),
                dashboard.quartile(kind).value_ms
            )
        })
        .collect()
}

/// Key insights, most frequent value first.
pub(crate) fn insights(dashboard: &Dashboard) -> Result<Vec<String>> {
    let summary = &dashboard.summary;
    let top = summary
        .common_times
        .first()
        .context("no response times to summarize")?;
    Ok(vec![
        format!(
            "Most requests ({}) complete in {}ms",
            top.frequency, top.value_ms
        ),
        format!("Average response time is {}ms", summary.mean_ms),
        format!(
            "75% of requests complete in under {}ms",
            dashboard.quartile(QuartileKind::Q3).value_ms
        ),
        format!(
            "Response times range from {}ms to {}ms",
            summary.min_ms, summary.max_ms
        ),
    ])
}

/// Build the full text summary for a dashboard.
pub(crate) fn build_text_summary(title: &str, dashboard: &Dashboard) -> Result<TextSummary> {
    let mut lines = vec![title.to_string(), String::new()];

    lines.push("Response Time Stats".to_string());
    lines.extend(stats_panel(&dashboard.summary).into_iter().map(indent));
    lines.push(String::new());

    lines.push("Most Common Response Times".to_string());
    lines.extend(common_times_panel(&dashboard.summary).into_iter().map(indent));
    lines.push(String::new());

    lines.push("Performance Thresholds".to_string());
    lines.extend(thresholds_panel(dashboard).into_iter().map(indent));
    lines.push(String::new());

    let distribution = dashboard
        .quartiles
        .iter()
        .map(|p| format!("{} {}", p.kind.as_str(), p.label))
        .collect::<Vec<_>>()
        .join(" | ");
    lines.push(format!("Distribution: {distribution}"));
    lines.push(String::new());

    lines.push("Key Insights".to_string());
    lines.extend(insights(dashboard)?.into_iter().map(|l| format!("  - {l}")));

    Ok(TextSummary { lines })
}

fn indent(line: String) -> String {
    format!("  {line}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_dashboard;
    use crate::samples::RESPONSE_TIMES_MS;

    #[test]
    fn recorded_batch_text() {
        let d = compute_dashboard(&RESPONSE_TIMES_MS).unwrap();
        let summary = build_text_summary("API Response Time Distribution", &d).unwrap();
        let text = summary.lines.join("\n");
        assert!(text.starts_with("API Response Time Distribution\n"));
        assert!(text.contains("  Avg: 7.7ms"));
        assert!(text.contains("  2ms (15 requests)"));
        assert!(text.contains("  75% under 10ms"));
        assert!(text.contains("Distribution: Q1 ≤2ms | Q2 ≤4ms | Q3 ≤10ms | Max 61ms"));
        assert!(text.contains("  - Most requests (15) complete in 2ms"));
        assert!(text.ends_with("  - Response times range from 2ms to 61ms"));
    }

    #[test]
    fn whole_mean_prints_without_decimals() {
        let d = compute_dashboard(&[5]).unwrap();
        assert_eq!(stats_panel(&d.summary)[1], "Avg: 5ms");
        assert_eq!(
            insights(&d).unwrap()[1],
            "Average response time is 5ms"
        );
    }

    #[test]
    fn thresholds_follow_quartiles() {
        let d = compute_dashboard(&[40, 10, 30, 20]).unwrap();
        assert_eq!(
            thresholds_panel(&d),
            vec!["25% under 20ms", "50% under 30ms", "75% under 40ms"]
        );
    }
}

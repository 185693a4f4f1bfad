use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputMode {
    Tui,
    Text,
    Json,
    Svg,
    Silent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub title: String,
    pub mode: OutputMode,
    #[serde(default)]
    pub export_json: Option<PathBuf>,
    #[serde(default)]
    pub export_svg: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuartileKind {
    Q1,
    Q2,
    Q3,
    Max,
}

impl QuartileKind {
    /// Axis name shown under each chart point.
    pub fn as_str(self) -> &'static str {
        match self {
            QuartileKind::Q1 => "Q1",
            QuartileKind::Q2 => "Q2",
            QuartileKind::Q3 => "Q3",
            QuartileKind::Max => "Max",
        }
    }

    /// Share of requests at or below this landmark, in percent. `Max` covers everything.
    pub fn percent(self) -> u8 {
        match self {
            QuartileKind::Q1 => 25,
            QuartileKind::Q2 => 50,
            QuartileKind::Q3 => 75,
            QuartileKind::Max => 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuartilePoint {
    pub kind: QuartileKind,
    pub value_ms: u64,
    pub label: String,
}

impl QuartilePoint {
    pub fn new(kind: QuartileKind, value_ms: u64) -> Self {
        let label = match kind {
            QuartileKind::Max => format!("{value_ms}ms"),
            _ => format!("≤{value_ms}ms"),
        };
        Self {
            kind,
            value_ms,
            label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value_ms: u64,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min_ms: u64,
    pub max_ms: u64,
    /// Arithmetic mean rounded to one decimal place.
    pub mean_ms: f64,
    /// Most frequent values, highest count first.
    pub common_times: Vec<FrequencyEntry>,
}

/// Everything a renderer needs. Built once from a sample set, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub quartiles: [QuartilePoint; 4],
    pub summary: Summary,
}

impl Dashboard {
    pub fn quartile(&self, kind: QuartileKind) -> &QuartilePoint {
        let idx = match kind {
            QuartileKind::Q1 => 0,
            QuartileKind::Q2 => 1,
            QuartileKind::Q3 => 2,
            QuartileKind::Max => 3,
        };
        &self.quartiles[idx]
    }
}

/// Exported envelope for `--json` and JSON exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub timestamp_utc: String,
    pub title: String,
    pub sample_count: usize,
    pub samples_ms: Vec<u64>,
    pub dashboard: Dashboard,
}

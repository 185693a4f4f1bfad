use crate::chart::{self, ChartGeometry};
use crate::metrics;
use crate::model::{Dashboard, DashboardConfig, FrequencyEntry};
use crate::samples::RESPONSE_TIMES_MS;
use std::path::PathBuf;

pub const TABS: [&str; 3] = ["Dashboard", "Distribution", "Help"];
pub const HELP_TAB: usize = 2;

/// UI state, owned by the render loop.
pub struct UiState {
    pub tab: usize,
    pub info: String,
    pub title: String,
    pub dashboard: &'static Dashboard,
    pub geometry: ChartGeometry,
    /// Full distribution ordered by value, for the bar chart.
    pub distribution: Vec<FrequencyEntry>,
    pub export_json: Option<PathBuf>,
    pub export_svg: Option<PathBuf>,
    pub last_exported_path: Option<PathBuf>,
}

impl UiState {
    pub fn new(cfg: &DashboardConfig, dashboard: &'static Dashboard) -> Self {
        let mut distribution = metrics::frequency_distribution(&RESPONSE_TIMES_MS);
        distribution.sort_by_key(|e| e.value_ms);
        Self {
            tab: 0,
            info: String::new(),
            title: cfg.title.clone(),
            dashboard,
            geometry: chart::chart_geometry(&dashboard.quartiles),
            distribution,
            export_json: cfg.export_json.clone(),
            export_svg: cfg.export_svg.clone(),
            last_exported_path: None,
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % TABS.len();
    }

    pub fn prev_tab(&mut self) {
        self.tab = (self.tab + TABS.len() - 1) % TABS.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputMode;

    fn state() -> UiState {
        let cfg = DashboardConfig {
            title: "Latency".to_string(),
            mode: OutputMode::Tui,
            export_json: None,
            export_svg: None,
        };
        UiState::new(&cfg, crate::dashboard::sample_dashboard().unwrap())
    }

    #[test]
    fn tabs_wrap_in_both_directions() {
        let mut s = state();
        s.prev_tab();
        assert_eq!(s.tab, HELP_TAB);
        s.next_tab();
        assert_eq!(s.tab, 0);
    }

    #[test]
    fn distribution_is_ordered_by_value_and_complete() {
        let s = state();
        assert!(s.distribution.windows(2).all(|w| w[0].value_ms < w[1].value_ms));
        let total: usize = s.distribution.iter().map(|e| e.frequency).sum();
        assert_eq!(total, RESPONSE_TIMES_MS.len());
        assert_eq!(s.geometry.points.len(), 4);
    }
}

//! Chart geometry for the quartile line chart.
//!
//! Points live in a 0..100 square with y growing downwards (SVG orientation).
//! Renderers take these coordinates as-is; the terminal UI flips them since
//! its chart widget puts the origin at the bottom.

use crate::model::QuartilePoint;
use std::fmt::Write as _;

/// Number of intervals on the y axis; yields one more tick than this.
pub const Y_AXIS_DIVISIONS: u64 = 5;

/// Vertical offset of a value label above its marker.
pub const VALUE_LABEL_OFFSET: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value_ms: u64,
    pub axis_label: &'static str,
    pub label: String,
}

impl ChartPoint {
    /// Height above the baseline, 0..100.
    #[cfg(feature = "tui")]
    pub fn elevation(&self) -> f64 {
        100.0 - self.y
    }

    pub fn value_label(&self) -> String {
        format!("{}ms", self.value_ms)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    /// Tick values from the top of the axis to the bottom.
    pub y_ticks: Vec<u64>,
    /// Value mapped to the top edge.
    pub scale_max_ms: u64,
}

impl ChartGeometry {
    /// `M x y L x y ...` through every point.
    pub fn path(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd} {:.2} {:.2}", p.x, p.y);
        }
        d
    }
}

/// Map quartile points onto the chart square, scaled against the last (Max) point.
pub fn chart_geometry(quartiles: &[QuartilePoint]) -> ChartGeometry {
    let scale_max_ms = quartiles.last().map(|p| p.value_ms).unwrap_or(0);
    let last_idx = quartiles.len().saturating_sub(1);
    let points = quartiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if last_idx == 0 {
                0.0
            } else {
                i as f64 / last_idx as f64 * 100.0
            };
            let y = if scale_max_ms == 0 {
                100.0
            } else {
                100.0 - (p.value_ms as f64 / scale_max_ms as f64) * 100.0
            };
            ChartPoint {
                x,
                y,
                value_ms: p.value_ms,
                axis_label: p.kind.as_str(),
                label: p.label.clone(),
            }
        })
        .collect();
    ChartGeometry {
        points,
        y_ticks: y_axis_ticks(scale_max_ms),
        scale_max_ms,
    }
}

/// Evenly spaced tick values, top first, rounded to whole milliseconds.
pub fn y_axis_ticks(max_ms: u64) -> Vec<u64> {
    (0..=Y_AXIS_DIVISIONS)
        .map(|i| {
            let v = max_ms as f64 * (Y_AXIS_DIVISIONS - i) as f64 / Y_AXIS_DIVISIONS as f64;
            v.round() as u64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_quartiles;
    use crate::samples::RESPONSE_TIMES_MS;

    #[test]
    fn ticks_for_recorded_batch() {
        assert_eq!(y_axis_ticks(61), vec![61, 49, 37, 24, 12, 0]);
        assert_eq!(y_axis_ticks(0), vec![0; 6]);
    }

    #[test]
    fn points_are_spread_across_width_and_scaled_to_max() {
        let q = compute_quartiles(&RESPONSE_TIMES_MS).unwrap();
        let g = chart_geometry(&q);
        let xs: Vec<String> = g.points.iter().map(|p| format!("{:.2}", p.x)).collect();
        assert_eq!(xs, vec!["0.00", "33.33", "66.67", "100.00"]);
        assert_eq!(g.points[3].y, 0.0);
        assert_eq!(g.scale_max_ms, 61);
        assert_eq!(
            g.path(),
            "M 0.00 96.72 L 33.33 93.44 L 66.67 83.61 L 100.00 0.00"
        );
        assert_eq!(g.points[2].axis_label, "Q3");
        assert_eq!(g.points[2].label, "≤10ms");
        assert_eq!(g.points[2].value_label(), "10ms");
    }

    #[test]
    fn all_zero_samples_sit_on_baseline() {
        let q = compute_quartiles(&[0, 0, 0]).unwrap();
        let g = chart_geometry(&q);
        assert!(g.points.iter().all(|p| p.y == 100.0));
    }
}

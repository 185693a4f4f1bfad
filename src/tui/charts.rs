use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::chart::ChartGeometry;
use crate::model::FrequencyEntry;

/// Quartile line chart: Q1, Q2, Q3 and Max joined by a line, scaled against Max.
pub fn draw_quartile_chart(f: &mut Frame, area: Rect, geometry: &ChartGeometry) {
    // Chart widgets put y = 0 at the bottom, so plot elevation rather than SVG y.
    let points: Vec<(f64, f64)> = geometry
        .points
        .iter()
        .map(|p| (p.x, p.elevation()))
        .collect();

    let line = Dataset::default()
        .graph_type(GraphType::Line)
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(Color::Blue))
        .data(&points);
    let markers = Dataset::default()
        .graph_type(GraphType::Scatter)
        .marker(symbols::Marker::Dot)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels: Vec<Span> = geometry
        .points
        .iter()
        .map(|p| Span::raw(format!("{} {}", p.axis_label, p.label)))
        .collect();
    // Axis labels are listed bottom to top; ticks are stored top first.
    let y_labels: Vec<Span> = geometry
        .y_ticks
        .iter()
        .rev()
        .map(|t| Span::styled(format!("{t}ms"), Style::default().fg(Color::Gray)))
        .collect();

    let values = geometry
        .points
        .iter()
        .map(|p| format!("{} {}", p.axis_label, p.value_label()))
        .collect::<Vec<_>>()
        .join("  ");
    let title = Line::from(vec![
        Span::raw("Response time quartiles ("),
        Span::styled(values, Style::default().fg(Color::Blue)),
        Span::raw(")"),
    ]);

    let chart = Chart::new(vec![line, markers])
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(Axis::default().bounds([0.0, 100.0]).labels(x_labels))
        .y_axis(Axis::default().bounds([0.0, 100.0]).labels(y_labels));
    f.render_widget(chart, area);
}

/// Bar chart of every distinct response time and how often it occurred.
pub fn draw_distribution(f: &mut Frame, area: Rect, distribution: &[FrequencyEntry]) {
    if distribution.is_empty() {
        let empty = Paragraph::new("No samples.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Distribution"));
        f.render_widget(empty, area);
        return;
    }

    let max_count = distribution
        .iter()
        .map(|e| e.frequency)
        .max()
        .unwrap_or(1) as u64;

    let bars: Vec<Bar> = distribution
        .iter()
        .map(|e| {
            Bar::default()
                .value(e.frequency as u64)
                .label(Line::from(format!("{}", e.value_ms)))
                .text_value(format!("{}", e.frequency))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    // Chart width minus borders, shared across bars with a one-column gap.
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / distribution.len())
        .saturating_sub(1)
        .clamp(1, 6) as u16;

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Requests per response time (ms)"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(max_count);
    f.render_widget(chart, area);
}

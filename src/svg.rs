//! Standalone SVG rendering of the dashboard.

use crate::chart::{self, ChartGeometry, VALUE_LABEL_OFFSET};
use crate::model::Dashboard;
use crate::text_summary;
use anyhow::Result;
use std::fmt::Write as _;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 760.0;
const MARGIN: f64 = 64.0;
const CARD_Y: f64 = 112.0;
const CARD_HEIGHT: f64 = 120.0;
const CARD_GAP: f64 = 24.0;
const PLOT_X: f64 = 112.0;
const PLOT_Y: f64 = 272.0;
const PLOT_WIDTH: f64 = 592.0;
const PLOT_HEIGHT: f64 = 224.0;
const INSIGHTS_Y: f64 = 560.0;
const INSIGHTS_HEIGHT: f64 = 144.0;
const FONT: &str = "Inter, Segoe UI, sans-serif";

struct Card<'a> {
    title: &'a str,
    fill: &'a str,
    heading: &'a str,
    text: &'a str,
    lines: Vec<String>,
}

/// Render the dashboard as a complete SVG document.
pub fn render_svg(title: &str, dashboard: &Dashboard) -> Result<String> {
    let geometry = chart::chart_geometry(&dashboard.quartiles);
    let insights = text_summary::insights(dashboard)?;
    let cards = [
        Card {
            title: "Response Time Stats",
            fill: "#eff6ff",
            heading: "#1e40af",
            text: "#1d4ed8",
            lines: text_summary::stats_panel(&dashboard.summary),
        },
        Card {
            title: "Most Common Response Times",
            fill: "#f0fdf4",
            heading: "#166534",
            text: "#15803d",
            lines: text_summary::common_times_panel(&dashboard.summary),
        },
        Card {
            title: "Performance Thresholds",
            fill: "#faf5ff",
            heading: "#6b21a8",
            text: "#7e22ce",
            lines: text_summary::thresholds_panel(dashboard),
        },
    ];

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{WIDTH:.0}' height='{HEIGHT:.0}' viewBox='0 0 {WIDTH:.0} {HEIGHT:.0}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{WIDTH:.0}' height='{HEIGHT:.0}' fill='#f3f4f6'/>"
    );
    let _ = writeln!(
        svg,
        "  <rect x='32' y='32' width='{:.0}' height='{:.0}' rx='12' fill='#ffffff'/>",
        WIDTH - 64.0,
        HEIGHT - 64.0
    );
    let _ = writeln!(
        svg,
        "  <text x='{MARGIN:.0}' y='88' fill='#1f2937' font-family='{FONT}' font-size='24' font-weight='700'>{}</text>",
        escape_text(title)
    );

    write_cards(&mut svg, &cards);
    write_chart(&mut svg, &geometry);
    write_insights(&mut svg, &insights);

    let _ = writeln!(svg, "</svg>");
    Ok(svg)
}

fn write_cards(svg: &mut String, cards: &[Card<'_>]) {
    let count = cards.len() as f64;
    let card_width = (WIDTH - 2.0 * MARGIN - (count - 1.0) * CARD_GAP) / count;
    for (index, card) in cards.iter().enumerate() {
        let offset_x = MARGIN + index as f64 * (card_width + CARD_GAP);
        let _ = writeln!(
            svg,
            "  <g transform='translate({offset_x:.2} {CARD_Y:.0})'>"
        );
        let _ = writeln!(
            svg,
            "    <rect width='{card_width:.2}' height='{CARD_HEIGHT:.0}' rx='8' fill='{}'/>",
            card.fill
        );
        let _ = writeln!(
            svg,
            "    <text x='16' y='28' fill='{}' font-family='{FONT}' font-size='13' font-weight='600'>{}</text>",
            card.heading,
            escape_text(card.title)
        );
        for (i, line) in card.lines.iter().enumerate() {
            let _ = writeln!(
                svg,
                "    <text x='16' y='{}' fill='{}' font-family='{FONT}' font-size='13'>{}</text>",
                52 + i * 22,
                card.text,
                escape_text(line)
            );
        }
        let _ = writeln!(svg, "  </g>");
    }
}

fn write_chart(svg: &mut String, geometry: &ChartGeometry) {
    let to_x = |x: f64| PLOT_X + x / 100.0 * PLOT_WIDTH;
    let to_y = |y: f64| PLOT_Y + y / 100.0 * PLOT_HEIGHT;
    let plot_bottom = PLOT_Y + PLOT_HEIGHT;

    // Axes
    let _ = writeln!(
        svg,
        "  <line x1='{PLOT_X:.0}' y1='{PLOT_Y:.0}' x2='{PLOT_X:.0}' y2='{plot_bottom:.0}' stroke='#d1d5db'/>"
    );
    let _ = writeln!(
        svg,
        "  <line x1='{PLOT_X:.0}' y1='{plot_bottom:.0}' x2='{:.0}' y2='{plot_bottom:.0}' stroke='#d1d5db'/>",
        PLOT_X + PLOT_WIDTH
    );

    let intervals = geometry.y_ticks.len().saturating_sub(1).max(1) as f64;
    for (i, tick) in geometry.y_ticks.iter().enumerate() {
        let y = PLOT_Y + i as f64 / intervals * PLOT_HEIGHT;
        let _ = writeln!(
            svg,
            "  <line x1='{:.0}' y1='{y:.2}' x2='{PLOT_X:.0}' y2='{y:.2}' stroke='#d1d5db'/>",
            PLOT_X - 6.0
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.0}' y='{:.2}' text-anchor='end' fill='#4b5563' font-family='{FONT}' font-size='13'>{tick}ms</text>",
            PLOT_X - 10.0,
            y + 4.0
        );
    }

    for p in &geometry.points {
        let x = to_x(p.x);
        let _ = writeln!(
            svg,
            "  <text x='{x:.2}' y='{:.0}' text-anchor='middle' fill='#4b5563' font-family='{FONT}' font-size='13'>{}</text>",
            plot_bottom + 20.0,
            p.axis_label
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.2}' y='{:.0}' text-anchor='middle' fill='#6b7280' font-family='{FONT}' font-size='11'>{}</text>",
            plot_bottom + 36.0,
            escape_text(&p.label)
        );
    }

    // Line drawn in the chart's own 0..100 space, stretched over the plot area.
    let _ = writeln!(
        svg,
        "  <svg x='{PLOT_X:.0}' y='{PLOT_Y:.0}' width='{PLOT_WIDTH:.0}' height='{PLOT_HEIGHT:.0}' viewBox='0 0 100 100' preserveAspectRatio='none' overflow='visible'>"
    );
    let _ = writeln!(
        svg,
        "    <path d='{}' fill='none' stroke='#3b82f6' stroke-width='2' vector-effect='non-scaling-stroke'/>",
        geometry.path()
    );
    let _ = writeln!(svg, "  </svg>");

    let label_offset = VALUE_LABEL_OFFSET / 100.0 * PLOT_HEIGHT;
    for p in &geometry.points {
        let (x, y) = (to_x(p.x), to_y(p.y));
        let _ = writeln!(
            svg,
            "  <circle cx='{x:.2}' cy='{y:.2}' r='4' fill='#3b82f6'/>"
        );
        let _ = writeln!(
            svg,
            "  <text x='{x:.2}' y='{:.2}' text-anchor='middle' fill='#4b5563' font-family='{FONT}' font-size='12'>{}</text>",
            y - label_offset,
            p.value_label()
        );
    }
}

fn write_insights(svg: &mut String, insights: &[String]) {
    let _ = writeln!(
        svg,
        "  <g transform='translate({MARGIN:.0} {INSIGHTS_Y:.0})'>"
    );
    let _ = writeln!(
        svg,
        "    <rect width='{:.0}' height='{INSIGHTS_HEIGHT:.0}' rx='8' fill='#f9fafb'/>",
        WIDTH - 2.0 * MARGIN
    );
    let _ = writeln!(
        svg,
        "    <text x='16' y='28' fill='#1f2937' font-family='{FONT}' font-size='13' font-weight='600'>Key Insights</text>"
    );
    for (i, line) in insights.iter().enumerate() {
        let _ = writeln!(
            svg,
            "    <text x='24' y='{}' fill='#374151' font-family='{FONT}' font-size='13'>• {}</text>",
            52 + i * 22,
            escape_text(line)
        );
    }
    let _ = writeln!(svg, "  </g>");
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

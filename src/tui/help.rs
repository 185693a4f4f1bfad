use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn keybind<'a>(key: &'a str, pad: usize, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(format!("{:pad$}{action}", "")),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds:"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("q", Style::default().fg(Color::Magenta)),
            Span::raw(" / "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw("  Quit"),
        ]),
        keybind("tab", 9, "Switch tabs (shift-tab goes back)"),
        keybind("s", 11, "Export dashboard as SVG"),
        keybind("e", 11, "Export report as JSON"),
        keybind("y", 11, "Copy text summary to clipboard"),
        keybind("?", 11, "Show this help"),
        Line::from(""),
        Line::from("Dashboard tab:"),
        Line::from("  Q1, Q2 and Q3 are nearest-rank quartiles of the recorded batch;"),
        Line::from("  the chart is scaled against the slowest request (Max)."),
        Line::from(""),
        Line::from("Distribution tab:"),
        Line::from("  One bar per distinct response time, labelled in milliseconds."),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}

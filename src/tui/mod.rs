mod charts;
mod export;
mod help;
mod state;

use crate::model::DashboardConfig;
use crate::text_summary;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Terminal,
};
use state::{UiState, HELP_TAB, TABS};
use std::{io, time::Duration};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Run the dashboard until the user quits. The terminal is restored on every exit path.
pub fn run(cfg: &DashboardConfig) -> Result<()> {
    let dashboard = crate::dashboard::sample_dashboard()?;
    let mut state = UiState::new(cfg, dashboard);

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend).context("create terminal") {
        Ok(t) => t,
        Err(e) => {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen).ok();
            return Err(e);
        }
    };
    terminal.clear().ok();

    let res = event_loop(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    res
}

fn event_loop(terminal: &mut Term, state: &mut UiState) -> Result<()> {
    loop {
        terminal
            .draw(|f| draw(f.area(), f, state))
            .context("draw frame")?;

        // Nothing changes between key presses, so block on input with a long timeout.
        if !event::poll(Duration::from_millis(250)).context("poll terminal events")? {
            continue;
        }
        let Event::Key(k) = event::read().context("read terminal event")? else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }
        if handle_key(state, k) {
            return Ok(());
        }
    }
}

/// Apply one key press. Returns true when the user asked to quit.
fn handle_key(state: &mut UiState, k: KeyEvent) -> bool {
    match (k.modifiers, k.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return true,
        (_, KeyCode::Tab) => state.next_tab(),
        (_, KeyCode::BackTab) => state.prev_tab(),
        (_, KeyCode::Char('?')) => state.tab = HELP_TAB,
        (_, KeyCode::Char('s')) => {
            export::export_and_show_path(state, export::export_dashboard_svg);
        }
        (_, KeyCode::Char('e')) => {
            export::export_and_show_path(state, export::export_report_json);
        }
        (_, KeyCode::Char('y')) => {
            state.info = match export::copy_text_summary(state) {
                Ok(()) => "Copied text summary to clipboard".to_string(),
                Err(e) => format!("Copy failed: {e:#}"),
            };
        }
        _ => {}
    }
    false
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(area);

    let tabs = Tabs::new(TABS.iter().map(|t| Line::from(*t)).collect::<Vec<_>>())
        .select(state.tab)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(state.title.as_str()),
        )
        .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match state.tab {
        0 => draw_dashboard(chunks[1], f, state),
        1 => charts::draw_distribution(f, chunks[1], &state.distribution),
        _ => help::draw_help(chunks[1], f),
    }
}

fn panel<'a>(title: &'a str, lines: Vec<String>, color: Color) -> Paragraph<'a> {
    let body: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(color))))
        .collect();
    Paragraph::new(body).block(Block::default().borders(Borders::ALL).title(title))
}

fn draw_dashboard(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5), // stat cards: three lines plus borders
                Constraint::Min(10),   // quartile chart
                Constraint::Length(6), // key insights
                Constraint::Length(3), // status
            ]
            .as_ref(),
        )
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ]
            .as_ref(),
        )
        .split(main[0]);

    let summary = &state.dashboard.summary;
    f.render_widget(
        panel(
            "Response Time Stats",
            text_summary::stats_panel(summary),
            Color::Blue,
        ),
        cards[0],
    );
    f.render_widget(
        panel(
            "Most Common Response Times",
            text_summary::common_times_panel(summary),
            Color::Green,
        ),
        cards[1],
    );
    f.render_widget(
        panel(
            "Performance Thresholds",
            text_summary::thresholds_panel(state.dashboard),
            Color::Magenta,
        ),
        cards[2],
    );

    charts::draw_quartile_chart(f, main[1], &state.geometry);

    let insights = match text_summary::insights(state.dashboard) {
        Ok(lines) => lines.into_iter().map(|l| format!("• {l}")).collect(),
        Err(e) => vec![format!("{e:#}")],
    };
    f.render_widget(panel("Key Insights", insights, Color::White), main[2]);

    let status = if state.info.is_empty() {
        Line::from(vec![
            Span::styled("s", Style::default().fg(Color::Magenta)),
            Span::raw(" svg  "),
            Span::styled("e", Style::default().fg(Color::Magenta)),
            Span::raw(" json  "),
            Span::styled("y", Style::default().fg(Color::Magenta)),
            Span::raw(" copy  "),
            Span::styled("?", Style::default().fg(Color::Magenta)),
            Span::raw(" help  "),
            Span::styled("q", Style::default().fg(Color::Magenta)),
            Span::raw(" quit"),
        ])
    } else {
        Line::from(state.info.as_str())
    };
    let status_title = match state.last_exported_path.as_deref() {
        Some(p) => format!("Status (last export: {})", p.display()),
        None => "Status".to_string(),
    };
    f.render_widget(
        Paragraph::new(status).block(Block::default().borders(Borders::ALL).title(status_title)),
        main[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OutputMode;
    use ratatui::backend::TestBackend;

    fn state_in(dir: &std::path::Path) -> UiState {
        let cfg = DashboardConfig {
            title: "API Response Time Distribution".to_string(),
            mode: OutputMode::Tui,
            export_json: Some(dir.join("report.json")),
            export_svg: Some(dir.join("dashboard.svg")),
        };
        UiState::new(&cfg, crate::dashboard::sample_dashboard().unwrap())
    }

    fn press(state: &mut UiState, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn render(state: &UiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f.area(), f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        // Plain 'c' is not bound.
        assert!(!press(&mut state, KeyCode::Char('c')));
    }

    #[test]
    fn tab_keys_cycle_and_question_mark_opens_help() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        assert!(!press(&mut state, KeyCode::Tab));
        assert_eq!(state.tab, 1);
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.tab, TABS.len() - 1);
        state.tab = 0;
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.tab, HELP_TAB);
    }

    #[test]
    fn export_keys_write_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        assert!(!press(&mut state, KeyCode::Char('s')));
        let svg = std::fs::read_to_string(dir.path().join("dashboard.svg")).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(state.last_exported_path, Some(dir.path().join("dashboard.svg")));

        press(&mut state, KeyCode::Char('e'));
        assert!(dir.path().join("report.json").exists());
        assert_eq!(
            state.info,
            format!("Saved: {}", dir.path().join("report.json").display())
        );
    }

    #[test]
    fn copy_key_reports_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        assert!(!press(&mut state, KeyCode::Char('y')));
        // Headless machines have no clipboard; either way the status line is set.
        assert!(state.info.starts_with("Copied") || state.info.starts_with("Copy failed"));
    }

    #[test]
    fn every_tab_renders_its_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());

        let dashboard = render(&state, 120, 40);
        assert!(dashboard.contains("Most requests (15) complete in 2ms"));
        assert!(dashboard.contains("Response Time Stats"));

        state.tab = 1;
        assert!(render(&state, 120, 40).contains("Requests per response time (ms)"));

        state.tab = HELP_TAB;
        assert!(render(&state, 120, 40).contains("Keybinds:"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(dir.path());
        for tab in 0..TABS.len() {
            state.tab = tab;
            let screen = render(&state, 20, 10);
            assert!(!screen.trim().is_empty());
        }
    }
}

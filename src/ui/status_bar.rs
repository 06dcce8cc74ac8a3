use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use drafttui::model::FetchState;

/// Render the bottom status bar with fetch state and key legend
pub fn render_status_bar(f: &mut Frame, area: Rect, fetch_state: &FetchState) {
    let (state_text, state_style) = match fetch_state {
        FetchState::Loading => ("fetching…".to_string(), Style::default().fg(Color::Yellow)),
        FetchState::Loaded => ("up to date".to_string(), Style::default().fg(Color::Green)),
        FetchState::Failed(reason) => (
            format!("fetch failed: {} (r to retry)", reason),
            Style::default().fg(Color::Red),
        ),
    };

    let line = Line::from(vec![
        Span::styled(state_text, state_style),
        Span::raw("  |  "),
        Span::styled(
            "←↓↑→ move  Enter open  d delete  s sort  r refresh  q quit",
            Style::default().fg(Color::Gray),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

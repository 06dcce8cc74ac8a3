use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use drafttui::SortOrder;

/// Render the title bar with the live draft count and sort indicator
pub fn render_header(f: &mut Frame, area: Rect, draft_count: usize, order: SortOrder) {
    let title = format!("Drafts ({})", draft_count);
    let sort_indicator = format!("Sort: {} (s to toggle)", order.label());

    // Left-align the heading, right-align the sort indicator
    let inner_width = area.width.saturating_sub(2) as usize;
    let padding = inner_width
        .saturating_sub(title.len())
        .saturating_sub(sort_indicator.len());

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(sort_indicator, Style::default().fg(Color::Yellow)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Draft Dashboard"),
    );

    f.render_widget(header, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

use drafttui::api::Entry;
use drafttui::logic::labels::content_type_label;
use drafttui::logic::navigation::GRID_COLUMNS;

use super::layout::CARD_HEIGHT;

/// Truncate a string to the given display width, appending an ellipsis
fn truncate_title(title: &str, max_width: usize) -> String {
    if title.width() <= max_width {
        return title.to_string();
    }

    let mut truncated = String::new();
    for c in title.chars() {
        if truncated.width() + 2 > max_width {
            break;
        }
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

/// Render the responsive 3-column grid of draft cards
///
/// Scrolls by whole rows so the selected card stays visible.
#[allow(clippy::too_many_arguments)]
pub fn render_card_grid(
    f: &mut Frame,
    area: Rect,
    drafts: &[Entry],
    selected: Option<usize>,
    labels: &HashMap<String, String>,
    unknown_type_label: &str,
    locale: &str,
) {
    if drafts.is_empty() {
        let empty = Paragraph::new("No drafts - everything is published.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let total_rows = drafts.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    // Scroll so the selected card's row is always on screen
    let selected_row = selected.unwrap_or(0) / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (screen_row, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let y_offset = (screen_row as u16) * CARD_HEIGHT;
        // Tiny terminals can hand us less than one full card of height
        let row_height = CARD_HEIGHT.min(area.height.saturating_sub(y_offset));
        if row_height == 0 {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y: area.y + y_offset,
            width: area.width,
            height: row_height,
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row_area);

        for column in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + column;
            let Some(entry) = drafts.get(index) else {
                break;
            };
            render_card(
                f,
                columns[column],
                entry,
                selected == Some(index),
                labels,
                unknown_type_label,
                locale,
            );
        }
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    entry: &Entry,
    is_selected: bool,
    labels: &HashMap<String, String>,
    unknown_type_label: &str,
    locale: &str,
) {
    let badge = content_type_label(labels, unknown_type_label, entry.content_type_id());
    let date = crate::utils::format_entry_date(&entry.sys.updated_at);

    let inner_width = area.width.saturating_sub(2) as usize;
    let padding = inner_width
        .saturating_sub(date.width())
        .saturating_sub(badge.width());

    let meta_line = Line::from(vec![
        Span::styled(date, Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            badge,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let title = entry.title(locale).unwrap_or("Untitled");
    let title_line = Line::from(Span::styled(
        truncate_title(title, inner_width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let action_line = Line::from(Span::styled(
        "Enter: open  d: delete",
        Style::default().fg(Color::DarkGray),
    ));

    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let card = Paragraph::new(vec![meta_line, title_line, action_line])
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    f.render_widget(card, area);
}

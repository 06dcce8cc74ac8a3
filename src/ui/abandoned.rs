use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use drafttui::api::Entry;

/// Render the flat list of abandoned entry ids
///
/// Entries without a title have nothing meaningful to show and no actions;
/// only their ids are listed.
pub fn render_abandoned(f: &mut Frame, area: Rect, abandoned: &[Entry]) {
    let items: Vec<ListItem> = abandoned
        .iter()
        .map(|entry| ListItem::new(entry.sys.id.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Abandoned ({})", abandoned.len())),
        )
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(list, area);
}

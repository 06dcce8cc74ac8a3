use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation dialog
///
/// Negative intent: red border, explicit yes/no labels. `y` confirms,
/// `n`/Esc cancels.
pub fn render_delete_confirmation(f: &mut Frame, entry_title: &str) {
    let prompt_text = format!(
        "Delete \"{}\"?\n\n\
        This removes the entry from the content store.\n\n\
        Yes! (y)    No... (n)",
        entry_title
    );

    // Center the prompt
    let area = f.area();
    let prompt_width = 50;
    let prompt_height = 9;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width.min(area.width),
        height: prompt_height.min(area.height),
    };

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Are you sure?")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use drafttui::model::FetchState;

use crate::App;

use super::{abandoned, card_grid, dialogs, header, layout, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    let Some(partitioned) = app.model.entries.partitioned.as_ref() else {
        // Nothing fetched yet
        let placeholder = match &app.model.entries.fetch_state {
            FetchState::Failed(reason) => Paragraph::new(format!(
                "Failed to load drafts: {}\n\nPress r to retry, q to quit.",
                reason
            ))
            .style(Style::default().fg(Color::Red)),
            _ => Paragraph::new("loading"),
        };
        f.render_widget(placeholder, size);
        return;
    };

    let layout_info = layout::calculate_layout(size, partitioned.abandoned.len());

    header::render_header(
        f,
        layout_info.header_area,
        partitioned.drafts.len(),
        app.model.ui.order,
    );

    card_grid::render_card_grid(
        f,
        layout_info.grid_area,
        &partitioned.drafts,
        app.model.ui.selected_draft,
        &app.content_type_labels,
        &app.unknown_type_label,
        &app.default_locale,
    );

    if let Some(abandoned_area) = layout_info.abandoned_area {
        abandoned::render_abandoned(f, abandoned_area, &partitioned.abandoned);
    }

    status_bar::render_status_bar(f, layout_info.status_area, &app.model.entries.fetch_state);

    // Render the confirmation dialog if active
    if let Some(confirm) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, &confirm.title);
    }

    // Render toast notification if active
    if let Some((kind, message, _shown_at)) = &app.model.ui.toast {
        toast::render_toast(f, size, *kind, message);
    }
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one draft card including its borders
pub const CARD_HEIGHT: u16 = 5;

/// Maximum abandoned entries listed before the block scroll-truncates
const ABANDONED_MAX_ROWS: u16 = 5;

/// Computed screen areas for one frame
#[derive(Debug, Clone, Copy)]
pub struct LayoutInfo {
    pub header_area: Rect,
    pub grid_area: Rect,
    pub abandoned_area: Option<Rect>,
    pub status_area: Rect,
}

/// Split the screen into header, draft grid, abandoned list and status bar
pub fn calculate_layout(size: Rect, abandoned_count: usize) -> LayoutInfo {
    let abandoned_height = if abandoned_count == 0 {
        0
    } else {
        // Entries plus the block borders
        (abandoned_count as u16).min(ABANDONED_MAX_ROWS) + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(abandoned_height),
            Constraint::Length(1),
        ])
        .split(size);

    LayoutInfo {
        header_area: chunks[0],
        grid_area: chunks[1],
        abandoned_area: (abandoned_height > 0).then_some(chunks[2]),
        status_area: chunks[3],
    }
}

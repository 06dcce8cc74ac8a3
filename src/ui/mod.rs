// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, grid, abandoned list, status bar)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the title bar with draft count and sort indicator
// - card_grid: Renders the 3-column draft card grid
// - abandoned: Renders the flat list of abandoned entry ids
// - status_bar: Renders bottom status bar with fetch state and key legend
// - dialogs: Renders the delete confirmation dialog
// - toast: Renders toast notifications (brief pop-up messages)

pub mod abandoned;
pub mod card_grid;
pub mod dialogs;
pub mod header;
pub mod layout;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;

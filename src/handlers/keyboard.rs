//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use drafttui::logic::navigation::Direction;

use crate::services::ApiRequest;
use crate::App;

/// Handle keyboard input
///
/// Processes keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Handle the delete confirmation prompt first
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                // User confirmed - delete the entry
                if let Some(entry_id) = app.model.take_confirmed_delete() {
                    let _ = app.api_tx.send(ApiRequest::DeleteEntry { entry_id });
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // User cancelled - no delete, no notification
                app.model.cancel_confirm_delete();
            }
            _ => {
                // Ignore other keys while prompt is showing
            }
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true;
        }

        // Card grid navigation
        KeyCode::Left | KeyCode::Char('h') => app.model.move_selection(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.model.move_selection(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => app.model.move_selection(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.model.move_selection(Direction::Down),

        // Open the selected entry in the web app (fire-and-forget)
        KeyCode::Enter | KeyCode::Char('o') => {
            app.open_selected_entry();
        }

        // Ask before deleting
        KeyCode::Char('d') | KeyCode::Delete => {
            let locale = app.default_locale.clone();
            app.model.request_delete(&locale);
        }

        // Flip sort order; the event loop refetches with the new value
        KeyCode::Char('s') | KeyCode::Tab => {
            app.model.ui.toggle_order();
        }

        // Manual refresh, doubles as retry after a failed fetch
        KeyCode::Char('r') => {
            app.model.entries.request_refresh();
        }

        _ => {}
    }

    Ok(())
}

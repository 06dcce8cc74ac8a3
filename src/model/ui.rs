//! UI Model
//!
//! Sort order, card selection, the delete confirmation dialog, toasts and
//! the quit flag.

use std::time::Instant;

use crate::SortOrder;

/// Toast severity, mirrored in the toast styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// State of the delete confirmation dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDelete {
    pub entry_id: String,
    /// Entry title interpolated into the dialog message
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Current listing sort order, sent as the `order` query parameter
    pub order: SortOrder,

    /// Selected card index within the draft grid
    pub selected_draft: Option<usize>,

    /// Delete confirmation dialog, when open
    pub confirm_delete: Option<ConfirmDelete>,

    /// Toast message (kind, text, shown-at)
    pub toast: Option<(ToastKind, String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            order: SortOrder::default(),
            selected_draft: None,
            confirm_delete: None,
            toast: None,
            should_quit: false,
        }
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: String) {
        self.toast = Some((kind, message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, _, shown_at)) = &self.toast {
            crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

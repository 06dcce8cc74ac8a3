//! Pure Application Model
//!
//! Cloneable state for the dashboard, split into focused sub-models:
//!
//! - **EntriesModel**: fetched entries, fetch state, refetch counters
//! - **UiModel**: sort order, card selection, dialogs, toasts
//!
//! All I/O lives outside the model; event handlers call into it and the
//! render path only reads from it.

pub mod entries;
pub mod ui;

pub use entries::{EntriesModel, FetchState};
pub use ui::{ConfirmDelete, ToastKind, UiModel};

use crate::api::Entry;
use crate::logic;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Entry data and fetch lifecycle
    pub entries: EntriesModel,

    /// UI preferences, selection and popups
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            entries: EntriesModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Currently selected draft card (if any)
    pub fn selected_draft(&self) -> Option<&Entry> {
        let partitioned = self.entries.partitioned.as_ref()?;
        self.ui
            .selected_draft
            .and_then(|idx| partitioned.drafts.get(idx))
    }

    /// Move the card selection within the draft grid
    pub fn move_selection(&mut self, direction: logic::navigation::Direction) {
        let len = self.entries.draft_count();
        self.ui.selected_draft = logic::navigation::move_selection(self.ui.selected_draft, len, direction);
    }

    /// Keep the selection in range after the draft list changed
    pub fn clamp_selection(&mut self) {
        let len = self.entries.draft_count();
        self.ui.selected_draft = logic::navigation::clamp_selection(self.ui.selected_draft, len);
    }

    /// Open the delete confirmation dialog for the selected draft
    pub fn request_delete(&mut self, locale: &str) {
        let confirm = self.selected_draft().map(|entry| ConfirmDelete {
            entry_id: entry.sys.id.clone(),
            title: entry.title(locale).unwrap_or("Untitled").to_string(),
        });
        if confirm.is_some() {
            self.ui.confirm_delete = confirm;
        }
    }

    /// Resolve the confirmation dialog affirmatively
    ///
    /// Returns the entry id to delete; the dialog closes either way.
    pub fn take_confirmed_delete(&mut self) -> Option<String> {
        self.ui.confirm_delete.take().map(|c| c.entry_id)
    }

    /// Resolve the confirmation dialog negatively: no delete, no toast
    pub fn cancel_confirm_delete(&mut self) {
        self.ui.confirm_delete = None;
    }

    /// Record the outcome of a delete request
    ///
    /// Success bumps the deletion counter (the sole refetch trigger for
    /// deletes); the entry itself stays on screen until the refetch lands.
    /// Failure leaves all entry state untouched.
    pub fn apply_delete_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.ui.show_toast(ToastKind::Success, "Entry deleted".to_string());
                self.entries.record_deletion();
            }
            Err(_) => {
                self.ui
                    .show_toast(ToastKind::Error, "Something went wrong...".to_string());
            }
        }
    }

    pub fn has_modal(&self) -> bool {
        self.ui.confirm_delete.is_some()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

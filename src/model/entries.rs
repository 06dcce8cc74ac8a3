//! Entries Model
//!
//! Holds the result of the last applied fetch and everything that drives
//! refetching: the deletion counter, the manual refresh serial, and the
//! request id sequence guarding against stale responses.

use crate::api::Entry;
use crate::logic::partition::{partition_entries, PartitionedEntries};
use crate::logic::refresh;

/// Observable fetch lifecycle
///
/// `Failed` is an explicit state so the UI can offer a retry instead of
/// silently showing stale data forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct EntriesModel {
    /// Lifecycle of the latest fetch
    pub fetch_state: FetchState,

    /// Entries from the last applied fetch; None before the first one lands.
    /// Kept through refetches and failures (stale-while-revalidate).
    pub partitioned: Option<PartitionedEntries>,

    /// Bumped once per successful delete; a pure refetch trigger
    pub deletion_counter: u64,

    /// Bumped on manual refresh/retry
    pub refresh_serial: u64,

    /// Id of the most recently issued list request
    latest_request_id: u64,
}

impl EntriesModel {
    pub fn new() -> Self {
        Self {
            fetch_state: FetchState::Loading,
            partitioned: None,
            deletion_counter: 0,
            refresh_serial: 0,
            latest_request_id: 0,
        }
    }

    /// Issue a new request id; responses carrying older ids are stale
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_request_id += 1;
        self.latest_request_id
    }

    pub fn latest_request_id(&self) -> u64 {
        self.latest_request_id
    }

    /// Apply a list response if it belongs to the latest issued request
    ///
    /// Returns false when the response was stale and dropped. On success the
    /// partition replaces prior state wholesale; on failure prior data stays
    /// and only the fetch state changes.
    pub fn apply_list_result(
        &mut self,
        request_id: u64,
        result: Result<Vec<Entry>, String>,
    ) -> bool {
        if !refresh::is_current_response(request_id, self.latest_request_id) {
            return false;
        }

        match result {
            Ok(entries) => {
                self.partitioned = Some(partition_entries(entries));
                self.fetch_state = FetchState::Loaded;
            }
            Err(message) => {
                self.fetch_state = FetchState::Failed(message);
            }
        }
        true
    }

    /// Record one successful delete
    pub fn record_deletion(&mut self) {
        self.deletion_counter += 1;
    }

    /// Request a manual refetch (also the retry affordance after Failed)
    pub fn request_refresh(&mut self) {
        self.refresh_serial += 1;
    }

    pub fn draft_count(&self) -> usize {
        self.partitioned.as_ref().map(|p| p.drafts.len()).unwrap_or(0)
    }

    pub fn abandoned_count(&self) -> usize {
        self.partitioned
            .as_ref()
            .map(|p| p.abandoned.len())
            .unwrap_or(0)
    }
}

impl Default for EntriesModel {
    fn default() -> Self {
        Self::new()
    }
}

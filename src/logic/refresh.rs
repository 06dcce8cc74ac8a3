//! Refetch dependency tracking
//!
//! The listing is re-fetched whenever any of its dependencies change: the
//! sort order, the deletion counter (bumped once per successful delete), or
//! the manual refresh serial. The counters' values are irrelevant; only
//! change matters.

use crate::SortOrder;

/// Dependencies of the entry listing: (order, deletion counter, refresh serial)
pub type FetchDeps = (SortOrder, u64, u64);

/// True when a new list request must be issued
pub fn needs_refetch(current: FetchDeps, last_issued: Option<FetchDeps>) -> bool {
    last_issued != Some(current)
}

/// True when a list response belongs to the most recently issued request
///
/// In-flight requests race when the user interacts quickly; only the response
/// matching the latest request id may be applied.
pub fn is_current_response(request_id: u64, latest_request_id: u64) -> bool {
    request_id == latest_request_id
}

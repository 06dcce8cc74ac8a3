//! Tests for the stale list-response guard
//!
//! List requests race when the user flips the sort order or deletes quickly.
//! Every request carries a monotonically increasing id and only the response
//! matching the latest issued id may be applied; completion order is
//! irrelevant.

use drafttui::api::Entry;
use drafttui::model::{FetchState, Model};

fn entries(ids: &[&str]) -> Vec<Entry> {
    ids.iter()
        .map(|id| {
            serde_json::from_value(serde_json::json!({
                "sys": { "id": id, "updatedAt": "2025-06-01T10:00:00Z" },
                "fields": { "title": { "en-US": id.to_string() } }
            }))
            .unwrap()
        })
        .collect()
}

fn draft_ids(model: &Model) -> Vec<String> {
    model
        .entries
        .partitioned
        .as_ref()
        .map(|p| p.drafts.iter().map(|e| e.sys.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_slow_first_response_is_dropped() {
    let mut model = Model::new();

    // Two requests in flight; the older one resolves last
    let first = model.entries.begin_fetch();
    let second = model.entries.begin_fetch();

    assert!(model.entries.apply_list_result(second, Ok(entries(&["new"]))));
    assert!(!model.entries.apply_list_result(first, Ok(entries(&["old"]))));

    assert_eq!(draft_ids(&model), vec!["new"]);
}

#[test]
fn test_stale_error_does_not_clobber_fresh_data() {
    let mut model = Model::new();

    let first = model.entries.begin_fetch();
    let second = model.entries.begin_fetch();

    assert!(model.entries.apply_list_result(second, Ok(entries(&["new"]))));
    assert!(!model
        .entries
        .apply_list_result(first, Err("timed out".to_string())));

    assert_eq!(model.entries.fetch_state, FetchState::Loaded);
    assert_eq!(draft_ids(&model), vec!["new"]);
}

#[test]
fn test_current_error_is_observable_and_keeps_data() {
    let mut model = Model::new();

    let request_id = model.entries.begin_fetch();
    model
        .entries
        .apply_list_result(request_id, Ok(entries(&["a"])));

    let request_id = model.entries.begin_fetch();
    model
        .entries
        .apply_list_result(request_id, Err("connection refused".to_string()));

    // Failure is an explicit state, the stale grid stays for revalidation
    assert_eq!(
        model.entries.fetch_state,
        FetchState::Failed("connection refused".to_string())
    );
    assert_eq!(draft_ids(&model), vec!["a"]);
}

#[test]
fn test_selection_clamps_when_draft_list_shrinks() {
    let mut model = Model::new();

    let request_id = model.entries.begin_fetch();
    model
        .entries
        .apply_list_result(request_id, Ok(entries(&["a", "b", "c"])));
    model.ui.selected_draft = Some(2);

    let request_id = model.entries.begin_fetch();
    model.entries.apply_list_result(request_id, Ok(entries(&["a"])));
    model.clamp_selection();

    assert_eq!(model.ui.selected_draft, Some(0));
}

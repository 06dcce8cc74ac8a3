//! Tests for the draft/abandoned partition
//!
//! Membership is decided solely by truthiness of the `title` field, and the
//! partition must account for exactly the entries the fetch returned.

use drafttui::api::Entry;
use drafttui::logic::partition::{is_draft, partition_entries};

fn entry(id: &str, fields: serde_json::Value) -> Entry {
    serde_json::from_value(serde_json::json!({
        "sys": {
            "id": id,
            "updatedAt": "2025-06-01T10:00:00Z",
            "contentType": { "sys": { "id": "note" } }
        },
        "fields": fields
    }))
    .unwrap()
}

#[test]
fn test_hello_and_null_title_scenario() {
    // entries = [{id:"a", title:"Hello"}, {id:"b", title:null}]
    let entries = vec![
        entry("a", serde_json::json!({ "title": { "en-US": "Hello" } })),
        entry("b", serde_json::json!({ "title": null })),
    ];

    let partitioned = partition_entries(entries);

    assert_eq!(partitioned.drafts.len(), 1);
    assert_eq!(partitioned.drafts[0].sys.id, "a");
    assert_eq!(partitioned.abandoned.len(), 1);
    assert_eq!(partitioned.abandoned[0].sys.id, "b");
}

#[test]
fn test_partition_sizes_always_sum_to_total() {
    let entries = vec![
        entry("1", serde_json::json!({ "title": { "en-US": "First" } })),
        entry("2", serde_json::json!({})),
        entry("3", serde_json::json!({ "title": null })),
        entry("4", serde_json::json!({ "title": { "de-DE": "Vierte" } })),
        entry("5", serde_json::json!({ "body": { "en-US": "no title field" } })),
        entry("6", serde_json::json!({ "title": "plain string title" })),
    ];
    let total = entries.len();

    let partitioned = partition_entries(entries);

    assert_eq!(partitioned.drafts.len() + partitioned.abandoned.len(), total);
    assert_eq!(partitioned.total(), total);
    assert_eq!(partitioned.drafts.len(), 3);
}

#[test]
fn test_membership_only_depends_on_title() {
    // A rich entry without a title is still abandoned
    let rich = entry(
        "rich",
        serde_json::json!({
            "body": { "en-US": "lots of text" },
            "tags": { "en-US": ["a", "b"] }
        }),
    );
    assert!(!is_draft(&rich));

    // A bare entry with only a title is a draft
    let bare = entry("bare", serde_json::json!({ "title": { "en-US": "t" } }));
    assert!(is_draft(&bare));
}

#[test]
fn test_falsy_title_values_are_abandoned() {
    for (id, title) in [
        ("null", serde_json::json!(null)),
        ("false", serde_json::json!(false)),
        ("zero", serde_json::json!(0)),
        ("empty", serde_json::json!("")),
    ] {
        let e = entry(id, serde_json::json!({ "title": title }));
        assert!(!is_draft(&e), "title {:?} should not count as a draft", id);
    }
}

#[test]
fn test_entry_without_fields_object_is_abandoned() {
    let e: Entry = serde_json::from_value(serde_json::json!({
        "sys": { "id": "bare", "updatedAt": "2025-06-01T10:00:00Z" }
    }))
    .unwrap();

    assert!(!is_draft(&e));
}

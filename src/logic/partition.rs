//! Draft/abandoned classification
//!
//! Entries returned by the unpublished listing fall into exactly two buckets:
//! "drafts" carry a usable title, "abandoned" were created and never filled
//! in. The split is decided solely by the truthiness of the `title` field.

use serde_json::Value;

use crate::api::Entry;

/// Entries from the last fetch, split by title presence
///
/// `drafts` and `abandoned` together always hold exactly the entries the
/// fetch returned; nothing is dropped or duplicated.
#[derive(Debug, Clone, Default)]
pub struct PartitionedEntries {
    pub drafts: Vec<Entry>,
    pub abandoned: Vec<Entry>,
}

impl PartitionedEntries {
    pub fn total(&self) -> usize {
        self.drafts.len() + self.abandoned.len()
    }
}

/// Truthiness of a field value: null, false, 0 and "" count as absent
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An entry is a draft iff its field bag contains a truthy `title`
pub fn is_draft(entry: &Entry) -> bool {
    entry.fields.get("title").map(is_truthy).unwrap_or(false)
}

/// Split fetched entries into drafts and abandoned, preserving fetch order
pub fn partition_entries(entries: Vec<Entry>) -> PartitionedEntries {
    let mut partitioned = PartitionedEntries::default();
    for entry in entries {
        if is_draft(&entry) {
            partitioned.drafts.push(entry);
        } else {
            partitioned.abandoned.push(entry);
        }
    }
    partitioned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: &str, title: Value) -> Entry {
        let mut value = serde_json::json!({
            "sys": { "id": id, "updatedAt": "2025-01-01T00:00:00Z" },
            "fields": {}
        });
        value["fields"]["title"] = title;
        serde_json::from_value(value).unwrap()
    }

    fn make_entry_without_fields(id: &str) -> Entry {
        serde_json::from_value(serde_json::json!({
            "sys": { "id": id, "updatedAt": "2025-01-01T00:00:00Z" }
        }))
        .unwrap()
    }

    #[test]
    fn test_localized_title_is_draft() {
        let entry = make_entry("a", serde_json::json!({ "en-US": "Hello" }));
        assert!(is_draft(&entry));
    }

    #[test]
    fn test_null_title_is_abandoned() {
        let entry = make_entry("b", Value::Null);
        assert!(!is_draft(&entry));
    }

    #[test]
    fn test_missing_fields_is_abandoned() {
        let entry = make_entry_without_fields("c");
        assert!(!is_draft(&entry));
    }

    #[test]
    fn test_empty_string_title_is_abandoned() {
        let entry = make_entry("d", Value::String(String::new()));
        assert!(!is_draft(&entry));
    }

    #[test]
    fn test_partition_hello_and_null() {
        // entries = [{id:"a", title:"Hello"}, {id:"b", title:null}]
        let entries = vec![
            make_entry("a", serde_json::json!({ "en-US": "Hello" })),
            make_entry("b", Value::Null),
        ];

        let partitioned = partition_entries(entries);

        assert_eq!(partitioned.drafts.len(), 1);
        assert_eq!(partitioned.drafts[0].sys.id, "a");
        assert_eq!(partitioned.abandoned.len(), 1);
        assert_eq!(partitioned.abandoned[0].sys.id, "b");
    }

    #[test]
    fn test_partition_accounts_for_every_entry() {
        let entries = vec![
            make_entry("1", serde_json::json!({ "en-US": "One" })),
            make_entry("2", Value::Null),
            make_entry_without_fields("3"),
            make_entry("4", serde_json::json!({ "de-DE": "Vier" })),
            make_entry("5", Value::String(String::new())),
            make_entry("6", Value::Bool(false)),
        ];
        let total = entries.len();

        let partitioned = partition_entries(entries);

        assert_eq!(partitioned.total(), total);
        assert_eq!(partitioned.drafts.len(), 2);
        assert_eq!(partitioned.abandoned.len(), 4);
    }

    #[test]
    fn test_partition_preserves_fetch_order() {
        let entries = vec![
            make_entry("z", serde_json::json!({ "en-US": "Z" })),
            make_entry("a", serde_json::json!({ "en-US": "A" })),
        ];

        let partitioned = partition_entries(entries);

        // Server-side sort order must survive the partition untouched
        assert_eq!(partitioned.drafts[0].sys.id, "z");
        assert_eq!(partitioned.drafts[1].sys.id, "a");
    }
}

//! Content-type badge labels
//!
//! The label map comes from configuration and is passed into the render
//! path. Content types absent from the map get the configured fallback
//! label instead of an empty badge.

use std::collections::HashMap;

/// Resolve the badge label for a content type id
pub fn content_type_label<'a>(
    labels: &'a HashMap<String, String>,
    fallback: &'a str,
    content_type_id: Option<&str>,
) -> &'a str {
    content_type_id
        .and_then(|id| labels.get(id))
        .map(String::as_str)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_map() -> HashMap<String, String> {
        let mut labels = HashMap::new();
        labels.insert("tilPost".to_string(), "TIL".to_string());
        labels.insert("note".to_string(), "Note".to_string());
        labels
    }

    #[test]
    fn test_mapped_type_uses_label() {
        let labels = label_map();
        assert_eq!(content_type_label(&labels, "Other", Some("tilPost")), "TIL");
        assert_eq!(content_type_label(&labels, "Other", Some("note")), "Note");
    }

    #[test]
    fn test_unmapped_type_uses_fallback() {
        let labels = label_map();
        assert_eq!(
            content_type_label(&labels, "Other", Some("2wKn6yEnZewu2SCCkus4as")),
            "Other"
        );
    }

    #[test]
    fn test_missing_content_type_uses_fallback() {
        let labels = label_map();
        assert_eq!(content_type_label(&labels, "Other", None), "Other");
    }
}

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::SortOrder;

/// Link to the content type an entry was created from
#[derive(Debug, Clone, Deserialize)]
pub struct ContentTypeLink {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkSys {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub id: String,
    #[serde(default)]
    pub updated_at: String,
    pub content_type: Option<ContentTypeLink>,
    // Presence means the entry is archived/published. The listing filter
    // excludes both, so these stay None on fetched entries.
    #[serde(default)]
    pub archived_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// A content entry as returned by the management API
///
/// `fields` maps field name -> locale -> value. Entries created and never
/// filled in can have an empty or entirely missing field bag.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub sys: EntrySys,
    #[serde(default)]
    pub fields: serde_json::Map<String, Value>,
}

impl Entry {
    /// Content type id, if the link is present
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.content_type.as_ref().map(|ct| ct.sys.id.as_str())
    }

    /// Title in the given locale, falling back to any localized value
    pub fn title(&self, locale: &str) -> Option<&str> {
        let title = self.fields.get("title")?;
        if let Some(s) = title.get(locale).and_then(Value::as_str) {
            return Some(s);
        }
        // Fall back to whichever locale the title was written in
        title
            .as_object()
            .and_then(|locales| locales.values().find_map(Value::as_str))
    }
}

#[derive(Debug, Deserialize)]
struct EntryCollection {
    items: Vec<Entry>,
}

#[derive(Clone)]
pub struct ContentClient {
    base_url: String,
    space_id: String,
    environment_id: String,
    access_token: String,
    client: Client,
}

impl ContentClient {
    pub fn new(
        base_url: String,
        space_id: String,
        environment_id: String,
        access_token: String,
    ) -> Self {
        Self {
            base_url,
            space_id,
            environment_id,
            access_token,
            client: Client::new(),
        }
    }

    fn entries_url(&self) -> String {
        format!(
            "{}/spaces/{}/environments/{}/entries",
            self.base_url,
            urlencoding::encode(&self.space_id),
            urlencoding::encode(&self.environment_id)
        )
    }

    /// Fetch all entries that are neither archived nor published,
    /// sorted server-side by the given order
    pub async fn list_unpublished_entries(&self, order: SortOrder) -> Result<Vec<Entry>> {
        let url = format!(
            "{}?{}=false&{}=false&order={}",
            self.entries_url(),
            urlencoding::encode("sys.archivedAt[exists]"),
            urlencoding::encode("sys.publishedAt[exists]"),
            order.as_query_param()
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("Failed to fetch entries")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!("API error {}: {}", status, error_text));
        }

        let collection: EntryCollection = response
            .json()
            .await
            .context("Failed to parse entry collection")?;

        Ok(collection.items)
    }

    /// Delete an entry by id
    pub async fn delete_entry(&self, entry_id: &str) -> Result<()> {
        let url = format!(
            "{}/{}",
            self.entries_url(),
            urlencoding::encode(entry_id)
        );

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .context("Failed to delete entry")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to delete entry {}: {} - {}", entry_id, status, text);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_with_localized_fields() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "sys": {
                "id": "abc123",
                "updatedAt": "2025-06-01T10:00:00Z",
                "contentType": { "sys": { "id": "note" } }
            },
            "fields": {
                "title": { "en-US": "Hello" }
            }
        }))
        .unwrap();

        assert_eq!(entry.sys.id, "abc123");
        assert_eq!(entry.content_type_id(), Some("note"));
        assert_eq!(entry.title("en-US"), Some("Hello"));
    }

    #[test]
    fn test_entry_deserializes_without_fields() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "sys": { "id": "empty", "updatedAt": "2025-06-01T10:00:00Z" }
        }))
        .unwrap();

        assert!(entry.fields.is_empty());
        assert_eq!(entry.title("en-US"), None);
        assert_eq!(entry.content_type_id(), None);
    }

    #[test]
    fn test_title_falls_back_to_other_locale() {
        let entry: Entry = serde_json::from_value(serde_json::json!({
            "sys": { "id": "de", "updatedAt": "" },
            "fields": { "title": { "de-DE": "Hallo" } }
        }))
        .unwrap();

        assert_eq!(entry.title("en-US"), Some("Hallo"));
    }
}

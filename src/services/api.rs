use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc;

use drafttui::api::{ContentClient, Entry};
use drafttui::SortOrder;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !crate::DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crate::utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List unpublished, unarchived entries sorted by `order`.
    /// `request_id` rides along so stale responses can be recognized.
    ListEntries { order: SortOrder, request_id: u64 },

    /// Delete an entry by id
    DeleteEntry { entry_id: String },
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    Entries {
        request_id: u64,
        result: Result<Vec<Entry>, anyhow::Error>,
    },

    Deleted {
        entry_id: String,
        result: Result<(), anyhow::Error>,
    },
}

/// Execute an API request and return the response
async fn execute_request(client: &ContentClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::ListEntries { order, request_id } => {
            log_debug(&format!(
                "DEBUG [API Service]: ListEntries order={} id={}",
                order.as_query_param(),
                request_id
            ));
            let result = client.list_unpublished_entries(order).await;

            ApiResponse::Entries { request_id, result }
        }

        ApiRequest::DeleteEntry { entry_id } => {
            let result = client.delete_entry(&entry_id).await;

            log_debug(&format!(
                "DEBUG [API Service]: DeleteEntry id={} success={}",
                entry_id,
                result.is_ok()
            ));

            ApiResponse::Deleted { entry_id, result }
        }
    }
}

/// Spawn the API service worker
///
/// Each request runs in its own task: deletes stay independent of each other
/// and of in-flight list requests, exactly as the UI expects.
pub fn spawn_api_service(
    client: ContentClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}

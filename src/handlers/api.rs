//! API Response Handler
//!
//! Applies background service responses to the model. Pure with respect to
//! I/O: refetching is driven by model state, never issued from here.

use drafttui::model::Model;

use crate::log_debug;
use crate::services::ApiResponse;

/// Handle an API response from the background worker
pub fn handle_api_response(model: &mut Model, response: ApiResponse) {
    match response {
        ApiResponse::Entries { request_id, result } => {
            let result = result.map_err(|e| e.to_string());
            let applied = model.entries.apply_list_result(request_id, result);

            if applied {
                // Draft list may have shrunk under the selection
                model.clamp_selection();
            } else {
                log_debug(&format!(
                    "Dropped stale entries response (id={}, latest={})",
                    request_id,
                    model.entries.latest_request_id()
                ));
            }
        }

        ApiResponse::Deleted { entry_id, result } => {
            if let Err(e) = &result {
                log_debug(&format!("Failed to delete entry {}: {}", entry_id, e));
            }
            model.apply_delete_result(result.map_err(|e| e.to_string()));
        }
    }
}

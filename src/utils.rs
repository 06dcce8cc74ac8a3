//! Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("drafttui-debug.log");
    path
}

/// Format an entry's RFC 3339 update timestamp as a short day string
///
/// Falls back to the raw date part when the timestamp doesn't parse.
pub fn format_entry_date(updated_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(updated_at) {
        Ok(dt) => dt.format("%d %b %Y").to_string(),
        Err(_) => updated_at.split('T').next().unwrap_or(updated_at).to_string(),
    }
}

//! UI state transitions

/// Toast lifetime in milliseconds
const TOAST_DURATION_MS: u128 = 1500;

/// Check if a toast has outlived its display window
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

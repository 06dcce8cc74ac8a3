//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from the background service
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;

pub use api::handle_api_response;
pub use keyboard::handle_key;

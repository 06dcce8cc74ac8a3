//! External Services
//!
//! This module contains services that interact with external systems:
//! - api: background worker executing content API requests

pub mod api;

pub use api::{ApiRequest, ApiResponse};

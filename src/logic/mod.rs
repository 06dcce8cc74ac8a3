//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - partition: Draft/abandoned classification of fetched entries
//! - labels: Content-type badge label lookup with fallback
//! - navigation: Card grid selection movement
//! - refresh: Refetch dependency tracking and stale-response guard
//! - ui: UI state transitions (toast timing)

pub mod labels;
pub mod navigation;
pub mod partition;
pub mod refresh;
pub mod ui;

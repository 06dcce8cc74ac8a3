//! Drafts dashboard library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;

/// Sort order for the entry listing
///
/// The two literal values the content API accepts for the `order` query
/// parameter when sorting by update time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst, // -sys.updatedAt
    OldestFirst, // sys.updatedAt
}

impl SortOrder {
    /// The literal `order` query parameter value sent to the API
    pub fn as_query_param(&self) -> &str {
        match self {
            SortOrder::NewestFirst => "-sys.updatedAt",
            SortOrder::OldestFirst => "sys.updatedAt",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SortOrder::NewestFirst => "Newest first",
            SortOrder::OldestFirst => "Oldest first",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::NewestFirst
    }
}

// src/api/responses.rs
//! Response envelopes returned by the façade.

use crate::model::{ChildBlock, NotionObject, Page};
use serde::Serialize;

/// Generic paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Search results: pages and databases, in the order the API returned them.
pub type SearchResults = PaginatedResponse<NotionObject>;

/// One page of a block's children.
pub type ListBlockChildrenResult = PaginatedResponse<ChildBlock>;

/// One page of database rows.
pub type QueryDatabaseResult = PaginatedResponse<Page>;

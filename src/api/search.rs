// src/api/search.rs
//! Workspace search.

use super::parser::parse_paginated;
use super::responses::SearchResults;
use super::{NotionClient, Transport};
use crate::constants::SEARCH_PATH;
use crate::error::AppError;
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Result ordering. The API only sorts search by `last_edited_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub direction: SortDirection,
    pub timestamp: String,
}

impl Sort {
    pub fn last_edited(direction: SortDirection) -> Self {
        Self {
            direction,
            timestamp: "last_edited_time".to_string(),
        }
    }
}

/// Restricts results to one object kind: `value` is `page` or `database`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    pub value: String,
    pub property: String,
}

impl SearchFilter {
    pub fn object(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            property: "object".to_string(),
        }
    }
}

/// Body of a search request; absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl<T: Transport> NotionClient<T> {
    /// Searches pages and databases shared with the integration.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, AppError> {
        let body = serde_json::to_value(request)?;
        let json = self
            .execute(Method::POST, SEARCH_PATH.to_string(), Some(body))
            .await?;
        parse_paginated(&json)
    }
}

// src/api/pages.rs
//! Pages and databases: retrieval and database queries.

use super::pagination::fetch_all_pages;
use super::parser::parse_paginated;
use super::responses::QueryDatabaseResult;
use super::{NotionClient, Transport};
use crate::constants::{DATABASES_PATH, NOTION_API_PAGE_SIZE, PAGES_PATH};
use crate::error::AppError;
use crate::model::{Database, FromWire, Page};
use crate::types::{DatabaseId, OpaqueValue, PageId};
use reqwest::Method;
use serde::Serialize;

/// Body of a database query. Filter and sorts follow the API's own grammar
/// and are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<OpaqueValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<OpaqueValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl<T: Transport> NotionClient<T> {
    pub async fn retrieve_page(&self, page_id: &PageId) -> Result<Page, AppError> {
        let path = format!("{}/{}", PAGES_PATH, page_id.as_str());
        let json = self.execute(Method::GET, path, None).await?;
        Page::from_wire(&json)
    }

    pub async fn retrieve_database(&self, database_id: &DatabaseId) -> Result<Database, AppError> {
        let path = format!("{}/{}", DATABASES_PATH, database_id.as_str());
        let json = self.execute(Method::GET, path, None).await?;
        Database::from_wire(&json)
    }

    /// Runs one page of a database query.
    pub async fn query_database(
        &self,
        database_id: &DatabaseId,
        request: &QueryDatabaseRequest,
    ) -> Result<QueryDatabaseResult, AppError> {
        let path = format!("{}/{}/query", DATABASES_PATH, database_id.as_str());
        let body = serde_json::to_value(request)?;
        let json = self.execute(Method::POST, path, Some(body)).await?;
        parse_paginated(&json)
    }

    /// Runs a database query to the last page and returns every row.
    pub async fn query_all_rows(
        &self,
        database_id: &DatabaseId,
        request: &QueryDatabaseRequest,
    ) -> Result<Vec<Page>, AppError> {
        fetch_all_pages(
            |cursor| {
                let request = QueryDatabaseRequest {
                    start_cursor: cursor,
                    page_size: Some(NOTION_API_PAGE_SIZE),
                    ..request.clone()
                };
                async move { self.query_database(database_id, &request).await }
            },
            None,
        )
        .await
    }
}

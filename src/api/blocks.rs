// src/api/blocks.rs
//! Block children: listing and appending.

use super::pagination::fetch_all_pages;
use super::parser::parse_paginated;
use super::responses::ListBlockChildrenResult;
use super::{NotionClient, Transport};
use crate::constants::{BLOCKS_PATH, NOTION_API_PAGE_SIZE};
use crate::error::AppError;
use crate::model::ChildBlock;
use crate::types::{BlockId, OpaqueValue};
use reqwest::Method;

/// Paging parameters for [`NotionClient::list_children_page`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListChildrenOptions {
    pub start_cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl ListChildrenOptions {
    fn query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(cursor) = &self.start_cursor {
            query.append_pair("start_cursor", cursor);
        }
        if let Some(size) = self.page_size {
            query.append_pair("page_size", &size.to_string());
        }
        query.finish()
    }
}

fn children_path(block_id: &BlockId) -> String {
    format!("{}/{}/children", BLOCKS_PATH, block_id.as_str())
}

impl<T: Transport> NotionClient<T> {
    /// Lists the first page of a block's children.
    pub async fn list_children(
        &self,
        block_id: &BlockId,
    ) -> Result<ListBlockChildrenResult, AppError> {
        self.list_children_page(block_id, &ListChildrenOptions::default())
            .await
    }

    /// Lists one page of a block's children.
    pub async fn list_children_page(
        &self,
        block_id: &BlockId,
        options: &ListChildrenOptions,
    ) -> Result<ListBlockChildrenResult, AppError> {
        let mut path = children_path(block_id);
        let query = options.query_string();
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }

        let json = self.execute(Method::GET, path, None).await?;
        parse_paginated(&json)
    }

    /// Collects every child of a block, following cursors.
    pub async fn list_all_children(&self, block_id: &BlockId) -> Result<Vec<ChildBlock>, AppError> {
        fetch_all_pages(
            |cursor| async move {
                let options = ListChildrenOptions {
                    start_cursor: cursor,
                    page_size: Some(NOTION_API_PAGE_SIZE),
                };
                self.list_children_page(block_id, &options).await
            },
            None,
        )
        .await
    }

    /// Appends children to a block.
    ///
    /// `payload` is sent as the request body verbatim, normally
    /// `{"children": [...]}`. The response stays opaque too.
    pub async fn append_children(
        &self,
        block_id: &BlockId,
        payload: &OpaqueValue,
    ) -> Result<OpaqueValue, AppError> {
        let json = self
            .execute(Method::POST, children_path(block_id), Some(payload.to_json()))
            .await?;
        Ok(OpaqueValue::from(json))
    }
}

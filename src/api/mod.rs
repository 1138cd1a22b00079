// src/api/mod.rs
//! Notion API interaction.
//!
//! [`NotionClient`] is the façade: it assembles each request (path, headers,
//! body), hands it to a [`Transport`], and decodes the answer into the typed
//! model. The transport only moves bytes, so tests swap in a recording mock
//! and the binary uses [`NotionHttpClient`].

mod blocks;
pub mod client;
mod pages;
pub mod pagination;
pub mod parser;
mod responses;
mod search;

pub use blocks::ListChildrenOptions;
pub use client::{ApiResponse, NotionHttpClient};
pub use pages::QueryDatabaseRequest;
pub use responses::{
    ListBlockChildrenResult, PaginatedResponse, QueryDatabaseResult, SearchResults,
};
pub use search::{SearchFilter, SearchRequest, Sort, SortDirection};

use crate::constants::NOTION_VERSION_HEADER;
use crate::error::AppError;
use crate::types::{ApiKey, ApiVersion};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value;

/// A fully assembled request: method, endpoint path relative to the API
/// root, headers and optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// The ability to send a request to the Notion API.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse<String>, AppError>;
}

/// Typed client over any [`Transport`].
#[derive(Debug, Clone)]
pub struct NotionClient<T> {
    transport: T,
    api_key: ApiKey,
    version: ApiVersion,
}

impl<T: Transport> NotionClient<T> {
    pub fn new(transport: T, api_key: ApiKey, version: ApiVersion) -> Self {
        Self {
            transport,
            api_key,
            version,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    /// Headers every request carries.
    fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_str(self.version.as_str()).map_err(|e| {
                AppError::MissingConfiguration(format!(
                    "Invalid {} value: {}",
                    NOTION_VERSION_HEADER, e
                ))
            })?,
        );

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&self.api_key.bearer()).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Sends one request and returns the decoded JSON body of a 2xx answer.
    async fn execute(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<Value, AppError> {
        log::debug!("Notion request: {} {}", method, path);
        let request = ApiRequest {
            method,
            path,
            headers: self.headers()?,
            body,
        };
        let response = self.transport.send(request).await?;
        parser::parse_api_response(response)
    }
}

// src/api/client.rs
//! Pure HTTP transport for the Notion API.
//!
//! A thin wrapper around reqwest that sends an [`ApiRequest`] exactly as the
//! façade assembled it and hands back the raw body with its status. It does
//! no parsing and adds no headers of its own.

use super::{ApiRequest, Transport};
use crate::error::AppError;
use crate::types::BaseUrl;
use reqwest::{Client, Response, StatusCode};

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: BaseUrl,
}

impl NotionHttpClient {
    pub fn new(base_url: BaseUrl) -> Result<Self, AppError> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Transport for NotionHttpClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse<String>, AppError> {
        let url = self.base_url.endpoint(&request.path);
        log::debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method, url.as_str())
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        log::debug!("{} -> {}", url, response.status());
        extract_response_text(response).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

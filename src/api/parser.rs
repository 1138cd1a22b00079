// src/api/parser.rs
//! Turns raw transport responses into JSON values or typed service errors.
//!
//! Any 2xx status is a success and its body must be JSON. This is wider than
//! a strict `200` check: a `201` or `202` from the API decodes normally.
//! Everything else is read as the API's error body `{code, message}`; when
//! that body cannot be read, the HTTP status stands in for the code.

use super::client::ApiResponse;
use super::responses::PaginatedResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{wire, FromWire};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// The API's error body. `status` and `request_id` are optional extras.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Parse any Notion API response into JSON, or the service error it carries.
pub fn parse_api_response(result: ApiResponse<String>) -> Result<Value, AppError> {
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body(body: &str, url: &str) -> Result<Value, AppError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!(
            "Failed to parse response from {}: {}\nBody: {}",
            url,
            e,
            preview(body)
        );
        AppError::MalformedResponse(format!("response from {} is not JSON: {}", url, e))
    })
}

fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => {
            log::debug!(
                "Notion API error from {} (request {}): {} {}",
                url,
                error.request_id.as_deref().unwrap_or("-"),
                error.code,
                error.message
            );
            AppError::NotionService {
                status: status.as_u16(),
                code: NotionErrorCode::from_api_response(&error.code),
                message: error.message,
            }
        }
        Err(_) => {
            log::error!("Unreadable error body from {} ({}): {}", url, status, preview(body));
            AppError::NotionService {
                status: status.as_u16(),
                code: NotionErrorCode::from_http_status(status.as_u16()),
                message: format!("HTTP {} from {}", status, url),
            }
        }
    }
}

/// Decodes a list envelope, running each result through its decoder.
pub fn parse_paginated<T: FromWire>(json: &Value) -> Result<PaginatedResponse<T>, AppError> {
    let obj = wire::as_object(json, "list response")?;

    let results = match obj.get("results") {
        Some(Value::Array(items)) => items.iter().map(T::from_wire).collect::<Result<_, _>>()?,
        None | Some(Value::Null) => Vec::new(),
        Some(_) => return Err(AppError::malformed_field("results", "an array")),
    };

    Ok(PaginatedResponse {
        object: wire::optional_str(obj, "object")?.unwrap_or_else(|| "list".to_string()),
        results,
        next_cursor: wire::optional_str(obj, "next_cursor")?,
        has_more: wire::bool_or_false(obj, "has_more")?,
    })
}

fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

// src/lib.rs
//! notion-typed: a typed client for the Notion API.
//!
//! Raw JSON from the API is decoded into closed sets of typed variants,
//! driven by the `type` discriminator each object carries.
//!
//! # Public API
//!
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ClientConfig`
//! - **Domain model**: `NotionObject`, `Page`, `Database`, `Property`, `Block`, `RichText`
//! - **Domain types**: `PageId`, `BlockId`, `DatabaseId`, `ApiKey`, `Color`, `OpaqueValue`
//! - **API client**: `NotionClient`, `Transport`, `NotionHttpClient`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, Command, CommandLineInput};

// --- Domain Model ---
pub use crate::model::{
    decode_block, decode_children_list, decode_properties, decode_property, decode_rich_text,
    decode_rich_text_list, encode_rich_text, Block, BlockCommon, ChildBlock, Database, FromWire,
    NotionObject, Page, Parent, Property, PropertyType, RichText, RichTextContent, SpanType,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, ApiVersion, BaseUrl, BlockId, Color, DatabaseId, OpaqueValue, PageId,
};

// --- API Client ---
pub use crate::api::{
    ApiRequest, ApiResponse, ListBlockChildrenResult, ListChildrenOptions, NotionClient,
    NotionHttpClient, PaginatedResponse, QueryDatabaseRequest, QueryDatabaseResult,
    SearchFilter, SearchRequest, SearchResults, Sort, SortDirection, Transport,
};

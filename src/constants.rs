// src/constants.rs
//! Domain constants for talking to the Notion API.
//!
//! Endpoint roots and header values live here so that every request the
//! client issues is assembled from the same vocabulary.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Root of every endpoint path.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header unless configured otherwise.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Header carrying the API version on every request.
pub const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. Collecting helpers use the maximum to
/// minimize round-trips.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Endpoint roots
// ---------------------------------------------------------------------------

pub const BLOCKS_PATH: &str = "blocks";
pub const PAGES_PATH: &str = "pages";
pub const DATABASES_PATH: &str = "databases";
pub const SEARCH_PATH: &str = "search";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing malformed response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

//! Typed domain model and the decoders that build it from raw API JSON.

mod block;
pub mod blocks;
pub mod common;
pub mod properties;
pub mod property;
pub mod rich_text;
pub(crate) mod wire;

pub use block::{Block, ChildBlock};
pub use blocks::*;
pub use common::*;
pub use properties::{decode_properties, decode_property};
pub use property::*;
pub use rich_text::*;

use crate::error::AppError;
use crate::types::{BlockId, DatabaseId, OpaqueValue, PageId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use wire::Object;

/// Decoding from the API's raw JSON into a model type.
pub trait FromWire: Sized {
    fn from_wire(raw: &Value) -> Result<Self, AppError>;
}

/// A search result: pages and databases share one result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum NotionObject {
    Page(Page),
    Database(Database),
}

impl NotionObject {
    pub fn id(&self) -> &str {
        match self {
            NotionObject::Page(page) => page.id.as_str(),
            NotionObject::Database(database) => database.id.as_str(),
        }
    }

    pub fn object_type_name(&self) -> &'static str {
        match self {
            NotionObject::Page(_) => "page",
            NotionObject::Database(_) => "database",
        }
    }

    /// Plain-text title of the page or database.
    pub fn display_title(&self) -> String {
        match self {
            NotionObject::Page(page) => page.title_text(),
            NotionObject::Database(db) => db.title_text(),
        }
    }
}

impl FromWire for NotionObject {
    fn from_wire(raw: &Value) -> Result<Self, AppError> {
        let obj = wire::as_object(raw, "result")?;
        match wire::required_str(obj, "object")?.as_str() {
            "page" => Ok(NotionObject::Page(Page::decode(obj)?)),
            "database" => Ok(NotionObject::Database(Database::decode(obj)?)),
            other => Err(AppError::MalformedResponse(format!(
                "unexpected object type '{}' in search results",
                other
            ))),
        }
    }
}

/// A Notion page. Property values stay raw; see [`Page::decode_properties`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub id: PageId,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub parent: Option<Parent>,
    pub archived: bool,
    pub url: Option<String>,
    pub properties: IndexMap<String, OpaqueValue>,
}

impl Page {
    fn decode(obj: &Object) -> Result<Self, AppError> {
        let properties = match obj.get("properties") {
            None | Some(Value::Null) => IndexMap::new(),
            Some(Value::Object(props)) => props
                .iter()
                .map(|(name, value)| (name.clone(), OpaqueValue::from(value)))
                .collect(),
            Some(_) => return Err(AppError::malformed_field("properties", "an object")),
        };

        Ok(Self {
            id: PageId::from_normalized(wire::required_str(obj, "id")?),
            created_time: wire::optional_timestamp(obj, "created_time")?,
            last_edited_time: wire::optional_timestamp(obj, "last_edited_time")?,
            parent: decode_parent(obj)?,
            archived: wire::bool_or_false(obj, "archived")?,
            url: wire::optional_str(obj, "url")?,
            properties,
        })
    }

    /// Decodes the raw property values through the property decoder.
    pub fn decode_properties(&self) -> Result<HashMap<String, Property>, AppError> {
        let raw: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        decode_properties(&raw)
    }

    /// Plain text of the title property, or an empty string.
    pub fn title_text(&self) -> String {
        self.properties
            .values()
            .find(|value| value.get("type").and_then(OpaqueValue::as_str) == Some("title"))
            .and_then(|value| value.get("title"))
            .and_then(|title| decode_rich_text_list(Some(&title.to_json())).ok())
            .map(|spans| plain_text(&spans))
            .unwrap_or_default()
    }
}

impl FromWire for Page {
    fn from_wire(raw: &Value) -> Result<Self, AppError> {
        Page::decode(wire::as_object(raw, "page")?)
    }
}

/// A Notion database with its property schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Database {
    pub id: DatabaseId,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub parent: Option<Parent>,
    pub archived: bool,
    pub url: Option<String>,
    pub title: Vec<RichText>,
    pub properties: HashMap<String, Property>,
}

impl Database {
    fn decode(obj: &Object) -> Result<Self, AppError> {
        let properties = match obj.get("properties") {
            None | Some(Value::Null) => HashMap::new(),
            Some(Value::Object(props)) => decode_properties(props)?,
            Some(_) => return Err(AppError::malformed_field("properties", "an object")),
        };

        Ok(Self {
            id: DatabaseId::from_normalized(wire::required_str(obj, "id")?),
            created_time: wire::optional_timestamp(obj, "created_time")?,
            last_edited_time: wire::optional_timestamp(obj, "last_edited_time")?,
            parent: decode_parent(obj)?,
            archived: wire::bool_or_false(obj, "archived")?,
            url: wire::optional_str(obj, "url")?,
            title: decode_rich_text_list(obj.get("title"))?,
            properties,
        })
    }

    pub fn title_text(&self) -> String {
        plain_text(&self.title)
    }
}

impl FromWire for Database {
    fn from_wire(raw: &Value) -> Result<Self, AppError> {
        Database::decode(wire::as_object(raw, "database")?)
    }
}

impl FromWire for ChildBlock {
    fn from_wire(raw: &Value) -> Result<Self, AppError> {
        Ok(decode_block(raw))
    }
}

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "workspace")]
    Workspace,
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
}

fn decode_parent(obj: &Object) -> Result<Option<Parent>, AppError> {
    let parent = match obj.get("parent") {
        None | Some(Value::Null) => return Ok(None),
        Some(raw) => wire::as_object(raw, "parent")?,
    };

    let parent = match wire::required_str(parent, "type")?.as_str() {
        "database_id" => Parent::Database {
            database_id: DatabaseId::from_normalized(wire::required_str(parent, "database_id")?),
        },
        "page_id" => Parent::Page {
            page_id: PageId::from_normalized(wire::required_str(parent, "page_id")?),
        },
        "workspace" => Parent::Workspace,
        "block_id" => Parent::Block {
            block_id: BlockId::from_normalized(wire::required_str(parent, "block_id")?),
        },
        other => {
            return Err(AppError::MalformedResponse(format!(
                "unknown parent type '{}'",
                other
            )))
        }
    };

    Ok(Some(parent))
}

use super::wire::{self, Object};
use crate::error::AppError;
use crate::types::BlockId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Common fields for all blocks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockCommon {
    pub object: String,
    pub id: BlockId,
    pub created_time: Option<DateTime<Utc>>,
    pub last_edited_time: Option<DateTime<Utc>>,
    pub has_children: bool,
    pub archived: bool,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            object: "block".to_string(),
            id,
            created_time: None,
            last_edited_time: None,
            has_children: false,
            archived: false,
        }
    }

    pub(crate) fn decode(obj: &Object) -> Result<Self, AppError> {
        Ok(Self {
            object: wire::optional_str(obj, "object")?.unwrap_or_else(|| "block".to_string()),
            id: BlockId::from_normalized(wire::required_str(obj, "id")?),
            created_time: wire::optional_timestamp(obj, "created_time")?,
            last_edited_time: wire::optional_timestamp(obj, "last_edited_time")?,
            has_children: wire::bool_or_false(obj, "has_children")?,
            archived: wire::bool_or_false(obj, "archived")?,
        })
    }
}

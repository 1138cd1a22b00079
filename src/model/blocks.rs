//! Block variants and the block decoder.
//!
//! Block lists are decoded element by element. A block whose `type` is not
//! modelled here, or whose payload does not decode, is passed through as
//! [`ChildBlock::Opaque`] so one odd block never costs the caller the rest of
//! the list.

use super::block::{Block, ChildBlock};
use super::common::BlockCommon;
use super::rich_text::{decode_rich_text_list, RichText};
use super::wire::{self, Object};
use crate::error::AppError;
use crate::types::{Color, OpaqueValue};
use serde_json::{Map, Value};

/// Text content shared by the text-bearing blocks
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichText>,
    pub color: Color,
    pub children: Vec<ChildBlock>,
}

impl TextBlockContent {
    pub fn plain(text: &str) -> Self {
        Self {
            rich_text: vec![RichText::plain(text)],
            ..Self::default()
        }
    }
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn block_type(&self) -> &'static str {
        match self {
            HeadingLevel::One => "heading_1",
            HeadingLevel::Two => "heading_2",
            HeadingLevel::Three => "heading_3",
        }
    }

    pub fn from_block_type(kind: &str) -> Option<Self> {
        match kind {
            "heading_1" => Some(HeadingLevel::One),
            "heading_2" => Some(HeadingLevel::Two),
            "heading_3" => Some(HeadingLevel::Three),
            _ => None,
        }
    }
}

/// Heading block; the level selects `heading_1`, `heading_2` or `heading_3`
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingBlock {
    pub common: BlockCommon,
    pub level: HeadingLevel,
    pub content: TextBlockContent,
    pub is_toggleable: bool,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// To-do block
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    pub checked: bool,
}

/// Toggle block
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Child page block
#[derive(Debug, Clone, PartialEq)]
pub struct ChildPageBlock {
    pub common: BlockCommon,
    pub title: String,
}

/// Decodes one block, falling back to an opaque value.
pub fn decode_block(raw: &Value) -> ChildBlock {
    let Some(obj) = raw.as_object() else {
        log::warn!("Block is not an object; keeping it opaque");
        return ChildBlock::Opaque(OpaqueValue::from(raw));
    };
    let Some(kind) = obj.get("type").and_then(Value::as_str) else {
        log::debug!("Block without a type discriminator; keeping it opaque");
        return ChildBlock::Opaque(OpaqueValue::from(raw));
    };

    match decode_typed_block(kind, obj) {
        Ok(Some(block)) => ChildBlock::Typed(block),
        Ok(None) => {
            log::debug!("Block type '{}' is passed through opaque", kind);
            ChildBlock::Opaque(OpaqueValue::from(raw))
        }
        Err(e) => {
            log::warn!("Failed to decode '{}' block, keeping it opaque: {}", kind, e);
            ChildBlock::Opaque(OpaqueValue::from(raw))
        }
    }
}

/// Decodes a block list. Never fails; see [`decode_block`].
pub fn decode_children_list(raw: &[Value]) -> Vec<ChildBlock> {
    raw.iter().map(decode_block).collect()
}

/// `Ok(None)` for block types without a typed variant.
fn decode_typed_block(kind: &str, obj: &Object) -> Result<Option<Block>, AppError> {
    let empty = Map::new();
    let payload = wire::nested(obj, kind).unwrap_or(&empty);

    let block = match kind {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            common: BlockCommon::decode(obj)?,
            content: decode_text_content(payload)?,
        }),
        "heading_1" | "heading_2" | "heading_3" => {
            let level = HeadingLevel::from_block_type(kind)
                .ok_or_else(|| AppError::MalformedResponse(format!("bad heading '{}'", kind)))?;
            Block::Heading(HeadingBlock {
                common: BlockCommon::decode(obj)?,
                level,
                content: decode_text_content(payload)?,
                is_toggleable: wire::bool_or_false(payload, "is_toggleable")?,
            })
        }
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            common: BlockCommon::decode(obj)?,
            content: decode_text_content(payload)?,
        }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
            common: BlockCommon::decode(obj)?,
            content: decode_text_content(payload)?,
        }),
        "to_do" => Block::ToDo(ToDoBlock {
            common: BlockCommon::decode(obj)?,
            content: decode_text_content(payload)?,
            checked: wire::bool_or_false(payload, "checked")?,
        }),
        "toggle" => Block::Toggle(ToggleBlock {
            common: BlockCommon::decode(obj)?,
            content: decode_text_content(payload)?,
        }),
        "child_page" => Block::ChildPage(ChildPageBlock {
            common: BlockCommon::decode(obj)?,
            title: wire::optional_str(payload, "title")?.unwrap_or_default(),
        }),
        _ => return Ok(None),
    };

    Ok(Some(block))
}

fn decode_text_content(payload: &Object) -> Result<TextBlockContent, AppError> {
    // Older API versions named the span list `text`.
    let spans = payload.get("rich_text").or_else(|| payload.get("text"));

    let color = match wire::optional_str(payload, "color")? {
        Some(name) => name.parse()?,
        None => Color::Default,
    };

    let children = match payload.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => decode_children_list(items),
        Some(_) => return Err(AppError::malformed_field("children", "an array")),
    };

    Ok(TextBlockContent {
        rich_text: decode_rich_text_list(spans)?,
        color,
        children,
    })
}

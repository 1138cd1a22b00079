use super::blocks::*;
use super::common::BlockCommon;
use super::rich_text::{encode_rich_text_list, plain_text, RichText};
use crate::types::{BlockId, OpaqueValue};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::ChildPage($pattern) => $result,
        }
    };
}

/// The block types this client decodes into typed variants
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    ChildPage(ChildPageBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// The wire discriminator of this block.
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(h) => h.level.block_type(),
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::ChildPage(_) => "child_page",
        }
    }

    /// Text content, for blocks that carry spans.
    pub fn text_content(&self) -> Option<&TextBlockContent> {
        match self {
            Block::Paragraph(b) => Some(&b.content),
            Block::Heading(b) => Some(&b.content),
            Block::BulletedListItem(b) => Some(&b.content),
            Block::NumberedListItem(b) => Some(&b.content),
            Block::ToDo(b) => Some(&b.content),
            Block::Toggle(b) => Some(&b.content),
            Block::ChildPage(_) => None,
        }
    }

    pub fn rich_text(&self) -> &[RichText] {
        match self.text_content() {
            Some(content) => &content.rich_text,
            None => &[],
        }
    }

    /// Children embedded in the block payload. Child pages never embed any.
    pub fn children(&self) -> &[ChildBlock] {
        match self.text_content() {
            Some(content) => &content.children,
            None => &[],
        }
    }

    /// Plain text of the block; the title for child pages.
    pub fn plain_text(&self) -> String {
        match self {
            Block::ChildPage(page) => page.title.clone(),
            other => plain_text(other.rich_text()),
        }
    }

    /// Encodes the block in the API's wire shape.
    pub fn to_json(&self) -> Value {
        let common = self.common();
        let payload = match self {
            Block::ChildPage(page) => json!({ "title": page.title }),
            Block::ToDo(todo) => {
                let mut payload = encode_text_content(&todo.content);
                payload["checked"] = Value::Bool(todo.checked);
                payload
            }
            Block::Heading(heading) => {
                let mut payload = encode_text_content(&heading.content);
                payload["is_toggleable"] = Value::Bool(heading.is_toggleable);
                payload
            }
            other => other
                .text_content()
                .map(encode_text_content)
                .unwrap_or_else(|| json!({})),
        };

        let mut obj = json!({
            "object": common.object,
            "id": common.id,
            "created_time": common.created_time,
            "last_edited_time": common.last_edited_time,
            "has_children": common.has_children,
            "archived": common.archived,
            "type": self.block_type(),
        });
        obj[self.block_type()] = payload;
        obj
    }
}

fn encode_text_content(content: &TextBlockContent) -> Value {
    let mut payload = json!({
        "rich_text": encode_rich_text_list(&content.rich_text),
        "color": content.color.as_str(),
    });
    if !content.children.is_empty() {
        payload["children"] =
            Value::Array(content.children.iter().map(ChildBlock::to_json).collect());
    }
    payload
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// An element of a block list: decoded, or kept as it arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildBlock {
    Typed(Block),
    Opaque(OpaqueValue),
}

impl ChildBlock {
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            ChildBlock::Typed(block) => Some(block),
            ChildBlock::Opaque(_) => None,
        }
    }

    /// The wire discriminator, when the element has one.
    pub fn block_type(&self) -> Option<&str> {
        match self {
            ChildBlock::Typed(block) => Some(block.block_type()),
            ChildBlock::Opaque(raw) => raw.get("type").and_then(OpaqueValue::as_str),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ChildBlock::Typed(block) => block.to_json(),
            ChildBlock::Opaque(raw) => raw.to_json(),
        }
    }
}

impl Serialize for ChildBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ChildBlock::Typed(block) => block.serialize(serializer),
            ChildBlock::Opaque(raw) => raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blocks::decode_block;
    use pretty_assertions::assert_eq;

    fn heading(level: HeadingLevel) -> Block {
        Block::Heading(HeadingBlock {
            common: BlockCommon::new(BlockId::from_normalized("h".to_string())),
            level,
            content: TextBlockContent::plain("Title"),
            is_toggleable: false,
        })
    }

    #[test]
    fn test_heading_type_follows_level() {
        assert_eq!(heading(HeadingLevel::One).block_type(), "heading_1");
        assert_eq!(heading(HeadingLevel::Two).block_type(), "heading_2");
        assert_eq!(heading(HeadingLevel::Three).block_type(), "heading_3");
    }

    #[test]
    fn test_encoded_block_decodes_back() {
        let mut todo = ToDoBlock {
            common: BlockCommon::new(BlockId::from_normalized("t".to_string())),
            content: TextBlockContent::plain("Write tests"),
            checked: true,
        };
        todo.content.children.push(ChildBlock::Typed(heading(HeadingLevel::Two)));
        todo.common.has_children = true;

        let block = Block::ToDo(todo);
        assert_eq!(decode_block(&block.to_json()), ChildBlock::Typed(block));
    }

    #[test]
    fn test_child_page_has_no_text_content() {
        let page = Block::ChildPage(ChildPageBlock {
            common: BlockCommon::new(BlockId::from_normalized("p".to_string())),
            title: "Roadmap".to_string(),
        });
        assert!(page.rich_text().is_empty());
        assert!(page.children().is_empty());
        assert_eq!(page.plain_text(), "Roadmap");
    }
}

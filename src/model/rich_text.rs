// src/model/rich_text.rs
//! Inline text spans: decoding from and encoding to the API's rich text objects.
//!
//! A span's `type` is not stored separately. It is derived from the
//! content variant, so a decoded span can never claim to be a mention while
//! carrying text content.

use super::wire::{self, Object};
use crate::error::AppError;
use crate::types::{Color, OpaqueValue};
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// The three span kinds the API emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanType {
    Text,
    Mention,
    Equation,
}

impl SpanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanType::Text => "text",
            SpanType::Mention => "mention",
            SpanType::Equation => "equation",
        }
    }
}

impl FromStr for SpanType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(SpanType::Text),
            "mention" => Ok(SpanType::Mention),
            "equation" => Ok(SpanType::Equation),
            other => Err(AppError::UnsupportedSpanType(other.to_string())),
        }
    }
}

impl fmt::Display for SpanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
}

/// Span payload, one variant per span type.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextContent {
    Text { content: String, link: Option<Link> },
    /// User, page, database, date and link mentions vary too much to type;
    /// the mention object is kept whole.
    Mention(OpaqueValue),
    Equation { expression: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// A rich text span with formatting annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    pub content: RichTextContent,
    pub plain_text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

impl RichText {
    /// Create an unannotated text span, the most common kind.
    pub fn plain(text: &str) -> Self {
        Self {
            content: RichTextContent::Text {
                content: text.to_string(),
                link: None,
            },
            plain_text: text.to_string(),
            annotations: Annotations::default(),
            href: None,
        }
    }

    pub fn span_type(&self) -> SpanType {
        match self.content {
            RichTextContent::Text { .. } => SpanType::Text,
            RichTextContent::Mention(_) => SpanType::Mention,
            RichTextContent::Equation { .. } => SpanType::Equation,
        }
    }
}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_rich_text(self).serialize(serializer)
    }
}

/// Concatenates the plain text of a span list.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}

/// Decodes one rich text object.
pub fn decode_rich_text(raw: &Value) -> Result<RichText, AppError> {
    let obj = wire::as_object(raw, "rich_text")?;
    let span_type: SpanType = wire::required_str(obj, "type")?.parse()?;

    let content = match span_type {
        SpanType::Text => decode_text_content(wire::nested(obj, "text"))?,
        SpanType::Mention => RichTextContent::Mention(wire::opaque(obj, "mention")),
        SpanType::Equation => RichTextContent::Equation {
            expression: wire::nested(obj, "equation")
                .map(|eq| wire::optional_str(eq, "expression"))
                .transpose()?
                .flatten()
                .unwrap_or_default(),
        },
    };

    Ok(RichText {
        content,
        plain_text: wire::optional_str(obj, "plain_text")?.unwrap_or_default(),
        annotations: decode_annotations(wire::nested(obj, "annotations"))?,
        href: wire::optional_str(obj, "href")?,
    })
}

/// Decodes a span list; a missing or `null` list is empty.
pub fn decode_rich_text_list(raw: Option<&Value>) -> Result<Vec<RichText>, AppError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(decode_rich_text).collect(),
        Some(_) => Err(AppError::malformed_field("rich_text", "an array")),
    }
}

fn decode_text_content(text: Option<&Object>) -> Result<RichTextContent, AppError> {
    let Some(text) = text else {
        return Ok(RichTextContent::Text {
            content: String::new(),
            link: None,
        });
    };

    let link = match text.get("link") {
        None | Some(Value::Null) => None,
        Some(Value::Object(link)) => Some(Link {
            url: wire::required_str(link, "url")?,
        }),
        Some(_) => return Err(AppError::malformed_field("link", "an object")),
    };

    Ok(RichTextContent::Text {
        content: wire::optional_str(text, "content")?.unwrap_or_default(),
        link,
    })
}

fn decode_annotations(raw: Option<&Object>) -> Result<Annotations, AppError> {
    let Some(raw) = raw else {
        return Ok(Annotations::default());
    };

    let color = match wire::optional_str(raw, "color")? {
        Some(name) => name
            .parse()
            .map_err(|e| AppError::MalformedResponse(format!("annotations: {}", e)))?,
        None => Color::Default,
    };

    Ok(Annotations {
        bold: wire::bool_or_false(raw, "bold")?,
        italic: wire::bool_or_false(raw, "italic")?,
        strikethrough: wire::bool_or_false(raw, "strikethrough")?,
        underline: wire::bool_or_false(raw, "underline")?,
        code: wire::bool_or_false(raw, "code")?,
        color,
    })
}

/// Encodes a span into the API's rich text object; inverse of [`decode_rich_text`].
pub fn encode_rich_text(span: &RichText) -> Value {
    let payload = match &span.content {
        RichTextContent::Text { content, link } => json!({
            "content": content,
            "link": link.as_ref().map(|l| json!({ "url": l.url })),
        }),
        RichTextContent::Mention(mention) => mention.to_json(),
        RichTextContent::Equation { expression } => json!({ "expression": expression }),
    };

    let a = &span.annotations;
    let mut obj = json!({
        "type": span.span_type().as_str(),
        "plain_text": span.plain_text,
        "href": span.href,
        "annotations": {
            "bold": a.bold,
            "italic": a.italic,
            "strikethrough": a.strikethrough,
            "underline": a.underline,
            "code": a.code,
            "color": a.color.as_str(),
        },
    });
    obj[span.span_type().as_str()] = payload;
    obj
}

pub fn encode_rich_text_list(spans: &[RichText]) -> Value {
    Value::Array(spans.iter().map(encode_rich_text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_text_span() {
        let raw = json!({
            "type": "text",
            "text": {"content": "Tasks", "link": {"url": "https://example.com"}},
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "red_background"
            },
            "plain_text": "Tasks",
            "href": "https://example.com"
        });

        let span = decode_rich_text(&raw).unwrap();
        assert_eq!(span.span_type(), SpanType::Text);
        assert_eq!(span.plain_text, "Tasks");
        assert!(span.annotations.bold);
        assert_eq!(span.annotations.color, Color::RedBackground);
        assert_eq!(
            span.content,
            RichTextContent::Text {
                content: "Tasks".to_string(),
                link: Some(Link {
                    url: "https://example.com".to_string()
                }),
            }
        );
    }

    #[test]
    fn test_missing_annotations_default() {
        let raw = json!({"type": "text", "text": {"content": "x"}, "plain_text": "x"});
        let span = decode_rich_text(&raw).unwrap();
        assert_eq!(span.annotations, Annotations::default());

        let raw = json!({"type": "text", "plain_text": "x", "annotations": {"italic": true}});
        let span = decode_rich_text(&raw).unwrap();
        assert!(span.annotations.italic);
        assert!(!span.annotations.bold);
        assert_eq!(span.annotations.color, Color::Default);
    }

    #[test]
    fn test_unsupported_span_type() {
        let raw = json!({"type": "sticker", "plain_text": ""});
        match decode_rich_text(&raw) {
            Err(AppError::UnsupportedSpanType(t)) => assert_eq!(t, "sticker"),
            other => panic!("expected UnsupportedSpanType, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_each_span_kind() {
        let mention = RichText {
            content: RichTextContent::Mention(OpaqueValue::from(json!({
                "type": "user",
                "user": {"object": "user", "id": "u-1"}
            }))),
            plain_text: "@Ada".to_string(),
            annotations: Annotations {
                underline: true,
                color: Color::Purple,
                ..Annotations::default()
            },
            href: None,
        };
        let equation = RichText {
            content: RichTextContent::Equation {
                expression: "e^{i\\pi} + 1 = 0".to_string(),
            },
            plain_text: "e^{i\\pi} + 1 = 0".to_string(),
            annotations: Annotations::default(),
            href: None,
        };
        let mut linked = RichText::plain("docs");
        linked.content = RichTextContent::Text {
            content: "docs".to_string(),
            link: Some(Link {
                url: "https://developers.notion.com".to_string(),
            }),
        };
        linked.href = Some("https://developers.notion.com".to_string());
        linked.annotations.code = true;

        for span in [RichText::plain("hello"), mention, equation, linked] {
            let decoded = decode_rich_text(&encode_rich_text(&span)).unwrap();
            assert_eq!(decoded, span);
        }
    }

    #[test]
    fn test_list_decoding() {
        assert!(decode_rich_text_list(None).unwrap().is_empty());
        assert!(decode_rich_text_list(Some(&Value::Null)).unwrap().is_empty());
        assert!(decode_rich_text_list(Some(&json!("nope"))).is_err());

        let spans = decode_rich_text_list(Some(&json!([
            {"type": "text", "text": {"content": "a"}, "plain_text": "a"},
            {"type": "text", "text": {"content": "b"}, "plain_text": "b"}
        ])))
        .unwrap();
        assert_eq!(plain_text(&spans), "ab");
    }
}

//! Listing and appending block children through the façade.

mod common;

use common::{assert_standard_headers, client, fixture, MockTransport};
use notion_typed::model::HeadingLevel;
use notion_typed::{
    AppError, Block, BlockId, ChildBlock, ListChildrenOptions, NotionErrorCode, OpaqueValue,
};
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;

const BLOCK: &str = "b55c9c91-384d-452b-81db-d1ef79372b75";

fn block_id() -> BlockId {
    BlockId::parse(BLOCK).unwrap()
}

#[tokio::test]
async fn test_list_children_decodes_results() {
    let client = client(MockTransport::new().respond(200, fixture("block_children.json")));

    let children = client.list_children(&block_id()).await.unwrap();

    assert_eq!(children.object, "list");
    assert!(!children.has_more);
    assert_eq!(
        children
            .results
            .iter()
            .map(|child| child.block_type())
            .collect::<Vec<_>>(),
        vec![
            Some("heading_2"),
            Some("paragraph"),
            Some("image"),
            Some("to_do"),
            Some("child_page"),
        ]
    );

    match &children.results[0] {
        ChildBlock::Typed(Block::Heading(heading)) => {
            assert_eq!(heading.level, HeadingLevel::Two);
            assert_eq!(heading.common.id.as_str(), "9bc30ad4-9373-46a5-84ab-0a7845ee52e6");
        }
        other => panic!("expected heading_2, got {:?}", other),
    }

    let paragraph = children.results[1].as_block().unwrap();
    assert_eq!(
        paragraph.plain_text(),
        "Lacinato kale is a variety of kale with a long tradition in Italian cuisine."
    );
    assert_eq!(
        paragraph.rich_text()[0].href.as_deref(),
        Some("https://en.wikipedia.org/wiki/Lacinato_kale")
    );

    // Image blocks have no typed variant and pass through untouched.
    match &children.results[2] {
        ChildBlock::Opaque(raw) => {
            assert_eq!(
                raw.get("image")
                    .and_then(|image| image.get("type"))
                    .and_then(OpaqueValue::as_str),
                Some("external")
            );
        }
        other => panic!("expected opaque image, got {:?}", other),
    }

    match &children.results[3] {
        ChildBlock::Typed(Block::ToDo(todo)) => {
            assert!(!todo.checked);
            assert!(todo.common.has_children);
            assert!(todo.content.rich_text[0].annotations.bold);
        }
        other => panic!("expected to_do, got {:?}", other),
    }
    assert_eq!(
        children.results[4].as_block().map(Block::plain_text),
        Some("Planting calendar".to_string())
    );
}

#[tokio::test]
async fn test_list_children_request() {
    let client = client(MockTransport::new().respond(200, fixture("block_children.json")));
    client.list_children(&block_id()).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(
        requests[0].path,
        "blocks/b55c9c91384d452b81dbd1ef79372b75/children"
    );
    assert_eq!(requests[0].body, None);
    assert_standard_headers(&requests[0]);
}

#[tokio::test]
async fn test_list_children_not_found() {
    let body = r#"{
        "object": "error",
        "status": 404,
        "code": "object_not_found",
        "message": "Could not find block with ID: b55c9c91-384d-452b-81db-d1ef79372b75."
    }"#;
    let client = client(MockTransport::new().respond(404, body));

    match client.list_children(&block_id()).await {
        Err(AppError::NotionService {
            status,
            code,
            message,
        }) => {
            assert_eq!(status, 404);
            assert!(code.is_not_found());
            assert_eq!(
                message,
                "Could not find block with ID: b55c9c91-384d-452b-81db-d1ef79372b75."
            );
        }
        other => panic!("expected NotionService, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_children_unreadable_error() {
    let client = client(MockTransport::new().respond(503, "upstream unavailable"));

    match client.list_children(&block_id()).await {
        Err(AppError::NotionService { status, code, .. }) => {
            assert_eq!(status, 503);
            assert_eq!(code, NotionErrorCode::HttpStatus(503));
        }
        other => panic!("expected NotionService, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_children_page_sends_cursor() {
    let client = client(MockTransport::new().respond(200, fixture("block_children.json")));
    let options = ListChildrenOptions {
        start_cursor: Some("cursor-1".to_string()),
        page_size: Some(2),
    };
    client.list_children_page(&block_id(), &options).await.unwrap();

    assert_eq!(
        client.transport().requests()[0].path,
        "blocks/b55c9c91384d452b81dbd1ef79372b75/children?start_cursor=cursor-1&page_size=2"
    );
}

#[tokio::test]
async fn test_list_all_children_follows_cursors() {
    let first = json!({
        "object": "list",
        "results": [{"object": "block", "id": "a", "type": "paragraph", "paragraph": {"rich_text": []}}],
        "next_cursor": "next-page",
        "has_more": true
    });
    let second = json!({
        "object": "list",
        "results": [{"object": "block", "id": "b", "type": "divider", "divider": {}}],
        "next_cursor": null,
        "has_more": false
    });
    let client = client(
        MockTransport::new()
            .respond(200, first.to_string())
            .respond(200, second.to_string()),
    );

    let children = client.list_all_children(&block_id()).await.unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].block_type(), Some("paragraph"));
    assert_eq!(children[1].block_type(), Some("divider"));

    let paths: Vec<String> = client
        .transport()
        .requests()
        .into_iter()
        .map(|request| request.path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "blocks/b55c9c91384d452b81dbd1ef79372b75/children?page_size=100".to_string(),
            "blocks/b55c9c91384d452b81dbd1ef79372b75/children?start_cursor=next-page&page_size=100"
                .to_string(),
        ]
    );
}

#[tokio::test]
async fn test_append_children_is_block_rooted() {
    let response = json!({"object": "list", "results": [], "has_more": false, "next_cursor": null});
    let client = client(MockTransport::new().respond(200, response.to_string()));

    let payload = OpaqueValue::from(json!({
        "children": [{
            "object": "block",
            "type": "paragraph",
            "paragraph": {"rich_text": [{"type": "text", "text": {"content": "Hello"}}]}
        }]
    }));
    let result = client.append_children(&block_id(), &payload).await.unwrap();
    assert_eq!(result.get("object").and_then(OpaqueValue::as_str), Some("list"));

    let requests = client.transport().requests();
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(
        requests[0].path,
        "blocks/b55c9c91384d452b81dbd1ef79372b75/children"
    );
    assert_eq!(requests[0].body, Some(payload.to_json()));
    assert_standard_headers(&requests[0]);
}

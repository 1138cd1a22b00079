//! End-to-end search: request assembly, polymorphic result routing and the
//! decoded database schema and page.

mod common;

use common::{assert_standard_headers, client, fixture, MockTransport};
use notion_typed::model::{MultiSelectProperty, PropertyType};
use notion_typed::{
    AppError, NotionObject, OpaqueValue, Parent, Property, SearchRequest, Sort,
    SortDirection,
};
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn test_search_external_tasks() {
    let client = client(MockTransport::new().respond(200, fixture("search_response.json")));

    let request = SearchRequest {
        query: Some("External tasks".to_string()),
        sort: Some(Sort::last_edited(SortDirection::Ascending)),
        ..SearchRequest::default()
    };
    let results = client.search(&request).await.unwrap();

    assert_eq!(results.object, "list");
    assert!(!results.has_more);
    assert_eq!(results.next_cursor, None);
    assert_eq!(results.results.len(), 2);

    // Database first, then page, as the API listed them.
    let NotionObject::Database(database) = &results.results[0] else {
        panic!("expected a database first, got {:?}", results.results[0]);
    };
    assert_eq!(database.id.as_str(), "e6c6f8ff-c70e-4970-91ba-98f03e0d7fc6");
    assert_eq!(database.title_text(), "Tasks");
    assert_eq!(
        database.created_time.map(|t| t.to_rfc3339()),
        Some("2021-04-22T22:23:26.080+00:00".to_string())
    );
    assert_eq!(database.properties.len(), 2);
    match &database.properties["Name"] {
        Property::DatabaseTitle(title) => {
            assert_eq!(title.id, "title");
            assert_eq!(title.title, OpaqueValue::Object(Default::default()));
        }
        other => panic!("expected a database title, got {:?}", other),
    }
    assert_eq!(
        database.properties["Task Type"],
        Property::MultiSelect(MultiSelectProperty {
            id: "vd@l".to_string(),
            options: vec![],
        })
    );

    let NotionObject::Page(page) = &results.results[1] else {
        panic!("expected a page second, got {:?}", results.results[1]);
    };
    assert_eq!(page.id.as_str(), "4f555b50-3a9b-49cb-924c-3746f4ca5522");
    assert!(!page.archived);
    assert_eq!(page.title_text(), "Task 1");
    assert_eq!(
        page.properties["Name"].get("type").and_then(OpaqueValue::as_str),
        Some("title")
    );

    let page_properties = page.decode_properties().unwrap();
    assert_eq!(page_properties["Name"].property_type(), PropertyType::Title);
    assert!(matches!(page_properties["Name"], Property::PageTitle(_)));
}

#[tokio::test]
async fn test_search_request_on_the_wire() {
    let client = client(MockTransport::new().respond(200, fixture("search_response.json")));

    let request = SearchRequest {
        query: Some("External tasks".to_string()),
        sort: Some(Sort::last_edited(SortDirection::Ascending)),
        ..SearchRequest::default()
    };
    client.search(&request).await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.method, Method::POST);
    assert_eq!(sent.path, "search");
    assert_standard_headers(sent);
    assert_eq!(
        sent.body,
        Some(json!({
            "query": "External tasks",
            "sort": {"direction": "ascending", "timestamp": "last_edited_time"}
        }))
    );
}

#[tokio::test]
async fn test_parent_ids_are_kept_verbatim() {
    let client = client(MockTransport::new().respond(200, fixture("search_response.json")));
    let results = client.search(&SearchRequest::default()).await.unwrap();

    let NotionObject::Page(page) = &results.results[1] else {
        panic!("expected a page");
    };
    match &page.parent {
        Some(Parent::Database { database_id }) => {
            assert_eq!(database_id.as_str(), "e6c6f8ff-c70e-4970-91ba-98f03e0d7fc6");
        }
        other => panic!("expected a database parent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_property_type_fails_the_search() {
    let body = json!({
        "object": "list",
        "has_more": false,
        "next_cursor": null,
        "results": [{
            "object": "database",
            "id": "d1",
            "title": [],
            "properties": {
                "Stage": {"id": "s", "type": "status", "status": {"options": []}}
            }
        }]
    });
    let client = client(MockTransport::new().respond(200, body.to_string()));

    match client.search(&SearchRequest::default()).await {
        Err(AppError::UnsupportedPropertyType(kind)) => assert_eq!(kind, "status"),
        other => panic!("expected UnsupportedPropertyType, got {:?}", other),
    }
}

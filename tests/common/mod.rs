//! Shared test helpers: a transport that records requests and replays
//! canned responses.

#![allow(dead_code)]

use notion_typed::{
    ApiKey, ApiRequest, ApiResponse, ApiVersion, AppError, NotionClient, Transport,
};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const TEST_API_KEY: &str = "secret_test_key_1234567890abcdef";

/// Replays queued `(status, body)` pairs in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<(u16, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse<String>, AppError> {
        let url = format!("https://api.notion.test/v1/{}", request.path);
        self.requests.lock().unwrap().push(request);

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Transport("no response queued".to_string()))?;

        Ok(ApiResponse {
            data: body,
            status: StatusCode::from_u16(status).unwrap(),
            url,
        })
    }
}

pub fn client(transport: MockTransport) -> NotionClient<MockTransport> {
    NotionClient::new(
        transport,
        ApiKey::new(TEST_API_KEY).unwrap(),
        ApiVersion::default(),
    )
}

/// Asserts the headers every façade request must carry.
pub fn assert_standard_headers(request: &ApiRequest) {
    assert_eq!(request.headers["Notion-Version"], "2022-06-28");
    assert_eq!(
        request.headers["Authorization"],
        format!("Bearer {}", TEST_API_KEY).as_str()
    );
    assert_eq!(request.headers["Content-Type"], "application/json");
}

pub fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use reqwest::Url;

use super::transport::{HttpResponse, Transport, TransportError};

type Scripted = Result<HttpResponse, TransportError>;

#[derive(Default)]
struct FakeState {
    responses: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<(Url, String)>>,
}

/// Replays scripted responses in order and records every request.
///
/// Clones share state, so a test can keep a handle after moving one into a client.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<FakeState>,
}

impl FakeTransport {
    pub fn new(responses: impl IntoIterator<Item = Scripted>) -> Self {
        let state = FakeState {
            responses: RefCell::new(responses.into_iter().collect()),
            requests: RefCell::default(),
        };
        Self {
            state: Rc::new(state),
        }
    }

    pub fn calls(&self) -> usize {
        self.state.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<(Url, String)> {
        self.state.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpResponse, TransportError> {
        self.state.requests.borrow_mut().push((url, body));
        self.state
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_string())))
    }
}

/// A well-formed `generateContent` response carrying `text`.
pub fn gemini_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    })
    .to_string()
}

/// A 200 response carrying `text`.
pub fn success(text: &str) -> Scripted {
    Ok(HttpResponse {
        status: 200,
        body: gemini_body(text),
    })
}

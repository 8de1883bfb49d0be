// src/api/mock.rs
use std::sync::Mutex;

use super::{ApiRequest, ApiResponse, Completion, Transport};

/// Records requests and holds their completions until the test decides
/// how each one ends.
#[derive(Default)]
pub struct MockTransport {
    calls: Mutex<Vec<(ApiRequest, Option<Completion>)>>,
}

impl MockTransport {
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().iter().map(|(req, _)| req.clone()).collect()
    }

    pub fn request_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn respond(&self, index: usize, status: u16, status_text: &str, body: &str) {
        self.complete(index, Ok(ApiResponse {
            status,
            status_text: status_text.to_string(),
            bytes: body.as_bytes().to_vec(),
        }));
    }

    pub fn respond_json(&self, index: usize, status: u16, body: serde_json::Value) {
        self.respond(index, status, "OK", &body.to_string());
    }

    pub fn fail(&self, index: usize, message: &str) {
        self.complete(index, Err(message.to_string()));
    }

    fn complete(&self, index: usize, outcome: Result<ApiResponse, String>) {
        // Release the lock before running the callback.
        let on_done = self.calls.lock().unwrap()[index]
            .1
            .take()
            .expect("request already completed");
        on_done(outcome);
    }
}

impl Transport for MockTransport {
    fn send(&self, request: ApiRequest, on_done: Completion) {
        self.calls.lock().unwrap().push((request, Some(on_done)));
    }
}

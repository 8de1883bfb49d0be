// src/api/client.rs
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{ApiError, ApiRequest, ApiResponse, Pending, Transport};
use crate::model::{AnalysisRequest, AnalysisResult, Insight, InsightsResponse};

/// Typed access to the two backend endpoints.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /quick-insights`, unwrapped to the list.
    pub fn quick_insights(&self) -> Pending<Vec<Insight>> {
        let request = ApiRequest::get(self.url("/quick-insights"));
        self.dispatch(request, |response: InsightsResponse| response.insights)
    }

    /// `POST /analyze` with the query exactly as given.
    pub fn analyze(&self, query: &str) -> Pending<AnalysisResult> {
        let body = AnalysisRequest { query: query.to_string() };
        match serde_json::to_vec(&body) {
            Ok(bytes) => {
                let request = ApiRequest::post_json(self.url("/analyze"), bytes);
                self.dispatch(request, |result: AnalysisResult| result)
            }
            Err(e) => Pending::settled(Err(ApiError::FetchFailed(e.to_string()))),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn dispatch<W, T, F>(&self, request: ApiRequest, map: F) -> Pending<T>
    where
        W: DeserializeOwned,
        T: Send + 'static,
        F: FnOnce(W) -> T + Send + 'static,
    {
        let pending = Pending::new();
        let slot = pending.clone();
        self.transport.send(
            request,
            Box::new(move |outcome| slot.settle(decode::<W>(outcome).map(map))),
        );
        pending
    }
}

fn decode<W: DeserializeOwned>(outcome: Result<ApiResponse, String>) -> Result<W, ApiError> {
    let response = outcome.map_err(ApiError::FetchFailed)?;

    if !response.is_success() {
        return Err(ApiError::ServerError {
            status: response.status,
            status_text: response.status_text,
        });
    }

    serde_json::from_slice(&response.bytes)
        .map_err(|e| ApiError::FetchFailed(format!("invalid response body: {}", e)))
}

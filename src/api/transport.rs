// src/api/transport.rs
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), body: None }
    }

    pub fn post_json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self { method: Method::Post, url: url.into(), body: Some(body) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub bytes: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Called exactly once with the raw outcome of a request.
/// `Err` carries a transport-level description.
pub type Completion = Box<dyn FnOnce(Result<ApiResponse, String>) + Send + 'static>;

// Core trait for talking to the backend
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest, on_done: Completion);
}

/// `ehttp`-backed transport. Requests run off the UI thread; the egui
/// context, when attached, is woken after each completion so the panel
/// picks the result up without waiting for input.
#[derive(Clone, Default)]
pub struct HttpTransport {
    repaint: Option<egui::Context>,
}

impl HttpTransport {
    pub fn with_repaint(ctx: egui::Context) -> Self {
        Self { repaint: Some(ctx) }
    }

    fn build(request: ApiRequest) -> ehttp::Request {
        match request.method {
            Method::Get => ehttp::Request::get(request.url),
            Method::Post => {
                let mut req = ehttp::Request::post(request.url, request.body.unwrap_or_default());
                req.headers = ehttp::Headers::new(&[
                    ("Accept", "application/json"),
                    ("Content-Type", "application/json"),
                ]);
                req
            }
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest, on_done: Completion) {
        let repaint = self.repaint.clone();
        ehttp::fetch(Self::build(request), move |result| {
            on_done(result.map(|response| ApiResponse {
                status: response.status,
                status_text: response.status_text,
                bytes: response.bytes,
            }));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

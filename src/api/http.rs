//! Thin request/response wrapper over reqwest.
//!
//! One `ApiRequest` in, one `ApiResponse` (any status) or a transport error
//! out. Status interpretation is left to the caller.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::api::RequestError;

/// A fully described outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// Pre-serialized JSON body.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Whatever the server sent back, unjudged.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Reason phrase as sent by the server, or the canonical one for `status`.
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn into_status_error(self) -> RequestError {
        RequestError::Status {
            code: self.status,
            status_text: self.status_text,
        }
    }
}

/// Joins a base URL and a path without doubling or dropping the slash.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Cheap to clone; the inner reqwest client is `Arc`-based.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    /// Issue one request. Only failures to get *any* response are errors.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RequestError::Transport(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RequestError::Transport(format!("invalid header {name}: {e}")))?;
            headers.insert(header_name, value);
        }

        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.url, e);
            RequestError::Transport(e.to_string())
        })?;

        let status = response.status();
        let status_text = reason_phrase(&response);
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status.as_u16(),
            body.len()
        );

        Ok(ApiResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// hyper only records the phrase when it differs from the canonical one.
fn reason_phrase(response: &reqwest::Response) -> String {
    let status = response.status();
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok())
        .or_else(|| status.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

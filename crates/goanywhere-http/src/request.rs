//! Immutable request model

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;

/// An outgoing request as seen by pipeline stages.
///
/// Values are immutable: every `with_*` transform consumes the request and
/// returns a new one. A stage must never alter the request it was handed;
/// it derives a replacement and passes that downward.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    target: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Create a request with no headers and no body.
    ///
    /// `target` is a path with optional query (`/jobs/42?verbose=true`);
    /// the base-URI stage turns it absolute before transmission.
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Request method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request target (path + query, or an absolute URL once resolved)
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Request body bytes, if any
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Replace the method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replace the target
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set a header, replacing any existing value under the same name
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replace the whole header map
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Replace the body
    pub fn with_body(mut self, body: Option<Vec<u8>>) -> Self {
        self.body = body;
        self
    }
}

//! Default-header stage

use async_trait::async_trait;
use http::header::HeaderMap;

use crate::error::Result;
use crate::pipeline::{Next, Stage};
use crate::request::Request;
use crate::response::Response;

/// Sets each configured header only when the request carries no value under
/// that name. Explicit caller headers always win.
pub struct HeaderDefaults {
    defaults: HeaderMap,
}

impl HeaderDefaults {
    /// Build the stage from the default header set
    pub fn new(defaults: HeaderMap) -> Self {
        Self { defaults }
    }
}

#[async_trait]
impl Stage for HeaderDefaults {
    async fn process(&self, request: Request, next: Next<'_>) -> Result<Response> {
        let mut request = request;
        for (name, value) in self.defaults.iter() {
            if !request.headers().contains_key(name) {
                request = request.with_header(name.clone(), value.clone());
            }
        }
        next.run(request).await
    }
}

//! Content-type aware response decoding

use http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::response::Response;

/// Decoded response content: structured JSON or raw text
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Json(Value),
    Text(String),
}

impl Content {
    /// Structured value, if the body decoded as JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Text(_) => None,
        }
    }

    /// Raw text, if the body did not decode as JSON
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Json(_) => None,
        }
    }
}

/// Decode a response body by its declared content type.
///
/// A `Content-Type` starting with `application/json` gets a JSON parse;
/// when the parse fails the raw text is returned instead of an error. That
/// leniency is deliberate: a misbehaving server must not turn a delivered
/// body into a decoding failure. Any other content type is returned as text.
pub fn decode(response: &Response) -> Content {
    let text = response.text();

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);

    if is_json {
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            return Content::Json(value);
        }
    }

    Content::Text(text)
}

//! API-level error types

use goanywhere_http::HttpError;
use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure from the request pipeline: transport, classified status,
    /// redirect bound, or encoding
    #[error(transparent)]
    Http(#[from] HttpError),

    /// No API group registered under the requested name
    #[error("unknown api: {0:?}")]
    UnknownApi(String),
}

impl ApiError {
    /// Status code carried by a classified HTTP status failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(err) => err.status(),
            ApiError::UnknownApi(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goanywhere_http::classify;

    #[test]
    fn test_status_passes_through_http_failures() {
        let err = ApiError::from(classify(404, "gone"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_unknown_api_has_no_status() {
        let err = ApiError::UnknownApi("ftp".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "unknown api: \"ftp\"");
    }
}

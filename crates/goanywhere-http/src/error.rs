//! Error types and HTTP status classification

use thiserror::Error;

use crate::transport::TransportError;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors surfaced by the request pipeline
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network-level failure reported by the transport
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// HTTP error status (>= 400), classified via [`classify`]
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Redirect chain exceeded the configured hop limit
    #[error("redirect limit of {limit} hops exceeded")]
    RedirectLimit { limit: usize },

    /// Endpoint URL could not be parsed or resolved
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Header name or value was not representable
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// Request body could not be encoded as JSON
    #[error("failed to encode request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl HttpError {
    /// Status code carried by a classified status failure
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, HttpError::Transport(_))
    }

    /// Check if this is an HTTP status failure
    pub fn is_status(&self) -> bool {
        matches!(self, HttpError::Status { .. })
    }
}

/// Build a typed failure for an error response.
///
/// Known status codes compose the message from the reason phrase and the
/// body (`"{phrase}: {body}"`, or the phrase alone when the body is empty).
/// Unknown codes carry the body verbatim, so an empty body yields an empty
/// message. Total function: every input produces a value.
pub fn classify(status: u16, body: &str) -> HttpError {
    let message = match reason_phrase(status) {
        Some(phrase) if body.is_empty() => phrase.to_string(),
        Some(phrase) => format!("{phrase}: {body}"),
        None => body.to_string(),
    };
    HttpError::Status { status, message }
}

/// Reason phrases for status codes from 400 and up.
///
/// Standard codes plus the vendor extensions GoAnywhere deployments are seen
/// behind in practice (IIS, Nginx, Cloudflare).
pub(crate) fn reason_phrase(status: u16) -> Option<&'static str> {
    let phrase = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        419 => "Authentication Timeout",
        420 => "Method Failure",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Unordered Collection",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        440 => "Login Time-out",
        444 => "No Response",
        449 => "Retry With",
        450 => "Blocked by Windows Parental Controls",
        451 => "Unavailable For Legal Reasons",
        494 => "Request Header Too Large",
        495 => "Cert Error",
        496 => "No Cert",
        497 => "HTTP to HTTPS",
        499 => "Client Closed Request",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        509 => "Bandwidth Limit Exceeded",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        520 => "Unknown Error",
        521 => "Web Server Is Down",
        522 => "Connection Timed Out",
        523 => "Origin Is Unreachable",
        524 => "A Timeout Occurred",
        525 => "SSL Handshake Failed",
        526 => "Invalid SSL Certificate",
        527 => "Railgun Error",
        598 => "Network read timeout error",
        599 => "Network connect timeout error",
        _ => return None,
    };
    Some(phrase)
}

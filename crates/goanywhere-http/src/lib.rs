//! Request pipeline for the GoAnywhere MFT REST client
//!
//! Every outgoing request passes through an ordered chain of stages
//! (redirect handling, base-URI resolution, path-prefix rewriting, Basic
//! authentication, default headers) before a pluggable [`Transport`]
//! performs the exchange. On the way back, responses are decoded by
//! declared content type and error statuses classify into typed failures.
//!
//! ## Design
//!
//! - **Immutable requests**: stages derive new requests via `with_*`
//!   transforms, never mutate in place.
//! - **Explicit continuations**: a stage receives a [`Next`] representing
//!   the rest of the chain; the transport is always the innermost link.
//! - **No automatic retries**: redirect following (bounded) is the only
//!   re-execution behavior; everything else surfaces to the caller.
//! - **Concurrency-safe**: stages hold only construction-time
//!   configuration, so one pipeline serves concurrent callers without
//!   locking.

pub mod builder;
pub mod config;
pub mod error;
pub mod mediator;
pub mod methods;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod stages;
pub mod transport;

pub use builder::PipelineBuilder;
pub use config::HttpConfig;
pub use error::{classify, HttpError, Result};
pub use mediator::{decode, Content};
pub use methods::{BodyMode, MethodsClient, Params};
pub use pipeline::{Next, Pipeline, Stage};
pub use request::Request;
pub use response::Response;
pub use transport::{ReqwestTransport, Transport, TransportError};

/// Re-export commonly used HTTP types
pub use http::{header, HeaderMap, Method, StatusCode};

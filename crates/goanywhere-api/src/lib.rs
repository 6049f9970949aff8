//! GoAnywhere MFT administrative REST API client
//!
//! Bindings for the `gacmd` REST interface: job control and
//! resource/project/schedule/trigger/user/group management. Requests run
//! through the `goanywhere-http` pipeline (base-URI resolution, API-root
//! path prefixing, Basic authentication, default headers, bounded redirect
//! handling) and error statuses surface as typed failures.
//!
//! ```no_run
//! use goanywhere_api::Client;
//!
//! # async fn run() -> goanywhere_api::Result<()> {
//! let client = Client::create("https://mft.example.com:8001", "admin", "secret")?;
//! client.jobs().cancel_job(1013456789).await?;
//! let log = client.jobs().get_job_log(1013456789).await?;
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod client;
pub mod error;

pub use apis::{
    Jobs, Monitors, Projects, Resources, Schedules, SshKeys, Triggers, WebGroups, WebUsers,
};
pub use client::{ApiHandle, ApiKind, Client};
pub use error::{ApiError, Result};

/// Re-exports from the pipeline crate that appear in this crate's API
pub use goanywhere_http::{Content, HttpConfig, HttpError, Params};

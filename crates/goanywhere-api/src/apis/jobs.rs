//! Job control

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::HttpApi;
use crate::error::Result;

/// Operations on running and completed jobs
pub struct Jobs {
    http: HttpApi,
}

impl Jobs {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Cancel a job by its unique job number.
    pub async fn cancel_job(&self, job: u64) -> Result<()> {
        let response = self
            .http
            .post(&format!("/jobs/{job}/cancel"), &Params::new())
            .await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Download a job log.
    pub async fn get_job_log(&self, job: u64) -> Result<Content> {
        let response = HttpApi::ensure_ok(self.http.get(&format!("/jobs/{job}")).await?)?;
        Ok(decode(&response))
    }

    /// Pause a job.
    pub async fn pause_job(&self, job: u64) -> Result<()> {
        let response = self
            .http
            .post(&format!("/jobs/{job}/pause"), &Params::new())
            .await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Resume a paused job.
    pub async fn resume_job(&self, job: u64) -> Result<()> {
        let response = self
            .http
            .post(&format!("/jobs/{job}/resume"), &Params::new())
            .await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}

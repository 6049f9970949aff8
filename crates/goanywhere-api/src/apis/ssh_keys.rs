//! SSH key management

use std::sync::Arc;

use goanywhere_http::{Params, Pipeline};

use super::{segment, HttpApi};
use crate::error::Result;

/// Operations on SSH keys
pub struct SshKeys {
    http: HttpApi,
}

impl SshKeys {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Add an SSH key.
    pub async fn add_key(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/sshkeys", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Delete an SSH key.
    pub async fn delete_key(&self, kind: &str, name: &str) -> Result<()> {
        let path = format!("/sshkeys/{}/{}", segment(kind), segment(name));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}

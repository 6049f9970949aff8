//! Web user management

use std::sync::Arc;

use goanywhere_http::{decode, Content, Params, Pipeline};

use super::{remove_virtual_path, segment, HttpApi};
use crate::error::Result;

/// Operations on web users
pub struct WebUsers {
    http: HttpApi,
}

impl WebUsers {
    pub(crate) fn new(pipeline: Arc<Pipeline>) -> Self {
        Self {
            http: HttpApi::new(pipeline),
        }
    }

    /// Add a new web user.
    pub async fn add_user(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/webusers", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Update a web user.
    pub async fn update_user(&self, username: &str, params: &Params) -> Result<()> {
        // The server routes updates through the promote path.
        let path = format!("/webusers/{}/promote", segment(username));
        let response = self.http.put(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Delete a web user.
    pub async fn delete_user(&self, username: &str) -> Result<()> {
        let path = format!("/webusers/{}", segment(username));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Export a web user as XML.
    pub async fn export_user(&self, username: &str) -> Result<Content> {
        let path = format!("/webusers/{}", segment(username));
        let response = HttpApi::ensure_ok(self.http.get(&path).await?)?;
        Ok(decode(&response))
    }

    /// Import a web user.
    pub async fn import_user(&self, params: &Params) -> Result<()> {
        let response = self.http.post("/webusers", params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Promote a web user to another GoAnywhere server.
    pub async fn promote_user(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/promote", segment(username));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Reset a web user's password.
    pub async fn reset_password(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/resetpassword", segment(username));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Associate an SSH key with a web user.
    pub async fn associate_ssh_key(&self, username: &str, keyname: &str) -> Result<()> {
        let path = format!("/webusers/{}/sshkeys/{}", segment(username), segment(keyname));
        let response = self.http.post(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Remove an associated SSH key from a web user.
    pub async fn disassociate_ssh_key(&self, username: &str, keyname: &str) -> Result<()> {
        let path = format!("/webusers/{}/sshkeys/{}", segment(username), segment(keyname));
        let response = self.http.delete(&path, &Params::new()).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Add a virtual file to a web user.
    pub async fn add_virtual_file(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/virtualfiles", segment(username));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Remove a virtual file from a web user.
    pub async fn remove_virtual_file(&self, username: &str, filename: &str) -> Result<()> {
        let path = format!("/webusers/{}/virtualfiles", segment(username));
        let response = self.http.post(&path, &remove_virtual_path(filename)).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Update a virtual file of a web user.
    pub async fn update_virtual_file(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/virtualfiles", segment(username));
        let response = self.http.put(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Add a virtual folder to a web user.
    pub async fn add_virtual_folder(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/virtualfolders", segment(username));
        let response = self.http.post(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Remove a virtual folder from a web user.
    pub async fn remove_virtual_folder(&self, username: &str, folder: &str) -> Result<()> {
        let path = format!("/webusers/{}/virtualfolders", segment(username));
        let response = self.http.post(&path, &remove_virtual_path(folder)).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }

    /// Update a virtual folder of a web user.
    pub async fn update_virtual_folder(&self, username: &str, params: &Params) -> Result<()> {
        let path = format!("/webusers/{}/virtualfolders", segment(username));
        let response = self.http.put(&path, params).await?;
        HttpApi::ensure_ok(response)?;
        Ok(())
    }
}

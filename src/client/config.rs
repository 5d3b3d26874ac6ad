use std::env;

use log::info;

use super::context::SessionContext;
use super::error::{Result, SubmitError};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

/// Where ideas go and which retro they belong to.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub context: SessionContext,
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>, context: SessionContext) -> Self {
        Self {
            server_url: server_url.into(),
            context,
        }
    }

    /// Reads `RETRO_SERVER_URL`, `RETRO_ID` and `CSRF_TOKEN`.
    ///
    /// Callers that want `.env` support load it before calling this.
    pub fn from_env() -> Result<Self> {
        // Get server URL from environment or use default
        let server_url =
            env::var("RETRO_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let retro_id = env::var("RETRO_ID").map_err(|_| SubmitError::MissingVariable("RETRO_ID"))?;
        let csrf_token =
            env::var("CSRF_TOKEN").map_err(|_| SubmitError::MissingVariable("CSRF_TOKEN"))?;

        let context = SessionContext::new(retro_id, csrf_token)?;
        info!(
            "Using retro server at: {} (retro {})",
            server_url,
            context.retro_id()
        );

        Ok(Self::new(server_url, context))
    }
}

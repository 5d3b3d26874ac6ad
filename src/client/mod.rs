pub mod config;
pub mod context;
pub mod error;

use log::{debug, error, info};
use reqwest::Client;
use serde::Serialize;
use tokio::task::JoinHandle;

use config::ClientConfig;
use context::SessionContext;
use error::{Result, SubmitError};

pub const CSRF_HEADER: &str = "x-csrf-token";

/// Posts ideas into one retro on a retro server.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct IdeaSubmissionClient {
    endpoint: String,
    context: SessionContext,
    client: Client,
}

impl IdeaSubmissionClient {
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = format!(
            "{}/retros/{}/ideas",
            config.server_url.trim_end_matches('/'),
            config.context.retro_id()
        );
        info!("Submitting ideas to: {}", endpoint);

        Self {
            endpoint,
            context: config.context,
            client: Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Posts `idea` and waits for the server's answer.
    pub async fn submit<T>(&self, idea: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        debug!("Posting idea to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CSRF_HEADER, self.context.csrf_token().clone())
            .json(idea)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Could not read rejection body from {}: {}", self.endpoint, e);
                    String::new()
                }
            };
            return Err(SubmitError::Rejected { status, body });
        }

        debug!("Idea accepted with {}", status);
        Ok(())
    }

    /// Posts `idea` on a background task and returns immediately.
    ///
    /// A failure is written to the error log and goes nowhere else. The
    /// handle may be awaited to know the request has finished, or dropped.
    /// Must be called from within a tokio runtime.
    pub fn submit_detached<T>(&self, idea: T) -> JoinHandle<()>
    where
        T: Serialize,
    {
        // The task owns a JSON value, not the caller's type
        let body = serde_json::to_value(&idea).map_err(SubmitError::from);
        let client = self.clone();
        tokio::spawn(async move {
            let result = match body {
                Ok(body) => client.submit(&body).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                error!("Failed to submit idea to {}: {}", client.endpoint, e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server_url: &str) -> IdeaSubmissionClient {
        let context = SessionContext::new("abc123", "tok-xyz").unwrap();
        IdeaSubmissionClient::new(ClientConfig::new(server_url, context))
    }

    #[test]
    fn endpoint_is_scoped_to_retro() {
        let client = client_for("http://localhost:4000");
        assert_eq!(client.endpoint(), "http://localhost:4000/retros/abc123/ideas");
    }

    #[test]
    fn trailing_slash_on_server_url_is_ignored() {
        let client = client_for("https://retro.example.com/");
        assert_eq!(client.endpoint(), "https://retro.example.com/retros/abc123/ideas");
    }
}

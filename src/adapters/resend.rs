use crate::domain::model::EmailMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::{IntakeError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://api.resend.com/emails";

/// Name of the environment variable holding the provider credential.
pub const API_KEY_VAR: &str = "RESEND_API_KEY";

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    client: Client,
    endpoint: String,
    api_key_var: String,
}

impl ResendMailer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key_var: API_KEY_VAR.to_string(),
        }
    }

    /// Resolve the credential from a different environment variable. Used by
    /// tests to isolate themselves from the real key.
    pub fn with_api_key_var(mut self, var_name: impl Into<String>) -> Self {
        self.api_key_var = var_name.into();
        self
    }
}

impl Default for ResendMailer {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        // Resolved per send: a missing credential fails only the request
        // that needed it, and no provider call is attempted.
        let api_key =
            std::env::var(&self.api_key_var).map_err(|_| IntakeError::MissingApiKey)?;

        let payload = serde_json::json!({
            "from": message.from,
            "to": message.to,
            "subject": message.subject,
            "text": message.text,
            "html": message.html,
        });

        tracing::debug!("Posting email to provider at {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        tracing::debug!("Provider response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(IntakeError::ProviderRejectedError { status, body });
        }

        Ok(())
    }
}

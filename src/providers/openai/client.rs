use super::types::OpenAIError;
use crate::config::Config;
use crate::provider::CompletionProvider;
use crate::{ChatRequest, ChatResponse, Error};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI chat-completions provider.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI provider with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(config.api_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Turn a non-success body into a provider error, preferring the service's own message.
    fn api_error(status: reqwest::StatusCode, body: &str) -> Error {
        let detail = serde_json::from_str::<OpenAIError>(body)
            .map(|e| e.summary())
            .unwrap_or_else(|_| body.trim().to_string());

        Error::provider("OpenAI", format!("API error ({status}): {detail}"))
    }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.chat_completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let completion: ChatResponse = serde_json::from_str(&body)?;
        debug!(
            id = %completion.id,
            choices = completion.choices.len(),
            "received chat completion"
        );

        Ok(completion)
    }
}

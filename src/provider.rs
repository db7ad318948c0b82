use crate::{ChatRequest, ChatResponse, Error};

/// A chat-completion service that answers one request with one response.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the request and wait for the complete response.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error>;
}

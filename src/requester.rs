//! Sends a prompt and emits the first completion.

use crate::provider::CompletionProvider;
use crate::{ChatRequest, Error, Prompt};
use std::io::Write;
use tracing::info;

/// Prompt sent by the binary.
pub const DEFAULT_PROMPT: &str = "Hello, how can I integrate AI into my Node.js project?";

/// Model the binary requests.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Issues one chat-completion request per call and reports the first choice.
pub struct CompletionRequester<P> {
    provider: P,
    model: String,
}

impl<P: CompletionProvider> CompletionRequester<P> {
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Build the single-message request for `prompt`.
    pub fn request_for(&self, prompt: &str) -> ChatRequest {
        ChatRequest::new(self.model.clone(), Prompt::user(prompt))
    }

    /// Send `prompt` and return the text of the first choice.
    ///
    /// Every call reaches the provider; nothing is cached.
    pub async fn get_completion(&self, prompt: &str) -> Result<String, Error> {
        let request = self.request_for(prompt);
        let response = self.provider.complete(&request).await?;
        let content = response.first_content()?;

        info!(
            model = %self.model,
            choices = response.choices.len(),
            finish_reason = ?response.first_choice().and_then(|c| c.finish_reason.as_deref()),
            total_tokens = ?response.usage.as_ref().map(|u| u.total_tokens),
            bytes = content.len(),
            "completion received"
        );

        Ok(content)
    }

    /// Send `prompt` and write the first choice to `out` as one line.
    pub async fn print_completion<W: Write>(
        &self,
        prompt: &str,
        out: &mut W,
    ) -> Result<(), Error> {
        let content = self.get_completion(prompt).await?;
        writeln!(out, "{content}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ChatResponse, Choice, ResponseMessage};
    use crate::types::Role;
    use std::sync::Mutex;

    /// Replays a canned response and records each request it sees.
    struct CannedProvider {
        contents: Vec<Option<&'static str>>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl CannedProvider {
        fn new(contents: Vec<Option<&'static str>>) -> Self {
            Self {
                contents,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, Error> {
            self.seen.lock().unwrap().push(request.clone());
            let choices = self
                .contents
                .iter()
                .enumerate()
                .map(|(i, content)| Choice {
                    index: i as u32,
                    message: ResponseMessage {
                        role: Role::Assistant,
                        content: content.map(str::to_string),
                    },
                    finish_reason: Some("stop".to_string()),
                })
                .collect();

            Ok(ChatResponse {
                id: "chatcmpl-test".to_string(),
                model: request.model.clone(),
                choices,
                usage: None,
            })
        }
    }

    #[test]
    fn test_request_shape() {
        let requester = CompletionRequester::new(CannedProvider::new(vec![]), DEFAULT_MODEL);
        let request = requester.request_for(DEFAULT_PROMPT);

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
        assert_eq!(
            request.messages[0].content,
            "Hello, how can I integrate AI into my Node.js project?"
        );
    }

    #[tokio::test]
    async fn test_prints_first_choice_only() {
        let provider = CannedProvider::new(vec![Some("X"), Some("Y")]);
        let requester = CompletionRequester::new(provider, DEFAULT_MODEL);
        let mut out = Vec::new();

        requester
            .print_completion(DEFAULT_PROMPT, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "X\n");
    }

    #[tokio::test]
    async fn test_empty_choices_writes_nothing() {
        let requester = CompletionRequester::new(CannedProvider::new(vec![]), DEFAULT_MODEL);
        let mut out = Vec::new();

        let err = requester
            .print_completion(DEFAULT_PROMPT, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NoCompletion));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_null_content_is_an_error() {
        let requester = CompletionRequester::new(CannedProvider::new(vec![None]), DEFAULT_MODEL);
        let err = requester.get_completion(DEFAULT_PROMPT).await.unwrap_err();
        assert!(matches!(err, Error::EmptyContent { index: 0 }));
    }

    #[tokio::test]
    async fn test_each_call_reaches_provider() {
        let provider = CannedProvider::new(vec![Some("ok")]);
        let requester = CompletionRequester::new(provider, DEFAULT_MODEL);

        requester.get_completion(DEFAULT_PROMPT).await.unwrap();
        requester.get_completion(DEFAULT_PROMPT).await.unwrap();

        let seen = requester.provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
    }
}

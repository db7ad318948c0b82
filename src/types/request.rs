use super::{Message, Prompt};
use serde::{Deserialize, Serialize};

/// A chat-completion request: a model identifier and a list of messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<Prompt>) -> Self {
        Self {
            model: model.into(),
            messages: prompt.into().into_messages(),
        }
    }
}

//! Chat-completion responses.

use crate::types::Role;
use crate::Error;
use serde::{Deserialize, Serialize};

/// A chat-completion response. Only the fields this crate reads are modelled;
/// anything else the service sends is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One candidate continuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Message body of a choice. `content` is null when the model replied with
/// something other than text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMessage {
    pub role: Role,
    pub content: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatResponse {
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Text of the first choice. Later choices are ignored.
    pub fn first_content(&self) -> Result<String, Error> {
        let choice = self.first_choice().ok_or(Error::NoCompletion)?;
        choice
            .message
            .content
            .clone()
            .ok_or(Error::EmptyContent {
                index: choice.index,
            })
    }
}

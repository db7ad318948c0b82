use super::message::Message;

/// The conversation sent in a request: a single user message.
#[derive(Debug, Clone)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    /// Create a prompt with a single user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
        }
    }

    /// Get the messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::user(s)
    }
}

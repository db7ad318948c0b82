use serde::Deserialize;

/// OpenAI error response.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIError {
    pub error: ErrorDetails,
}

/// Error details from OpenAI API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl OpenAIError {
    /// Human-readable summary: the message, followed by the code when present.
    pub fn summary(&self) -> String {
        match &self.error.code {
            Some(code) => format!("{} ({code})", self.error.message),
            None => self.error.message.clone(),
        }
    }
}

use thiserror::Error;

/// Errors that can occur while requesting a completion.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No completion returned")]
    NoCompletion,

    #[error("Choice {index} has no text content")]
    EmptyContent { index: u32 },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}

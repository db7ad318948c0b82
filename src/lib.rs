//! Sends a single prompt to a chat-completion service and reports the first choice.
//!
//! The flow is linear: load [`Config`] from the environment, build an
//! [`OpenAIProvider`], hand it to a [`CompletionRequester`], and print the
//! first completion.

pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod providers;
pub mod requester;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use config::Config;
pub use error::Error;
pub use provider::CompletionProvider;
pub use providers::*;
pub use requester::{CompletionRequester, DEFAULT_MODEL, DEFAULT_PROMPT};
pub use response::*;
pub use types::*;

//! OpenAI chat-completions client.

pub mod client;
pub mod types;

pub use client::OpenAIProvider;

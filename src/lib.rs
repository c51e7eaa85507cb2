//! A thin client for Azure OpenAI chat completions.
//!
//! The binary sends one fixed question to the configured deployment and prints
//! the first choice's answer. The library exposes the pieces it is built from:
//! environment configuration, the request and response model, and a
//! [`ChatCompletionProvider`] implementation for Azure OpenAI.

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod request;
pub mod requester;
pub mod response;
pub mod types;

// Re-export core types for easy usage
pub use config::ProviderConfig;
pub use error::Error;
pub use provider::ChatCompletionProvider;
pub use providers::*;
pub use request::CompletionRequest;
pub use requester::{run, CompletionRequester};
pub use response::*;
pub use types::*;

//! Provider implementations for chat completion services.

pub mod azure;

// Re-export commonly used provider types
pub use azure::AzureOpenAIProvider;

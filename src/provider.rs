use crate::{CompletionRequest, CompletionResponse, Error};

/// A service that can answer chat completion requests.
#[async_trait::async_trait]
pub trait ChatCompletionProvider: Send + Sync + 'static {
    /// Submit one request and wait for the full response.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error>;
}

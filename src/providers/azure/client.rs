use super::types::{
    AzureChatMessage, AzureErrorResponse, ChatCompletionsRequest, ChatCompletionsResponse,
};
use crate::provider::ChatCompletionProvider;
use crate::{CompletionRequest, CompletionResponse, Error, ProviderConfig};
use reqwest::{Client, StatusCode};

const PROVIDER_NAME: &str = "Azure OpenAI";

/// Azure OpenAI provider implementation.
pub struct AzureOpenAIProvider {
    client: Client,
    api_key: String,
    api_version: String,
    endpoint: String,
}

impl AzureOpenAIProvider {
    /// Create a new provider bound to the configured endpoint, key and API version.
    /// No request timeout is set; the call waits until the service answers or the
    /// connection fails.
    pub fn new(config: &ProviderConfig) -> Result<Self, Error> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Chat completions URL for a deployment, without the query string.
    fn completions_url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, deployment
        )
    }

    fn convert_request(request: &CompletionRequest) -> ChatCompletionsRequest<'_> {
        let messages = request
            .messages
            .iter()
            .map(|msg| AzureChatMessage {
                role: msg.role.as_str(),
                content: &msg.content,
            })
            .collect();

        let sampling = &request.sampling;
        ChatCompletionsRequest {
            model: &request.model,
            messages,
            max_completion_tokens: sampling.max_completion_tokens,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            frequency_penalty: sampling.frequency_penalty,
            presence_penalty: sampling.presence_penalty,
        }
    }

    /// Map a non-success status and body to an error.
    fn classify_error(status: StatusCode, body: &str, deployment: &str) -> Error {
        let message = serde_json::from_str::<AzureErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::auth(message),
            StatusCode::NOT_FOUND => Error::ModelNotAvailable(deployment.to_string()),
            StatusCode::TOO_MANY_REQUESTS => Error::RateLimit,
            _ => Error::provider(PROVIDER_NAME, format!("API error ({status}): {message}")),
        }
    }
}

#[async_trait::async_trait]
impl ChatCompletionProvider for AzureOpenAIProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error> {
        let url = self.completions_url(&request.model);
        let body = Self::convert_request(request);
        tracing::debug!(
            %url,
            deployment = %request.model,
            messages = body.messages.len(),
            "sending chat completion"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "chat completion request rejected");
            return Err(Self::classify_error(status, &text, &request.model));
        }

        let parsed: ChatCompletionsResponse = serde_json::from_str(&text)?;
        tracing::debug!(
            id = %parsed.id,
            choices = parsed.choices.len(),
            usage = ?parsed.usage,
            "chat completion received"
        );

        Ok(parsed.into())
    }
}

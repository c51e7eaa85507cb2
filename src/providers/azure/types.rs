use crate::response::{Choice, CompletionResponse, FinishReason};
use crate::types::{Role, Usage};
use serde::{Deserialize, Serialize};

/// Message in a chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct AzureChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Azure OpenAI chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionsRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<AzureChatMessage<'a>>,
    pub max_completion_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

/// Azure OpenAI chat completions response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionsResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    pub role: Role,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<ChatCompletionsResponse> for CompletionResponse {
    fn from(response: ChatCompletionsResponse) -> Self {
        CompletionResponse {
            id: response.id,
            model: response.model,
            choices: response
                .choices
                .into_iter()
                .map(|choice| Choice {
                    index: choice.index,
                    role: choice.message.role,
                    content: choice.message.content,
                    finish_reason: choice.finish_reason,
                })
                .collect(),
            usage: response.usage,
        }
    }
}

/// Azure OpenAI error response.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureErrorResponse {
    pub error: ErrorDetails,
}

/// Error details from the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
}

//! Response handling for chat completions.

use crate::{Error, Role, Usage};
use serde::{Deserialize, Serialize};

/// A complete response from the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub id: String,
    pub model: String,
    /// Candidate completions in the order the service returned them.
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

/// A single candidate completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub role: Role,
    /// `None` when the service returned no text, e.g. after content filtering.
    pub content: Option<String>,
    pub finish_reason: Option<FinishReason>,
}

/// Reason why generation finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    #[serde(other)]
    Other,
}

impl CompletionResponse {
    pub fn first_choice(&self) -> Option<&Choice> {
        self.choices.first()
    }

    /// Text of the first choice.
    ///
    /// Fails with [`Error::EmptyResponse`] when there are no choices or the
    /// first choice carries no content.
    pub fn first_content(&self) -> Result<&str, Error> {
        self.first_choice()
            .and_then(|choice| choice.content.as_deref())
            .ok_or(Error::EmptyResponse)
    }
}

use crate::{Message, SamplingParameters};

/// A chat completion request addressed to a single deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Deployment name, also sent as the `model` field.
    pub model: String,
    pub messages: Vec<Message>,
    pub sampling: SamplingParameters,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        messages: Vec<Message>,
        sampling: SamplingParameters,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            sampling,
        }
    }
}

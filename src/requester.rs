//! The fixed Seattle question and the code that asks it.

use crate::{
    AzureOpenAIProvider, ChatCompletionProvider, CompletionRequest, Error, Message,
    ProviderConfig, SamplingParameters,
};
use std::io::Write;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const USER_PROMPT: &str = "What are 3 things to see in Seattle?";

pub const SAMPLING: SamplingParameters = SamplingParameters {
    max_completion_tokens: 800,
    temperature: 0.7,
    top_p: 1.0,
    frequency_penalty: 0.0,
    presence_penalty: 0.0,
};

/// Sends the fixed request to one deployment and reports the first answer.
pub struct CompletionRequester {
    provider: Box<dyn ChatCompletionProvider>,
    deployment: String,
}

impl CompletionRequester {
    pub fn new(provider: Box<dyn ChatCompletionProvider>, deployment: impl Into<String>) -> Self {
        Self {
            provider,
            deployment: deployment.into(),
        }
    }

    /// Build an Azure OpenAI backed requester from configuration.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, Error> {
        let provider = AzureOpenAIProvider::new(config)?;
        Ok(Self::new(Box::new(provider), config.deployment.clone()))
    }

    /// The request this requester always sends.
    pub fn fixed_request(deployment: &str) -> CompletionRequest {
        let messages = vec![Message::system(SYSTEM_PROMPT), Message::user(USER_PROMPT)];
        CompletionRequest::new(deployment, messages, SAMPLING)
    }

    /// Submit the fixed request and return the first choice's text.
    pub async fn complete_text(&self) -> Result<String, Error> {
        let request = Self::fixed_request(&self.deployment);
        let response = self.provider.complete(&request).await?;
        Ok(response.first_content()?.to_string())
    }

    /// Submit the fixed request and write the answer plus a newline to `out`.
    /// Nothing is written if the request fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        let text = self.complete_text().await?;
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

/// Read configuration from the environment, ask the question, print the answer to stdout.
pub async fn run() -> Result<(), Error> {
    let config = ProviderConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let requester = CompletionRequester::from_config(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    requester.run(&mut out).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Choice, FinishReason};
    use crate::{CompletionResponse, Role};
    use std::sync::{Arc, Mutex};

    struct StubProvider {
        choices: Vec<&'static str>,
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl StubProvider {
        fn new(choices: Vec<&'static str>) -> Self {
            Self {
                choices,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl ChatCompletionProvider for StubProvider {
        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, Error> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(CompletionResponse {
                id: "chatcmpl-stub".to_string(),
                model: request.model.clone(),
                choices: self
                    .choices
                    .iter()
                    .enumerate()
                    .map(|(i, text)| Choice {
                        index: i as u32,
                        role: Role::Assistant,
                        content: Some(text.to_string()),
                        finish_reason: Some(FinishReason::Stop),
                    })
                    .collect(),
                usage: None,
            })
        }
    }

    struct FailingProvider;

    #[async_trait::async_trait]
    impl ChatCompletionProvider for FailingProvider {
        async fn complete(&self, _: &CompletionRequest) -> Result<CompletionResponse, Error> {
            Err(Error::RateLimit)
        }
    }

    #[test]
    fn test_fixed_request_contents() {
        let request = CompletionRequester::fixed_request("gpt-4o");

        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, "You are a helpful assistant.");
        assert_eq!(request.messages[1].role, Role::User);
        assert_eq!(
            request.messages[1].content,
            "What are 3 things to see in Seattle?"
        );
        assert_eq!(request.sampling.max_completion_tokens, 800);
        assert_eq!(request.sampling.temperature, 0.7);
        assert_eq!(request.sampling.top_p, 1.0);
        assert_eq!(request.sampling.frequency_penalty, 0.0);
        assert_eq!(request.sampling.presence_penalty, 0.0);
    }

    #[tokio::test]
    async fn test_run_prints_first_choice_with_newline() {
        let requester = CompletionRequester::new(
            Box::new(StubProvider::new(vec!["first answer", "second answer"])),
            "gpt-4o",
        );

        let mut out = Vec::new();
        requester.run(&mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "first answer\n");
    }

    #[tokio::test]
    async fn test_run_sends_fixed_request() {
        let stub = StubProvider::new(vec!["ok"]);
        let seen = stub.seen.clone();

        let requester = CompletionRequester::new(Box::new(stub), "my-deployment");
        requester.run(&mut Vec::new()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], CompletionRequester::fixed_request("my-deployment"));
    }

    #[tokio::test]
    async fn test_empty_choices_writes_nothing() {
        let requester = CompletionRequester::new(Box::new(StubProvider::new(vec![])), "gpt-4o");

        let mut out = Vec::new();
        let err = requester.run(&mut out).await.unwrap_err();

        assert!(matches!(err, Error::EmptyResponse));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let requester = CompletionRequester::new(Box::new(FailingProvider), "gpt-4o");

        let mut out = Vec::new();
        let err = requester.run(&mut out).await.unwrap_err();

        assert!(matches!(err, Error::RateLimit));
        assert!(out.is_empty());
    }
}

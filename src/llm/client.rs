use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;

        let client = Client::with_config(openai_config).with_http_client(http_client);

        Ok(Self { client, timeout })
    }

    /// Upper bound on one completion call, retries included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages on model {}",
            request.messages.len(),
            request.model
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(request.model)
            .messages(messages)
            .build()?;

        // async-openai retries 429 responses on its own backoff schedule.
        let response =
            match tokio::time::timeout(self.timeout, self.client.chat().create(openai_request))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    warn!(
                        "Chat completion did not finish within {:?}",
                        self.timeout
                    );
                    return Err(Error::upstream(format!(
                        "completion request timed out after {}s",
                        self.timeout.as_secs()
                    )));
                }
            };

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: choice.message.content.unwrap_or_default(),
                },
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}

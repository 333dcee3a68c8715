mod prompt;

pub use prompt::{SYSTEM_PROMPT, build_messages};

use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Longest sentence accepted, counted in characters rather than bytes.
pub const MAX_SENTENCE_CHARS: usize = 150;

pub const SENTENCE_TOO_LONG_MESSAGE: &str = "150자 이하의 문장만 허용합니다.";

pub fn validate_sentence(sentence: &str) -> Result<()> {
    let length = sentence.chars().count();
    if length > MAX_SENTENCE_CHARS {
        warn!(
            "Rejecting sentence of {} characters (limit {})",
            length, MAX_SENTENCE_CHARS
        );
        return Err(Error::validation(SENTENCE_TOO_LONG_MESSAGE));
    }
    Ok(())
}

/// Rewrites sentences through an [`LlmClient`].
pub struct SentenceImprover {
    llm_client: Arc<dyn LlmClient>,
    model: String,
}

impl SentenceImprover {
    pub fn new(llm_client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validates `sentence` and returns the model's improved version.
    ///
    /// A rejected sentence never reaches the client.
    pub async fn improve(&self, sentence: &str) -> Result<String> {
        validate_sentence(sentence)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_messages(sentence),
        };

        debug!("Requesting improvement from model {}", self.model);

        let response = self.llm_client.create_chat_completion(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} from {} used {} tokens ({} prompt, {} completion)",
                response.id,
                response.model,
                usage.total_tokens,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| Error::upstream("completion contained no text content"))
    }
}

use crate::llm::ChatMessage;

pub const SYSTEM_PROMPT: &str =
    "당신은 주어진 문장을 개선해서 알려주는 작문 전문가입니다. 답변은 개선된 문장만 포함하면 됩니다.";

const USER_PROMPT_PREFIX: &str = "다음 문장을 표현력 측면에서 개선해 주세요: ";

/// Builds the system + user message pair sent for one sentence.
pub fn build_messages(sentence: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{USER_PROMPT_PREFIX}{sentence}")),
    ]
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "sentence": "안녕하세요. 만나서 반갑습니다. 커피라도 한 잔 하실래요?" }))]
pub struct NewSentenceRequest {
    /// Sentence to improve, at most 150 characters.
    pub sentence: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "result": "반갑습니다! 우리의 만남을 커피 한 잔으로 기념해볼까요?" }))]
pub struct NewSentenceResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "detail": "150자 이하의 문장만 허용합니다." }))]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self { hello: "World" }
    }
}

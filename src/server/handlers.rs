use super::{
    openapi,
    types::{ErrorResponse, NewSentenceRequest, NewSentenceResponse, RootResponse},
};
use crate::{Error, improver::SentenceImprover};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

const UPSTREAM_FAILURE_MESSAGE: &str = "문장 생성 서비스 호출에 실패했습니다.";
const INTERNAL_FAILURE_MESSAGE: &str = "내부 서버 오류가 발생했습니다.";

type ErrorReply = (StatusCode, Json<ErrorResponse>);

#[derive(Clone)]
pub struct AppState {
    pub improver: Arc<SentenceImprover>,
    pub app_name: Arc<str>,
}

impl AppState {
    pub fn new(improver: SentenceImprover, app_name: &str) -> Self {
        Self {
            improver: Arc::new(improver),
            app_name: Arc::from(app_name),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness check", body = RootResponse,
            example = json!({ "Hello": "World" }))
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

#[utoipa::path(
    post,
    path = "/new-sentence",
    tag = "Generation",
    operation_id = "new_sentence",
    summary = "표현력 개선 문장 생성",
    description = "GPT-4 Turbo를 이용해 주어진 문장의 표현력을 개선한 새로운 문장을 생성합니다.",
    request_body = NewSentenceRequest,
    responses(
        (status = 200, description = "개선된 문장", body = NewSentenceResponse),
        (status = 400, description = "150자를 초과하는 문장을 넣은 경우", body = ErrorResponse),
        (status = 502, description = "문장 생성 서비스 호출에 실패한 경우", body = ErrorResponse)
    )
)]
pub async fn new_sentence(
    State(state): State<AppState>,
    payload: Result<Json<NewSentenceRequest>, JsonRejection>,
) -> Result<Json<NewSentenceResponse>, ErrorReply> {
    let Json(request) = payload.map_err(rejection_response)?;

    info!(
        "Received new-sentence request ({} characters)",
        request.sentence.chars().count()
    );

    match state.improver.improve(&request.sentence).await {
        Ok(result) => {
            info!("Successfully generated improved sentence");
            Ok(Json(NewSentenceResponse { result }))
        }
        Err(e) => Err(error_response(e)),
    }
}

pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::document(&state.app_name))
}

fn rejection_response(rejection: JsonRejection) -> ErrorReply {
    warn!("Rejected new-sentence body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ErrorResponse {
            detail: rejection.body_text(),
        }),
    )
}

fn error_response(e: Error) -> ErrorReply {
    let status = e.status_code();
    let detail = if e.is_client_facing() {
        e.to_string()
    } else if status == StatusCode::BAD_GATEWAY {
        error!("Upstream completion failed: {}", e);
        UPSTREAM_FAILURE_MESSAGE.to_string()
    } else {
        error!("Failed to generate sentence: {}", e);
        INTERNAL_FAILURE_MESSAGE.to_string()
    };

    (status, Json(ErrorResponse { detail }))
}

//! OpenAPI document generated from the handler and payload types.

use super::{
    handlers,
    types::{ErrorResponse, NewSentenceRequest, NewSentenceResponse, RootResponse},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Memoire AI",
        version = "0.1.0",
        description = "주어진 문장의 표현력을 개선하는 API"
    ),
    paths(handlers::root, handlers::new_sentence),
    components(schemas(NewSentenceRequest, NewSentenceResponse, ErrorResponse, RootResponse)),
    tags(
        (name = "Generation", description = "주어진 문장을 개선한 새로운 문장을 생성")
    )
)]
pub struct ApiDoc;

/// The document served at `/openapi.json`, titled with the configured app name.
pub fn document(app_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = app_name.to_string();
    doc
}
